//! # safe-cli-core
//!
//! Core types, traits, and error definitions shared by every `safe-cli` crate.
//!
//! ## Modules
//!
//! - [`address`] - Checksummed address validation
//! - [`error`] - The closed [`SafeError`] taxonomy and the other error types
//! - [`operator`] - The [`SafeOperator`] collaborator interface
//! - [`types`] - Wallet snapshot and version types
//! - [`integer`] - 256-bit signed integer arguments
//! - [`deployments`] - Well-known Safe contract deployments
//! - [`config`] / [`config_loader`] - TOML configuration
//! - [`redact`] - Masking of private keys in output
//!
//! ## Error Handling
//!
//! Operator failures are split into the classified set and everything else:
//!
//! ```rust
//! use safe_cli_core::{OperatorError, SafeError};
//!
//! let err: OperatorError = SafeError::MissingSender.into();
//! assert!(err.as_safe().is_some());
//!
//! let other = OperatorError::unclassified(std::io::Error::other("socket closed"));
//! assert!(other.as_safe().is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod address;
pub mod config;
pub mod config_loader;
pub mod deployments;
pub mod error;
pub mod integer;
pub mod operator;
pub mod redact;
pub mod types;

pub use address::{is_checksum_address, validate, FormatError};
pub use config::{Config, ConfigBuilder, LogFormatSetting, LoggingConfig, NetworkConfig, ShellConfig};
pub use config_loader::{expand_path, load_config, ConfigLoader};
pub use error::{ConfigError, OperatorError, SafeError, UnclassifiedError};
pub use integer::{Integer, ParseIntegerError};
pub use operator::{OperatorResult, SafeOperator};
pub use redact::redact_sensitive;
pub use types::{SafeSnapshot, SafeVersion};

// Re-export primitive types used across the workspace
pub use alloy_primitives::{Address, U256};
