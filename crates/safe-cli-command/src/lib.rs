//! # safe-cli-command
//!
//! Turns a line typed at the Safe console into a validated command and runs it
//! against a [`SafeOperator`](safe_cli_core::SafeOperator).
//!
//! ## Modules
//!
//! - [`value`] - Argument specifications and resolved argument values
//! - [`registry`] - [`CommandRegistry`], [`CommandSpec`] and line resolution
//! - [`translate`] - Translation of classified operator failures into messages
//! - [`table`] - The console's command table
//! - [`error`] - Resolution and registration errors
//!
//! ## Example
//!
//! ```
//! use safe_cli_command::{default_registry, ResolveError};
//!
//! let registry = default_registry();
//!
//! let parsed = registry.resolve("change_threshold 2").expect("valid line");
//! assert_eq!(parsed.name(), "change_threshold");
//!
//! assert!(matches!(
//!     registry.resolve("bogus_command"),
//!     Err(ResolveError::UnknownCommand { .. })
//! ));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod registry;
pub mod table;
pub mod translate;
pub mod value;

pub use error::{ArgumentError, RegistryError, ResolveError};
pub use registry::{CommandRegistry, CommandSpec, Handler, ParsedCommand};
pub use table::default_registry;
pub use translate::{classify, with_error_translation, ClassifiedMessage, MessageSink, Severity};
pub use value::{ArgKind, ArgValue, Argument, ArgumentSpec, Arguments, Arity};
