//! # safe-cli-operator
//!
//! The wallet operator shipped with the Safe console.
//!
//! ## Modules
//!
//! - [`account`] - Accounts loaded from secp256k1 private keys
//! - [`networks`] - Per-network explorer and service URLs
//! - [`offline`] - [`OfflineOperator`], a dry-run operator over a wallet snapshot
//!
//! ## Example
//!
//! ```
//! use safe_cli_core::{Config, SafeOperator};
//! use safe_cli_operator::OfflineOperator;
//!
//! let safe = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().expect("address");
//! let mut operator = OfflineOperator::new(safe, &Config::default(), Vec::new());
//!
//! operator.get_threshold().expect("threshold");
//! assert_eq!(String::from_utf8_lossy(operator.output()), "1\n");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod account;
pub mod networks;
pub mod offline;

pub use account::{Account, AccountError};
pub use networks::Network;
pub use offline::OfflineOperator;
