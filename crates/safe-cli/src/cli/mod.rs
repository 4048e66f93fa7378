//! # CLI Module
//!
//! Command-line interface for the Safe console.
//!
//! - [`args`] - Argument parsing with clap
//! - [`exit_codes`] - Process exit codes
//!
//! ```text
//! safe-cli <SAFE_ADDRESS> [NODE_URL] [-v...] [-c PATH]
//! ```

pub mod args;
pub mod exit_codes;

pub use args::Cli;
