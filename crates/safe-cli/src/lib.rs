//! # safe-cli
//!
//! Interactive console for managing a Safe multisig wallet.
//!
//! The binary parses its arguments, loads `~/.safe-cli/config.toml`, sets up
//! logging and then reads lines in a loop, resolving each against the command
//! registry and running it on the wallet operator.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line arguments and exit codes
//! - [`logging`] - `tracing` subscriber setup and correlation ids
//! - [`shell`] - The line-by-line dispatch loop
//!
//! ## Usage
//!
//! ```no_run
//! use clap::Parser;
//! use safe_cli::cli::Cli;
//!
//! let cli = Cli::parse();
//! println!("Safe: {}", cli.safe_address);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod logging;
pub mod shell;

pub use logging::{
    init_logging, new_correlation_id, redact_sensitive, verbosity_to_level, LogConfig, LogError,
    LogFormat, LogGuard, LogLevel,
};
pub use shell::{Flow, LineError, Shell, ShellError, TerminalSink};
