//! # CLI Argument Definitions
//!
//! ```text
//! safe-cli 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed
//! safe-cli 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed https://rinkeby.example/rpc -vv
//! ```
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level
//! - `-c, --config <PATH>` - Path to configuration file

use std::path::PathBuf;

use clap::Parser;
use safe_cli_core::{Address, FormatError};

/// Interactive console for a Safe multisig wallet.
#[derive(Debug, Parser)]
#[command(name = "safe-cli")]
#[command(author, version, about = "Interactive console for a Safe multisig wallet")]
pub struct Cli {
    /// Checksummed address of the Safe to manage
    #[arg(value_name = "SAFE_ADDRESS", value_parser = parse_safe_address)]
    pub safe_address: Address,

    /// Ethereum node RPC URL, overrides `network.node_url` from the config
    #[arg(value_name = "NODE_URL")]
    pub node_url: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    ///
    /// - `-v` - Show info messages
    /// - `-vv` - Show debug messages
    /// - `-vvv` - Show trace messages
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to config file
    ///
    /// Defaults to `~/.safe-cli/config.toml`; a missing default file means
    /// built-in defaults.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Value parser running the console's address validator.
///
/// # Errors
///
/// Returns a [`FormatError`] unless `value` is a `0x`-prefixed, correctly
/// checksummed address.
pub fn parse_safe_address(value: &str) -> Result<Address, FormatError> {
    safe_cli_core::validate(value)
}
