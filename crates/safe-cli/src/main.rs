//! # `safe-cli`
//!
//! Interactive console for a Safe multisig wallet.
//!
//! ## Usage
//!
//! ```bash
//! # Open a console for a Safe using ~/.safe-cli/config.toml
//! safe-cli 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed
//!
//! # Override the node and show debug logs
//! safe-cli 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed http://localhost:8545 -vv
//!
//! # Use another configuration file
//! safe-cli 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed -c ./rinkeby.toml
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use clap::Parser;
use safe_cli::cli::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use safe_cli::cli::Cli;
use safe_cli::logging::{init_logging, LogConfig, LogError, LogGuard};
use safe_cli::Shell;
use safe_cli_command::default_registry;
use safe_cli_core::{expand_path, load_config, Config, ConfigError, ConfigLoader};
use safe_cli_operator::OfflineOperator;

/// Load the configuration named on the command line, or the default one.
fn load(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match cli.config.as_deref() {
        Some(path) => ConfigLoader::load_file(path)?,
        None => load_config()?,
    };
    if let Some(url) = &cli.node_url {
        config.network.node_url.clone_from(url);
    }
    Ok(config)
}

/// Set up logging from the `[logging]` section and the `-v` count.
fn setup_logging(config: &Config, verbose: u8) -> Result<LogGuard, LogError> {
    init_logging(&LogConfig::from_settings(&config.logging, verbose)?)
}

/// Run the console; the log guard is dropped before the exit code is returned.
fn run(cli: &Cli) -> i32 {
    let config = match load(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return EXIT_ERROR;
        }
    };

    let _guard = match setup_logging(&config, cli.verbose) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return EXIT_ERROR;
        }
    };

    tracing::info!(
        safe = %cli.safe_address,
        chain_id = config.network.chain_id,
        node_url = %config.network.node_url,
        "console starting"
    );

    let history = match expand_path(&config.shell.history_file) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::warn!(error = %e, "history disabled");
            None
        }
    };

    let operator = OfflineOperator::new(cli.safe_address, &config, std::io::stdout());
    let mut shell = Shell::new(default_registry(), operator, cli.safe_address);

    match shell.run(history.as_deref()) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "console stopped");
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Main entry point for the console.
fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}
