//! Configuration types for the Safe console.
//!
//! Configuration is stored in TOML format at `~/.safe-cli/config.toml`.
//!
//! # Examples
//!
//! ```
//! use safe_cli_core::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.network.chain_id, 1);
//! assert_eq!(config.shell.history_file, "~/.safe-cli/history");
//!
//! let toml_str = Config::default_toml();
//! assert!(toml_str.contains("[safe]"));
//! ```
//!
//! # Default TOML Output
//!
//! ```toml
//! [network]
//! chain_id = 1
//! node_url = "http://localhost:8545"
//!
//! [shell]
//! history_file = "~/.safe-cli/history"
//!
//! [logging]
//! format = "pretty"
//!
//! [safe]
//! owners = []
//! threshold = 1
//! nonce = 0
//! version = "1.1.1"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::SafeSnapshot;

/// Top-level configuration for the Safe console.
///
/// # Examples
///
/// ```
/// use safe_cli_core::config::Config;
///
/// let toml_str = r#"
/// [network]
/// chain_id = 4
/// node_url = "https://rinkeby.example.org"
///
/// [safe]
/// threshold = 1
/// "#;
///
/// let config: Config = toml::from_str(toml_str).expect("valid TOML");
/// assert_eq!(config.network.chain_id, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Network the Safe lives on.
    #[serde(default)]
    pub network: NetworkConfig,

    /// Interactive shell settings.
    #[serde(default)]
    pub shell: ShellConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Wallet snapshot used by the offline operator.
    #[serde(default)]
    pub safe: SafeSnapshot,
}

const fn default_chain_id() -> u64 {
    1
}

fn default_node_url() -> String {
    "http://localhost:8545".to_string()
}

/// Network settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkConfig {
    /// EIP-155 chain id. Selects the per-network service URLs.
    ///
    /// Default: 1 (mainnet)
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,

    /// Ethereum node RPC URL.
    #[serde(default = "default_node_url")]
    pub node_url: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            chain_id: default_chain_id(),
            node_url: default_node_url(),
        }
    }
}

fn default_history_file() -> String {
    "~/.safe-cli/history".to_string()
}

/// Interactive shell settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShellConfig {
    /// File where entered lines are persisted. Supports `~` expansion.
    #[serde(default = "default_history_file")]
    pub history_file: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_file: default_history_file(),
        }
    }
}

/// Log output format as written in the configuration file.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatSetting {
    /// Human-readable, colored.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
    /// Single line per event.
    Compact,
}

/// Log output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Optional log file, rotated daily. Supports `~` expansion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Output format.
    #[serde(default)]
    pub format: LogFormatSetting,
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if:
    /// - `network.node_url` is empty
    /// - `safe.threshold` is zero
    /// - `safe.threshold` exceeds the number of listed owners
    /// - `safe.version` is not a valid version string
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.network.node_url.trim().is_empty() {
            return Err(ConfigError::invalid_value("network.node_url", "<empty>"));
        }

        if self.safe.threshold == 0 {
            return Err(ConfigError::invalid_value("safe.threshold", "0"));
        }

        let owner_count = self.safe.owners.len() as u64;
        if owner_count > 0 && self.safe.threshold > owner_count {
            return Err(ConfigError::invalid_value(
                "safe.threshold",
                format!("{} (only {owner_count} owners)", self.safe.threshold),
            ));
        }

        if self.safe.parsed_version().is_err() {
            return Err(ConfigError::invalid_value(
                "safe.version",
                self.safe.version.clone(),
            ));
        }

        Ok(())
    }

    /// Generates the default configuration as a commented TOML string.
    #[must_use]
    pub fn default_toml() -> String {
        r#"[network]
chain_id = 1
node_url = "http://localhost:8545"

[shell]
history_file = "~/.safe-cli/history"

[logging]
# file = "~/.safe-cli/safe-cli.log"
format = "pretty"

# Snapshot of the Safe used by the offline operator.
[safe]
owners = []
threshold = 1
nonce = 0
version = "1.1.1"
master_copy = "0x34CfAC646f301356fAa8B21e94227e3583Fe3F5F"
fallback_handler = "0xd5D82B6aDDc9027B22dCA772Aa68D5d74cdBdF44"
modules = []
balance = "0"

[safe.token_balances]
# "0x..." = "1000000000000000000"
"#
        .to_string()
    }

    /// Creates a configuration builder for customizing values.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for creating customized [`Config`] instances.
///
/// ```
/// use safe_cli_core::config::Config;
///
/// let config = Config::builder()
///     .chain_id(5)
///     .node_url("http://goerli.local:8545")
///     .build();
///
/// assert_eq!(config.network.chain_id, 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new configuration builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Sets the chain id.
    #[must_use]
    pub const fn chain_id(mut self, chain_id: u64) -> Self {
        self.config.network.chain_id = chain_id;
        self
    }

    /// Sets the node URL.
    #[must_use]
    pub fn node_url(mut self, url: impl Into<String>) -> Self {
        self.config.network.node_url = url.into();
        self
    }

    /// Sets the history file.
    #[must_use]
    pub fn history_file(mut self, path: impl Into<String>) -> Self {
        self.config.shell.history_file = path.into();
        self
    }

    /// Sets the log file.
    #[must_use]
    pub fn log_file(mut self, path: impl Into<String>) -> Self {
        self.config.logging.file = Some(path.into());
        self
    }

    /// Sets the log format.
    #[must_use]
    pub const fn log_format(mut self, format: LogFormatSetting) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Sets the wallet snapshot.
    #[must_use]
    pub fn safe(mut self, safe: SafeSnapshot) -> Self {
        self.config.safe = safe;
        self
    }

    /// Builds the final configuration.
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}
