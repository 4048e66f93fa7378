//! Core data types for the Safe console.
//!
//! - [`SafeSnapshot`] - The wallet state an operator works against
//! - [`SafeVersion`] - A comparable Safe contract version

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::deployments::{LAST_DEFAULT_CALLBACK_HANDLER, LAST_SAFE_CONTRACT, LAST_SAFE_VERSION};

// ============================================================================
// SafeVersion
// ============================================================================

/// A `major.minor.patch` Safe contract version.
///
/// Build metadata (`1.3.0+L2`) and pre-release suffixes are ignored for
/// ordering.
///
/// ```
/// use safe_cli_core::SafeVersion;
///
/// let old: SafeVersion = "1.0.0".parse().expect("valid");
/// let new: SafeVersion = "1.1.1".parse().expect("valid");
/// assert!(old < new);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SafeVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

/// The version string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid safe version: {0}")]
pub struct ParseVersionError(String);

impl SafeVersion {
    /// Create a version from its components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for SafeVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let core = s
            .trim()
            .split(['+', '-'])
            .next()
            .unwrap_or_default();

        let mut parts = [0u32; 3];
        let mut count = 0;
        for (slot, piece) in parts.iter_mut().zip(core.split('.')) {
            *slot = piece
                .parse()
                .map_err(|_| ParseVersionError(s.to_string()))?;
            count += 1;
        }

        if count == 0 || core.split('.').count() > 3 {
            return Err(ParseVersionError(s.to_string()));
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for SafeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

// ============================================================================
// SafeSnapshot
// ============================================================================

const fn default_threshold() -> u64 {
    1
}

fn default_version() -> String {
    LAST_SAFE_VERSION.to_string()
}

const fn default_master_copy() -> Address {
    LAST_SAFE_CONTRACT
}

const fn default_fallback_handler() -> Address {
    LAST_DEFAULT_CALLBACK_HANDLER
}

/// State of a Safe as seen by the console.
///
/// Loaded from the `[safe]` section of the configuration file.
///
/// # Examples
///
/// ```
/// use safe_cli_core::SafeSnapshot;
///
/// let snapshot: SafeSnapshot = toml::from_str(r#"
/// owners = ["0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"]
/// threshold = 1
/// balance = "1000"
/// "#).expect("valid TOML");
///
/// assert_eq!(snapshot.owners.len(), 1);
/// assert_eq!(snapshot.version, "1.1.1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeSnapshot {
    /// Address of the Safe. Usually supplied on the command line instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Current owners, in contract order.
    #[serde(default)]
    pub owners: Vec<Address>,

    /// Number of owner signatures required.
    #[serde(default = "default_threshold")]
    pub threshold: u64,

    /// Safe transaction nonce.
    #[serde(default)]
    pub nonce: u64,

    /// Contract version reported by the master copy.
    #[serde(default = "default_version")]
    pub version: String,

    /// Logic contract the proxy delegates to.
    #[serde(default = "default_master_copy")]
    pub master_copy: Address,

    /// Contract receiving calls the Safe does not implement.
    #[serde(default = "default_fallback_handler")]
    pub fallback_handler: Address,

    /// Enabled modules.
    #[serde(default)]
    pub modules: Vec<Address>,

    /// Ether balance in wei.
    #[serde(default)]
    pub balance: U256,

    /// ERC-20 balances keyed by token contract.
    #[serde(default)]
    pub token_balances: BTreeMap<Address, U256>,
}

impl Default for SafeSnapshot {
    fn default() -> Self {
        Self {
            address: None,
            owners: Vec::new(),
            threshold: default_threshold(),
            nonce: 0,
            version: default_version(),
            master_copy: default_master_copy(),
            fallback_handler: default_fallback_handler(),
            modules: Vec::new(),
            balance: U256::ZERO,
            token_balances: BTreeMap::new(),
        }
    }
}

impl SafeSnapshot {
    /// Parsed contract version.
    ///
    /// # Errors
    ///
    /// Returns [`ParseVersionError`] if `version` is not a valid version string.
    pub fn parsed_version(&self) -> Result<SafeVersion, ParseVersionError> {
        self.version.parse()
    }

    /// Returns `true` if `address` is an owner.
    #[must_use]
    pub fn is_owner(&self, address: &Address) -> bool {
        self.owners.contains(address)
    }

    /// Balance held for an ERC-20 token, zero when unknown.
    #[must_use]
    pub fn token_balance(&self, token: &Address) -> U256 {
        self.token_balances.get(token).copied().unwrap_or(U256::ZERO)
    }
}
