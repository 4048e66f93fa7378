//! Error types for the Safe console.
//!
//! This module provides the error types shared across the workspace:
//!
//! - [`SafeError`] - The closed set of classified wallet-operator failures
//! - [`UnclassifiedError`] - Any other operator failure
//! - [`OperatorError`] - What a [`SafeOperator`](crate::SafeOperator) call returns
//! - [`ConfigError`] - Configuration failures
//!
//! # Example
//!
//! ```rust
//! use safe_cli_core::error::{OperatorError, SafeError};
//! use safe_cli_core::Address;
//!
//! fn add(owners: &[Address], owner: Address) -> Result<(), OperatorError> {
//!     if owners.contains(&owner) {
//!         return Err(SafeError::owner_already_present(owner).into());
//!     }
//!     Ok(())
//! }
//!
//! let owner = Address::repeat_byte(0x11);
//! assert!(add(&[owner], owner).is_err());
//! ```

use alloy_primitives::{Address, U256};

// ============================================================================
// SafeError
// ============================================================================

/// Classified failures raised by a wallet operator.
///
/// The set is closed: the console translates each variant into exactly one
/// user-facing message, and anything outside the set travels as an
/// [`UnclassifiedError`] instead. Each variant owns exactly the context its
/// message needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SafeError {
    /// Opaque failure surfaced by the operator's own API layer.
    #[error("operator API failure: {}", .message.as_deref().unwrap_or("<no details>"))]
    GenericOperatorFailure {
        /// Text reported by the API layer, if any.
        message: Option<String>,
    },

    /// Fewer loaded owner accounts than the threshold requires.
    #[error("not enough signatures: {missing} missing")]
    InsufficientSignatures {
        /// How many more owner signatures are needed.
        missing: u64,
    },

    /// No default sender has been loaded.
    #[error("sender required")]
    MissingSender,

    /// The address is already an owner.
    #[error("owner already present: {address}")]
    OwnerAlreadyPresent {
        /// The existing owner.
        address: Address,
    },

    /// The address is not an owner.
    #[error("owner not present: {address}")]
    OwnerNotPresent {
        /// The address that is not an owner.
        address: Address,
    },

    /// The change would leave fewer owners than the threshold.
    #[error("threshold would exceed owner count")]
    ThresholdBelowOwnerFloor,

    /// The fallback handler is already set to this address.
    #[error("fallback handler unchanged: {address}")]
    FallbackHandlerUnchanged {
        /// The current fallback handler.
        address: Address,
    },

    /// The Safe version does not support fallback handlers.
    #[error("fallback handler not supported")]
    FallbackHandlerUnsupported,

    /// The master copy is already set to this address.
    #[error("master copy unchanged: {address}")]
    MasterCopyUnchanged {
        /// The current master copy.
        address: Address,
    },

    /// The address is not a recognized master copy.
    #[error("invalid master copy: {address}")]
    MasterCopyInvalid {
        /// The rejected master copy.
        address: Address,
    },

    /// The Safe already runs the latest supported version.
    #[error("already at latest version")]
    AlreadyAtLatestVersion,

    /// The amount exceeds the available ether or token balance.
    #[error("insufficient balance: current balance is {balance}")]
    InsufficientBalance {
        /// The balance currently available.
        balance: U256,
    },
}

impl SafeError {
    /// Create a `GenericOperatorFailure` carrying a message.
    #[must_use]
    pub fn generic(message: impl Into<String>) -> Self {
        Self::GenericOperatorFailure {
            message: Some(message.into()),
        }
    }

    /// Create an `InsufficientSignatures` error.
    #[must_use]
    pub const fn insufficient_signatures(missing: u64) -> Self {
        Self::InsufficientSignatures { missing }
    }

    /// Create an `OwnerAlreadyPresent` error.
    #[must_use]
    pub const fn owner_already_present(address: Address) -> Self {
        Self::OwnerAlreadyPresent { address }
    }

    /// Create an `OwnerNotPresent` error.
    #[must_use]
    pub const fn owner_not_present(address: Address) -> Self {
        Self::OwnerNotPresent { address }
    }

    /// Create a `FallbackHandlerUnchanged` error.
    #[must_use]
    pub const fn fallback_handler_unchanged(address: Address) -> Self {
        Self::FallbackHandlerUnchanged { address }
    }

    /// Create a `MasterCopyUnchanged` error.
    #[must_use]
    pub const fn master_copy_unchanged(address: Address) -> Self {
        Self::MasterCopyUnchanged { address }
    }

    /// Create a `MasterCopyInvalid` error.
    #[must_use]
    pub const fn master_copy_invalid(address: Address) -> Self {
        Self::MasterCopyInvalid { address }
    }

    /// Create an `InsufficientBalance` error.
    #[must_use]
    pub const fn insufficient_balance(balance: U256) -> Self {
        Self::InsufficientBalance { balance }
    }

    /// Stable tag for structured logs.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::GenericOperatorFailure { .. } => "generic_operator_failure",
            Self::InsufficientSignatures { .. } => "insufficient_signatures",
            Self::MissingSender => "missing_sender",
            Self::OwnerAlreadyPresent { .. } => "owner_already_present",
            Self::OwnerNotPresent { .. } => "owner_not_present",
            Self::ThresholdBelowOwnerFloor => "threshold_below_owner_floor",
            Self::FallbackHandlerUnchanged { .. } => "fallback_handler_unchanged",
            Self::FallbackHandlerUnsupported => "fallback_handler_unsupported",
            Self::MasterCopyUnchanged { .. } => "master_copy_unchanged",
            Self::MasterCopyInvalid { .. } => "master_copy_invalid",
            Self::AlreadyAtLatestVersion => "already_at_latest_version",
            Self::InsufficientBalance { .. } => "insufficient_balance",
        }
    }
}

// ============================================================================
// UnclassifiedError / OperatorError
// ============================================================================

/// An operator failure outside the [`SafeError`] set.
///
/// These are never translated; they propagate to whoever invoked the command.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct UnclassifiedError(Box<dyn std::error::Error + Send + Sync + 'static>);

impl UnclassifiedError {
    /// Wrap any error.
    pub fn new<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self(error.into())
    }

    /// Create an unclassified error from a plain message.
    #[must_use]
    pub fn msg(message: impl Into<String>) -> Self {
        Self(message.into().into())
    }

    /// Borrow the wrapped error.
    #[must_use]
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.0.as_ref()
    }
}

/// Result of a [`SafeOperator`](crate::SafeOperator) call.
#[derive(Debug, thiserror::Error)]
pub enum OperatorError {
    /// A classified failure.
    #[error(transparent)]
    Safe(#[from] SafeError),

    /// Anything else.
    #[error(transparent)]
    Unclassified(#[from] UnclassifiedError),
}

impl OperatorError {
    /// Wrap an arbitrary error as unclassified.
    pub fn unclassified<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self::Unclassified(UnclassifiedError::new(error))
    }

    /// The classified failure, if this is one.
    #[must_use]
    pub const fn as_safe(&self) -> Option<&SafeError> {
        match self {
            Self::Safe(err) => Some(err),
            Self::Unclassified(_) => None,
        }
    }
}

// ============================================================================
// ConfigError
// ============================================================================

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file was not found.
    #[error("configuration file not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Failed to parse or serialize the configuration.
    #[error("failed to parse configuration: {context}")]
    ParseFailed {
        /// Context about the parsing failure.
        context: String,
    },

    /// A configuration value is invalid.
    #[error("invalid value for {field}: {value}")]
    InvalidValue {
        /// The field name with the invalid value.
        field: String,
        /// The invalid value.
        value: String,
    },

    /// File system I/O failed.
    #[error("{context}: {source}")]
    Io {
        /// What was being attempted.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The home directory could not be determined.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}

impl ConfigError {
    /// Create a `FileNotFound` error.
    #[must_use]
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a `ParseFailed` error.
    #[must_use]
    pub fn parse_failed(context: impl Into<String>) -> Self {
        Self::ParseFailed {
            context: context.into(),
        }
    }

    /// Create an `InvalidValue` error.
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an `Io` error with context.
    #[must_use]
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a `NoHomeDirectory` error.
    #[must_use]
    pub const fn no_home_directory() -> Self {
        Self::NoHomeDirectory
    }
}
