//! Checksummed address validation.
//!
//! Every address typed at the console must be written in its EIP-55 mixed-case
//! form. The check is purely syntactic: no node is queried and nothing is said
//! about whether the account exists on chain.
//!
//! # Example
//!
//! ```
//! use safe_cli_core::address::validate;
//!
//! let address = validate("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").expect("valid");
//! assert_eq!(address.to_checksum(None), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
//!
//! // Same bytes, wrong casing
//! assert!(validate("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").is_err());
//! ```

use alloy_primitives::Address;

/// A candidate string that is not a checksummed address.
///
/// Raised while parsing a command line; the command is never dispatched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{candidate} is not a valid checksummed ethereum address")]
pub struct FormatError {
    candidate: String,
}

impl FormatError {
    /// Create a `FormatError` for the rejected candidate.
    #[must_use]
    pub fn new(candidate: impl Into<String>) -> Self {
        Self {
            candidate: candidate.into(),
        }
    }

    /// The string that failed validation.
    #[must_use]
    pub fn candidate(&self) -> &str {
        &self.candidate
    }
}

/// Validate a checksummed address.
///
/// The candidate must carry the `0x` prefix, 40 hex digits, and the exact
/// EIP-55 casing of those digits. Addresses whose digits contain no letters
/// are trivially checksummed.
///
/// # Errors
///
/// Returns [`FormatError`] carrying the candidate if any of the above fails.
pub fn validate(candidate: &str) -> Result<Address, FormatError> {
    Address::parse_checksummed(candidate, None).map_err(|_| FormatError::new(candidate))
}

/// Returns `true` if `candidate` passes [`validate`].
#[must_use]
pub fn is_checksum_address(candidate: &str) -> bool {
    validate(candidate).is_ok()
}
