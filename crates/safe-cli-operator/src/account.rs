//! Accounts loaded from secp256k1 private keys.
//!
//! An [`Account`] holds the private key for the session and its derived
//! address. Key bytes are zeroized on drop and never appear in `Debug` output.
//!
//! # Example
//!
//! ```
//! use safe_cli_operator::Account;
//!
//! let account = Account::from_hex(
//!     "0xfad9c8855b740a0b7ed4c221dbad0f33a83a49cad6b3fe8d5817ac83d38b6a19",
//! )
//! .expect("valid key");
//!
//! assert_eq!(
//!     account.address().to_checksum(None),
//!     "0x96216849c49358B10257cb55b28eA603c874b05E"
//! );
//! ```

use std::fmt;

use alloy_primitives::Address;
use k256::ecdsa::SigningKey;
use sha3::{Digest, Keccak256};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of a secp256k1 private key in bytes.
pub const SECRET_KEY_LEN: usize = 32;

/// Why a private key could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    /// The key is not hexadecimal.
    #[error("private key is not valid hex")]
    InvalidHex,

    /// The key does not decode to 32 bytes.
    #[error("private key must be {SECRET_KEY_LEN} bytes, got {actual}")]
    InvalidLength {
        /// Decoded length.
        actual: usize,
    },

    /// The bytes are not a valid secp256k1 scalar.
    #[error("private key is not a valid secp256k1 scalar")]
    InvalidScalar,
}

#[derive(Zeroize, ZeroizeOnDrop)]
struct SecretBytes([u8; SECRET_KEY_LEN]);

/// An account whose private key is loaded into this session.
pub struct Account {
    address: Address,
    secret: SecretBytes,
}

impl Account {
    /// Load an account from a hex private key, with or without `0x`.
    ///
    /// # Errors
    ///
    /// Returns an [`AccountError`] if the key is not 32 hex-encoded bytes
    /// forming a valid secp256k1 scalar.
    pub fn from_hex(key: &str) -> Result<Self, AccountError> {
        let digits = key.trim();
        let digits = digits.strip_prefix("0x").unwrap_or(digits);

        let mut decoded = hex::decode(digits).map_err(|_| AccountError::InvalidHex)?;
        let result = <[u8; SECRET_KEY_LEN]>::try_from(decoded.as_slice())
            .map_err(|_| AccountError::InvalidLength {
                actual: decoded.len(),
            })
            .and_then(Self::from_bytes);
        decoded.zeroize();
        result
    }

    /// Load an account from raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidScalar`] for zero or out-of-range keys.
    pub fn from_bytes(bytes: [u8; SECRET_KEY_LEN]) -> Result<Self, AccountError> {
        let secret = SecretBytes(bytes);
        let signing_key =
            SigningKey::from_bytes((&secret.0).into()).map_err(|_| AccountError::InvalidScalar)?;
        let address = derive_address(&signing_key);

        Ok(Self { address, secret })
    }

    /// The account address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The signing key, rebuilt from the stored secret.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidScalar`] if the stored bytes are not a
    /// valid key, which cannot happen for an account built by this module.
    pub fn signing_key(&self) -> Result<SigningKey, AccountError> {
        SigningKey::from_bytes((&self.secret.0).into()).map_err(|_| AccountError::InvalidScalar)
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for Account {}

/// Keccak-256 of the uncompressed public key without its `0x04` prefix,
/// last 20 bytes.
fn derive_address(signing_key: &SigningKey) -> Address {
    let point = signing_key.verifying_key().to_encoded_point(false);
    let hash = Keccak256::digest(&point.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}
