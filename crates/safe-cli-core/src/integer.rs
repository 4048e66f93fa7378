//! Signed integers wide enough for any 256-bit word.
//!
//! Console arguments such as ERC-721 token ids and wei amounts span the full
//! `uint256` range, and negative values must still parse so the operator can
//! reject them itself. [`Integer`] carries a sign and a [`U256`] magnitude.
//!
//! ```
//! use safe_cli_core::{Integer, U256};
//!
//! let max: Integer = "115792089237316195423570985008687907853269984665640564039457584007913129639935"
//!     .parse()
//!     .expect("fits in 256 bits");
//! assert_eq!(max.to_unsigned(), Some(U256::MAX));
//!
//! let negative: Integer = "-1".parse().expect("valid");
//! assert_eq!(negative.to_unsigned(), None);
//! ```

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;

/// The token is not a base-10 integer of at most 256 bits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid integer: {0}")]
pub struct ParseIntegerError(String);

/// Base-10 signed integer with a 256-bit magnitude.
///
/// Zero is never negative, so `-0` and `0` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Integer {
    negative: bool,
    magnitude: U256,
}

impl Integer {
    /// Zero.
    pub const ZERO: Self = Self {
        negative: false,
        magnitude: U256::ZERO,
    };

    fn new(negative: bool, magnitude: U256) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    /// Returns `true` below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Absolute value.
    #[must_use]
    pub const fn magnitude(&self) -> U256 {
        self.magnitude
    }

    /// The value as an unsigned word, or `None` if negative.
    #[must_use]
    pub const fn to_unsigned(&self) -> Option<U256> {
        if self.negative {
            None
        } else {
            Some(self.magnitude)
        }
    }

    /// The value as a `u64`, or `None` if negative or too large.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.to_unsigned().and_then(|value| u64::try_from(value).ok())
    }
}

impl FromStr for Integer {
    type Err = ParseIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseIntegerError(s.to_string()));
        }

        let magnitude =
            U256::from_str_radix(digits, 10).map_err(|_| ParseIntegerError(s.to_string()))?;
        Ok(Self::new(negative, magnitude))
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value < 0, U256::from(value.unsigned_abs()))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self::new(false, U256::from(value))
    }
}

impl From<U256> for Integer {
    fn from(value: U256) -> Self {
        Self::new(false, value)
    }
}
