//! Unsigned arbitrary-precision token amounts
//!
//! All balances, allowances, and transfer values in the ledger are unsigned
//! integers of unbounded magnitude, carried on the wire and in the store as
//! decimal strings. This module wraps `num_bigint::BigUint` in a dedicated
//! `Amount` type with the only operations the ledger needs: addition and
//! multiplication (which cannot overflow), explicitly-checked subtraction
//! (which can underflow), comparison, and decimal scaling.
//!
//! No floating point anywhere; `pow10` is repeated integer multiplication.

use num_bigint::BigUint;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;

use crate::types::TokenError;

/// Unsigned arbitrary-precision integer amount
///
/// Parsed from and displayed as a canonical decimal string: no sign, no
/// whitespace, no radix prefix. Leading zeros are accepted on input and
/// normalized away on output ("007" re-serializes as "7").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(BigUint);

impl Amount {
    /// The zero amount
    pub fn zero() -> Self {
        Amount(BigUint::ZERO)
    }

    /// Parse a decimal-string amount
    ///
    /// Accepts non-empty ASCII digit strings only. Signs, whitespace, and
    /// radix prefixes are rejected so that every stored value round-trips.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::InvalidAmount` if the string is empty or
    /// contains any non-digit character.
    pub fn parse(value: &str) -> Result<Self, TokenError> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TokenError::invalid_amount(value));
        }
        // All-digit input cannot fail to parse in base 10.
        match BigUint::parse_bytes(value.as_bytes(), 10) {
            Some(magnitude) => Ok(Amount(magnitude)),
            None => Err(TokenError::invalid_amount(value)),
        }
    }

    /// Whether this amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == BigUint::ZERO
    }

    /// Add another amount
    ///
    /// Arbitrary-precision addition cannot overflow.
    pub fn add(&self, other: &Amount) -> Amount {
        Amount(&self.0 + &other.0)
    }

    /// Subtract another amount, failing explicitly on underflow
    ///
    /// Returns `None` when `other > self`. Callers are expected to have
    /// already rejected the operation with a balance or allowance check;
    /// this is the backstop that keeps stored values non-negative.
    pub fn checked_sub(&self, other: &Amount) -> Option<Amount> {
        if other.0 > self.0 {
            None
        } else {
            Some(Amount(&self.0 - &other.0))
        }
    }

    /// Multiply by another amount
    ///
    /// Arbitrary-precision multiplication cannot overflow.
    pub fn mul(&self, other: &Amount) -> Amount {
        Amount(&self.0 * &other.0)
    }

    /// Compute `10^decimals` by repeated integer multiplication
    ///
    /// This is the scale factor applied to a human-entered supply at
    /// initialization.
    pub fn pow10(decimals: u32) -> Amount {
        let ten = BigUint::from(10u32);
        let mut power = BigUint::from(1u32);
        for _ in 0..decimals {
            power *= &ten;
        }
        Amount(power)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount(BigUint::from(value))
    }
}

// Amounts travel inside the stored metadata record as decimal strings,
// matching the balance and allowance value encoding.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Amount::parse(&raw).map_err(|e| de::Error::custom(e.to_string()))
    }
}
