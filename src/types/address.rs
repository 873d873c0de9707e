//! Account address type
//!
//! Addresses are opaque strings owned by the host environment; the engine
//! never interprets them beyond using them as store keys. Syntactic
//! validation is supplied by the host's [`AddressValidator`] and applied at
//! each operation boundary, so an `Address` value itself carries no
//! validity guarantee.
//!
//! [`AddressValidator`]: crate::core::traits::AddressValidator

use serde::{Deserialize, Serialize};
use std::fmt;

/// An account address string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Wrap a raw address string
    pub fn new(raw: impl Into<String>) -> Self {
        Address(raw.into())
    }

    /// The address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(raw: &str) -> Self {
        Address::new(raw)
    }
}
