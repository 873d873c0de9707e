//! Typed ledger access
//!
//! This module provides the `LedgerBook` struct which wraps the host's raw
//! key-value store with balance, allowance, and metadata accessors.
//!
//! The LedgerBook is responsible for:
//! - Applying the store key scheme
//! - Encoding amounts as canonical decimal strings and the metadata record
//!   as JSON
//! - Enforcing the read-path asymmetry: `balance` and `allowance` fail hard
//!   on absence, while `balance_or_zero` (the recipient-credit path) treats
//!   absence as zero
//!
//! A stored value that fails to decode surfaces as `CorruptRecord`: it
//! means the store contents do not match the ledger's encoding.

use crate::core::keys;
use crate::core::traits::LedgerStore;
use crate::types::{Address, Amount, TokenError, TokenMetadata};

/// Typed view over the host's key-value store
pub struct LedgerBook<S> {
    store: S,
}

impl<S: LedgerStore> LedgerBook<S> {
    /// Wrap a host store
    pub fn new(store: S) -> Self {
        LedgerBook { store }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the balance of `address`
    ///
    /// # Errors
    ///
    /// `MissingBalance` if no balance was ever recorded for the address;
    /// absence is distinct from zero on this path.
    pub fn balance(&self, address: &Address) -> Result<Amount, TokenError> {
        let key = keys::balance_key(address.as_str());
        match self.store.get(&key) {
            Some(raw) => decode_amount(&key, &raw),
            None => Err(TokenError::missing_balance(address.as_str())),
        }
    }

    /// Load the balance of `address`, treating absence as zero
    ///
    /// Recipient-credit path only; every other balance read must go
    /// through [`balance`](Self::balance).
    pub fn balance_or_zero(&self, address: &Address) -> Result<Amount, TokenError> {
        let key = keys::balance_key(address.as_str());
        match self.store.get(&key) {
            Some(raw) => decode_amount(&key, &raw),
            None => Ok(Amount::zero()),
        }
    }

    /// Write the balance of `address`
    pub fn set_balance(&mut self, address: &Address, value: &Amount) {
        self.store
            .put(&keys::balance_key(address.as_str()), value.to_string());
    }

    /// Load the allowance granted by `owner` to `spender`
    ///
    /// # Errors
    ///
    /// `MissingAllowance` if no allowance record exists for the pair;
    /// never a zero default.
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Result<Amount, TokenError> {
        let key = keys::allowance_key(owner.as_str(), spender.as_str());
        match self.store.get(&key) {
            Some(raw) => decode_amount(&key, &raw),
            None => Err(TokenError::missing_allowance(
                owner.as_str(),
                spender.as_str(),
            )),
        }
    }

    /// Write the allowance granted by `owner` to `spender`, replacing any
    /// previous value
    pub fn set_allowance(&mut self, owner: &Address, spender: &Address, value: &Amount) {
        self.store.put(
            &keys::allowance_key(owner.as_str(), spender.as_str()),
            value.to_string(),
        );
    }

    /// Whether the metadata record has been written
    pub fn has_metadata(&self) -> bool {
        self.store.get(keys::METADATA_KEY).is_some()
    }

    /// Load the metadata record
    ///
    /// # Errors
    ///
    /// `MissingMetadata` if the ledger is uninitialized, `CorruptRecord`
    /// if the stored record fails to decode.
    pub fn metadata(&self) -> Result<TokenMetadata, TokenError> {
        let raw = self
            .store
            .get(keys::METADATA_KEY)
            .ok_or(TokenError::MissingMetadata)?;
        serde_json::from_str(&raw).map_err(|e| TokenError::corrupt_record(keys::METADATA_KEY, e))
    }

    /// Write the metadata record
    ///
    /// # Errors
    ///
    /// `CorruptRecord` if the record fails to serialize.
    pub fn put_metadata(&mut self, metadata: &TokenMetadata) -> Result<(), TokenError> {
        let raw = serde_json::to_string(metadata)
            .map_err(|e| TokenError::corrupt_record(keys::METADATA_KEY, e))?;
        self.store.put(keys::METADATA_KEY, raw);
        Ok(())
    }
}

fn decode_amount(key: &str, raw: &str) -> Result<Amount, TokenError> {
    Amount::parse(raw).map_err(|e| TokenError::corrupt_record(key, e))
}
