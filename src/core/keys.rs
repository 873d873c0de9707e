//! Store key scheme
//!
//! Three kinds of record share one flat key space:
//! - balance: the account address itself
//! - allowance: `allow_{owner}_to_{spender}`
//! - metadata: the fixed `global_attribute` key
//!
//! Collision-freeness relies on valid addresses never containing `_`; the
//! address validator must guarantee that. Under it, no allowance key or the
//! metadata key can equal an address, and the (owner, spender) composition
//! is unambiguous.

/// Fixed key of the singleton metadata record
pub const METADATA_KEY: &str = "global_attribute";

const ALLOWANCE_PREFIX: &str = "allow_";

/// Balance key for an address
pub fn balance_key(address: &str) -> String {
    address.to_string()
}

/// Allowance key for an (owner, spender) pair
pub fn allowance_key(owner: &str, spender: &str) -> String {
    format!("{}{}_to_{}", ALLOWANCE_PREFIX, owner, spender)
}

/// Whether `key` is a balance key (neither an allowance key nor the
/// metadata key)
///
/// Used by the report writer to pick account balances out of a full store
/// dump.
pub fn is_balance_key(key: &str) -> bool {
    key != METADATA_KEY && !key.starts_with(ALLOWANCE_PREFIX)
}
