//! Balance report output
//!
//! Serializes the final account balances from a store dump as CSV with an
//! `address,balance` header. The in-memory store iterates in key order, so
//! the report is deterministic; allowance records and the metadata record
//! are filtered out by the key scheme.

use std::io::Write;

use serde::Serialize;

use crate::core::keys;
use crate::host::MemoryStore;
use crate::types::TokenError;

/// One report row
#[derive(Debug, Serialize)]
struct BalanceRow<'a> {
    address: &'a str,
    balance: &'a str,
}

/// Write all account balances as CSV, sorted by address
///
/// # Errors
///
/// Returns an error if CSV serialization or the underlying write fails.
pub fn write_balance_report<W: Write>(store: &MemoryStore, writer: W) -> Result<(), TokenError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for (key, value) in store.entries() {
        if keys::is_balance_key(key) {
            csv_writer.serialize(BalanceRow {
                address: key,
                balance: value,
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}
