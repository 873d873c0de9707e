//! In-memory host environment
//!
//! Concrete implementations of the `core::traits` contracts backing the
//! replay CLI and the test suite. A production embedder binds the engine
//! to its own transactional storage and address rules instead; nothing in
//! `core` depends on these types.

use std::collections::BTreeMap;

use crate::core::traits::{AddressValidator, EventLog, LedgerStore};
use crate::core::TokenEngine;
use crate::types::Event;

/// Engine flavor wired to the in-memory host
pub type MemoryTokenEngine = TokenEngine<MemoryStore, BasicAddressValidator, RecordingEventLog>;

/// BTreeMap-backed key-value store
///
/// Ordered iteration keeps every store dump deterministic, which the
/// balance report relies on.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Iterate all records in key order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl LedgerStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.records.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) {
        self.records.insert(key.to_string(), value);
    }
}

/// Vec-backed append-only event log
#[derive(Debug, Default)]
pub struct RecordingEventLog {
    events: Vec<Event>,
}

impl RecordingEventLog {
    /// Create an empty log
    pub fn new() -> Self {
        RecordingEventLog::default()
    }

    /// All logged events, in append order
    pub fn entries(&self) -> &[Event] {
        &self.events
    }
}

impl EventLog for RecordingEventLog {
    fn append(&mut self, event: Event) {
        self.events.push(event);
    }
}

/// Syntactic address check: 1 to 64 ASCII alphanumeric characters
///
/// Rejecting `_` (along with every other symbol) gives the allowance key
/// scheme its collision-freeness guarantee.
#[derive(Debug, Clone)]
pub struct BasicAddressValidator {
    max_len: usize,
}

impl BasicAddressValidator {
    /// Create a validator with a custom maximum length
    pub fn with_max_len(max_len: usize) -> Self {
        BasicAddressValidator { max_len }
    }
}

impl Default for BasicAddressValidator {
    fn default() -> Self {
        BasicAddressValidator { max_len: 64 }
    }
}

impl AddressValidator for BasicAddressValidator {
    fn is_valid(&self, address: &str) -> bool {
        !address.is_empty()
            && address.len() <= self.max_len
            && address.bytes().all(|b| b.is_ascii_alphanumeric())
    }
}

/// Build a [`MemoryTokenEngine`] with default in-memory collaborators
pub fn memory_engine() -> MemoryTokenEngine {
    TokenEngine::new(
        MemoryStore::new(),
        BasicAddressValidator::default(),
        RecordingEventLog::new(),
    )
}
