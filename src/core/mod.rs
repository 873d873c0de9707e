//! Core business logic module
//!
//! This module contains the core ledger components:
//! - `traits` - Host collaborator contracts (store, validator, event log)
//! - `keys` - Store key scheme shared by balances, allowances, and metadata
//! - `ledger` - Typed ledger access over the raw key-value store
//! - `engine` - Call orchestration, initialization, and the query surface
//! - `transfer` - Direct balance movement
//! - `allowance` - Approvals and delegated transfers

pub mod allowance;
pub mod engine;
pub mod keys;
pub mod ledger;
pub mod traits;
pub mod transfer;

pub use engine::{QueryResponse, TokenEngine};
pub use ledger::LedgerBook;
pub use traits::{AddressValidator, EventLog, LedgerStore};
