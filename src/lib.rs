//! Rust Token Ledger Library
//! # Overview
//!
//! This library provides a deterministic fungible-token ledger executed
//! atomically inside a transactional host environment. The host supplies
//! key-value storage, caller identity, address validation, and an
//! append-only event log; the engine supplies the ledger's arithmetic and
//! authorization invariants.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Amount, Address, TokenMetadata, Event, etc.)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Call orchestration, initialization, queries
//!   - [`core::transfer`] - Direct balance movement
//!   - [`core::allowance`] - Approvals and delegated transfers
//!   - [`core::ledger`] - Typed ledger access over the key-value store
//! - [`host`] - In-memory host environment for the CLI and tests
//! - [`io`] - Call-script replay and report output
//!
//! # Call Surface
//!
//! Mutating methods, routed through `main_call`:
//!
//! - **transfer**: Move value from the caller to a recipient
//! - **approve**: Grant (overwrite) a spender's allowance
//! - **transferFrom**: Move value out of an owner's balance, consuming the
//!   caller's allowance
//!
//! Read-only methods, routed through `query_call`: **balanceOf**,
//! **allowance**, **tokenInfo**. The one-shot **init** deployment call
//! writes the metadata record and credits the scaled total supply to the
//! initializing caller.
//!
//! # Invariants
//!
//! - The sum of all balances equals the fixed total supply after init
//! - Stored balances and allowances are never negative
//! - Self-directed transfers are logged no-ops
//! - `approve` replaces an allowance, never accumulates it
//! - Public balance/allowance reads fail hard on absence; only the
//!   recipient-credit path treats absence as zero

// Module declarations
pub mod cli;
pub mod core;
pub mod host;
pub mod io;
pub mod types;

pub use core::{LedgerBook, QueryResponse, TokenEngine};
pub use host::{memory_engine, BasicAddressValidator, MemoryStore, MemoryTokenEngine, RecordingEventLog};
pub use io::write_balance_report;
pub use types::{
    Address, Amount, Event, InitParams, Operation, Query, TokenError, TokenMetadata,
};
