//! Types module
//!
//! Contains core data structures used throughout the ledger.
//! This module organizes types into logical submodules:
//! - `address`: account address newtype
//! - `amount`: unsigned arbitrary-precision amounts
//! - `error`: error types for the token ledger
//! - `event`: append-only log entries
//! - `metadata`: the one-shot token descriptor
//! - `operation`: closed call enums for the mutating and query surfaces

pub mod address;
pub mod amount;
pub mod error;
pub mod event;
pub mod metadata;
pub mod operation;

pub use address::Address;
pub use amount::Amount;
pub use error::TokenError;
pub use event::Event;
pub use metadata::TokenMetadata;
pub use operation::{InitParams, Operation, Query};
