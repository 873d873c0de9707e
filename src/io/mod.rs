//! I/O module
//!
//! Handles call-script replay input and report output.
//!
//! # Components
//!
//! - `script` - JSON-lines call-script reading and replay
//! - `report` - final balance report serialization (CSV)

pub mod report;
pub mod script;

pub use report::write_balance_report;
pub use script::{replay, ReplaySummary, ScriptCall};
