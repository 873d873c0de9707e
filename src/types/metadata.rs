//! Token metadata record
//!
//! The singleton descriptor written exactly once at initialization and
//! stored as a JSON record under the metadata key. `totalSupply` uses its
//! camelCase wire name and the same decimal-string encoding as balance
//! records.

use serde::{Deserialize, Serialize};

use crate::types::Amount;

/// One-shot-initialized token descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Human-readable token name
    pub name: String,

    /// Short ticker symbol
    pub symbol: String,

    /// Token contract version string
    pub version: String,

    /// Number of decimal places; the stored supply is the human-entered
    /// supply scaled by `10^decimals`
    pub decimals: u32,

    /// Total token supply in base units, fixed for the life of the ledger
    #[serde(rename = "totalSupply")]
    pub total_supply: Amount,
}
