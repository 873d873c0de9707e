//! Call boundary types
//!
//! Incoming calls arrive as a method name plus a JSON params object. The
//! method string is resolved exactly once, here, into a closed enum:
//! [`Operation`] for the mutating surface and [`Query`] for the read-only
//! surface. An unrecognized method is a boundary error; downstream code
//! only ever matches on the enums.
//!
//! Address and value fields stay raw strings at this layer; semantic
//! validation (address syntax, positivity) is an engine precondition, not
//! a parsing concern.

use serde::Deserialize;
use serde_json::Value;

use crate::types::TokenError;

/// Parameters for the one-shot `init` deployment call
#[derive(Debug, Clone, Deserialize)]
pub struct InitParams {
    /// Human-readable token name, must be non-empty
    pub name: String,

    /// Human-entered supply before decimal scaling, must be non-empty
    pub supply: String,

    /// Ticker symbol, must be non-empty
    pub symbol: String,

    /// Contract version string, must be non-empty
    pub version: String,

    /// Decimal places; `u32` at the boundary enforces "defined,
    /// non-negative integer"
    pub decimals: u32,
}

/// A mutating operation routed through `main`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Move `value` from the caller to `to`
    Transfer { to: String, value: String },

    /// Grant (overwrite) an allowance of `value` from the caller to `spender`
    Approve { spender: String, value: String },

    /// Move `value` from `from` to `to`, consuming the caller's allowance
    TransferFrom {
        from: String,
        to: String,
        value: String,
    },
}

/// A read-only query routed through `query`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// The token metadata record
    TokenInfo,

    /// The recorded balance of `address`; fails if none exists
    BalanceOf { address: String },

    /// The allowance granted by `owner` to `spender`; fails if none exists
    Allowance { owner: String, spender: String },
}

#[derive(Deserialize)]
struct TransferParams {
    to: String,
    value: String,
}

#[derive(Deserialize)]
struct ApproveParams {
    spender: String,
    value: String,
}

#[derive(Deserialize)]
struct TransferFromParams {
    from: String,
    to: String,
    value: String,
}

#[derive(Deserialize)]
struct BalanceOfParams {
    address: String,
}

#[derive(Deserialize)]
struct AllowanceParams {
    owner: String,
    spender: String,
}

fn decode<T: for<'de> Deserialize<'de>>(method: &str, params: &Value) -> Result<T, TokenError> {
    serde_json::from_value(params.clone()).map_err(|e| TokenError::invalid_params(method, e))
}

impl Operation {
    /// Resolve a mutating call from its method name and params
    ///
    /// # Errors
    ///
    /// `UnknownMethod` for anything outside the mutating surface (including
    /// query method names; the two surfaces do not overlap), or
    /// `InvalidParams` when the params object does not match the method.
    pub fn from_call(method: &str, params: &Value) -> Result<Self, TokenError> {
        match method {
            "transfer" => {
                let p: TransferParams = decode(method, params)?;
                Ok(Operation::Transfer {
                    to: p.to,
                    value: p.value,
                })
            }
            "approve" => {
                let p: ApproveParams = decode(method, params)?;
                Ok(Operation::Approve {
                    spender: p.spender,
                    value: p.value,
                })
            }
            "transferFrom" => {
                let p: TransferFromParams = decode(method, params)?;
                Ok(Operation::TransferFrom {
                    from: p.from,
                    to: p.to,
                    value: p.value,
                })
            }
            _ => Err(TokenError::unknown_method(method)),
        }
    }
}

impl Query {
    /// Resolve a read-only call from its method name and params
    ///
    /// # Errors
    ///
    /// `UnknownMethod` for anything outside the query surface, or
    /// `InvalidParams` when the params object does not match the method.
    pub fn from_call(method: &str, params: &Value) -> Result<Self, TokenError> {
        match method {
            "tokenInfo" => Ok(Query::TokenInfo),
            "balanceOf" => {
                let p: BalanceOfParams = decode(method, params)?;
                Ok(Query::BalanceOf { address: p.address })
            }
            "allowance" => {
                let p: AllowanceParams = decode(method, params)?;
                Ok(Query::Allowance {
                    owner: p.owner,
                    spender: p.spender,
                })
            }
            _ => Err(TokenError::unknown_method(method)),
        }
    }
}
