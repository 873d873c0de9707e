//! Call-script replay
//!
//! A script is a sequence of JSON call envelopes, one per line, in the
//! shape the ledger's host would deliver them:
//!
//! ```text
//! {"caller": "deployer", "method": "init", "params": {"name": "Example Token", "supply": "100", "symbol": "EXT", "version": "1.0", "decimals": 3}}
//! {"caller": "deployer", "method": "transfer", "params": {"to": "alice01", "value": "2500"}}
//! {"method": "balanceOf", "params": {"address": "alice01"}}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Query responses
//! are written to `out` as JSON lines in call order. A failed call aborts
//! that call only; under strict mode it aborts the whole replay instead.
//! Each call runs against the engine the way a host transaction would:
//! by the engine's write ordering, a failure leaves no partial state.

use std::io::{BufRead, Write};

use serde::Deserialize;
use serde_json::Value;

use crate::core::QueryResponse;
use crate::host::MemoryTokenEngine;
use crate::types::{Address, InitParams, Operation, Query, TokenError};

/// One JSON call envelope from a script line
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptCall {
    /// Host-authenticated caller; required for mutating calls, ignored by
    /// queries
    pub caller: Option<String>,

    /// Method name, resolved once into the closed call enums
    pub method: String,

    /// Params object passed through to the boundary decoder
    #[serde(default)]
    pub params: Value,
}

/// Counters describing a finished replay
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Calls that completed successfully
    pub applied: usize,

    /// Calls rejected by the engine or malformed in the script
    pub rejected: usize,
}

/// What a resolved script call dispatches to
enum Dispatch {
    Init(InitParams),
    Mutate(Operation),
    Read(Query),
}

fn resolve(call: &ScriptCall) -> Result<Dispatch, TokenError> {
    match call.method.as_str() {
        "init" => {
            let params: InitParams = serde_json::from_value(call.params.clone())
                .map_err(|e| TokenError::invalid_params("init", e))?;
            Ok(Dispatch::Init(params))
        }
        "tokenInfo" | "balanceOf" | "allowance" => {
            Ok(Dispatch::Read(Query::from_call(&call.method, &call.params)?))
        }
        _ => Ok(Dispatch::Mutate(Operation::from_call(
            &call.method,
            &call.params,
        )?)),
    }
}

fn required_caller(call: &ScriptCall, line: u64) -> Result<Address, TokenError> {
    match call.caller.as_deref() {
        Some(raw) if !raw.is_empty() => Ok(Address::new(raw)),
        _ => Err(TokenError::parse_error(
            line,
            format!("mutating call '{}' requires a caller", call.method),
        )),
    }
}

/// Replay a call script against an in-memory engine
///
/// Reads call envelopes line by line, dispatches each through the engine,
/// and writes query responses to `out` as JSON lines. Failed calls are
/// reported to stderr and skipped unless `strict` is set, in which case
/// the first failure aborts the replay.
///
/// # Errors
///
/// Returns an error on I/O failure, or on the first failed call when
/// `strict` is set.
pub fn replay<R: BufRead, W: Write>(
    reader: R,
    engine: &mut MemoryTokenEngine,
    out: &mut W,
    strict: bool,
) -> Result<ReplaySummary, TokenError> {
    let mut summary = ReplaySummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index as u64 + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match apply_line(engine, trimmed, line_no, out)? {
            Ok(()) => summary.applied += 1,
            Err(error) => {
                if strict {
                    return Err(error);
                }
                eprintln!("line {}: {}", line_no, error);
                summary.rejected += 1;
            }
        }
    }

    Ok(summary)
}

/// Apply one script line; the outer `Result` is for I/O on `out`, the
/// inner one for the call itself
fn apply_line<W: Write>(
    engine: &mut MemoryTokenEngine,
    line: &str,
    line_no: u64,
    out: &mut W,
) -> Result<Result<(), TokenError>, TokenError> {
    let call: ScriptCall = match serde_json::from_str(line) {
        Ok(call) => call,
        Err(e) => return Ok(Err(TokenError::parse_error(line_no, e))),
    };

    let outcome = match resolve(&call) {
        Ok(Dispatch::Init(params)) => match required_caller(&call, line_no) {
            Ok(caller) => engine.init(&caller, params).map(|()| None),
            Err(e) => Err(e),
        },
        Ok(Dispatch::Mutate(op)) => match required_caller(&call, line_no) {
            Ok(caller) => engine.execute(&caller, op).map(|_| None),
            Err(e) => Err(e),
        },
        Ok(Dispatch::Read(query)) => engine.query(query).map(Some),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(Some(response)) => {
            write_response(out, &response)?;
            Ok(Ok(()))
        }
        Ok(None) => Ok(Ok(())),
        Err(e) => Ok(Err(e)),
    }
}

fn write_response<W: Write>(out: &mut W, response: &QueryResponse) -> Result<(), TokenError> {
    let json = serde_json::to_string(response)
        .map_err(|e| TokenError::corrupt_record("queryResponse", e))?;
    writeln!(out, "{}", json)?;
    Ok(())
}
