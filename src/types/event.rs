//! Ledger events
//!
//! Every successful mutating operation appends exactly one event to the
//! host's append-only log, including the self-transfer no-ops. Event names
//! and argument order follow the call surface's wire method names.

use crate::types::{Address, Amount};

/// A single entry in the append-only event log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Direct balance movement, or a logged self-transfer no-op
    Transfer {
        from: Address,
        to: Address,
        value: Amount,
    },

    /// Allowance granted (or overwritten) by `owner` to `spender`
    Approval {
        owner: Address,
        spender: Address,
        value: Amount,
    },

    /// Delegated transfer executed by `spender` out of `from`'s balance
    DelegatedTransfer {
        spender: Address,
        from: Address,
        to: Address,
        value: Amount,
    },
}

impl Event {
    /// Wire name of the event, as recorded in the log
    pub fn name(&self) -> &'static str {
        match self {
            Event::Transfer { .. } => "transfer",
            Event::Approval { .. } => "approve",
            Event::DelegatedTransfer { .. } => "transferFrom",
        }
    }

    /// Event arguments in wire order
    pub fn args(&self) -> Vec<String> {
        match self {
            Event::Transfer { from, to, value } => {
                vec![from.to_string(), to.to_string(), value.to_string()]
            }
            Event::Approval {
                owner,
                spender,
                value,
            } => vec![owner.to_string(), spender.to_string(), value.to_string()],
            Event::DelegatedTransfer {
                spender,
                from,
                to,
                value,
            } => vec![
                spender.to_string(),
                from.to_string(),
                to.to_string(),
                value.to_string(),
            ],
        }
    }
}
