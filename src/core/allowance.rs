//! Allowance engine
//!
//! Approvals and delegated transfers. `approve` replaces the stored
//! allowance outright (last write wins, never an accumulation) and
//! `transferFrom` consumes allowance through the same hard-failing read
//! path the public `allowance` query uses. As everywhere in the engine,
//! every check precedes every write.

use crate::core::engine::TokenEngine;
use crate::core::traits::{AddressValidator, EventLog, LedgerStore};
use crate::types::{Address, Event, TokenError};

impl<S, V, L> TokenEngine<S, V, L>
where
    S: LedgerStore,
    V: AddressValidator,
    L: EventLog,
{
    /// Grant `spender` an allowance of `value` out of the caller's balance
    ///
    /// Overwrites any previous allowance for the pair; concurrent approvals
    /// from the same owner to the same spender are last-write-wins under
    /// the host's transaction serialization, with no compare-and-swap.
    ///
    /// # Errors
    ///
    /// Returns an error if `spender` fails the address syntax check or
    /// `value` is not strictly positive.
    pub fn approve(
        &mut self,
        caller: &Address,
        spender: &str,
        value: &str,
    ) -> Result<bool, TokenError> {
        let spender = self.require_address("spender", spender)?;
        let value = self.require_positive(value)?;

        self.ledger_mut().set_allowance(caller, &spender, &value);

        self.emit(Event::Approval {
            owner: caller.clone(),
            spender,
            value,
        });

        Ok(true)
    }

    /// Move `value` from `from` to `to`, consuming the caller's allowance
    ///
    /// A `from == to` call is a logged no-op, exactly like a self-directed
    /// transfer: no balance or allowance is read or written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `from` or `to` fails the address syntax check
    /// - `value` is not a strictly positive unsigned decimal integer
    /// - `from` has no recorded balance, or it is smaller than `value`
    /// - No allowance record exists for (`from`, caller), or it is smaller
    ///   than `value`
    pub fn transfer_from(
        &mut self,
        caller: &Address,
        from: &str,
        to: &str,
        value: &str,
    ) -> Result<bool, TokenError> {
        let from = self.require_address("from", from)?;
        let to = self.require_address("to", to)?;
        let value = self.require_positive(value)?;

        if from == to {
            self.emit(Event::DelegatedTransfer {
                spender: caller.clone(),
                from,
                to,
                value,
            });
            return Ok(true);
        }

        let from_balance = self.ledger().balance(&from)?;
        if from_balance < value {
            return Err(TokenError::insufficient_balance(
                from.as_str(),
                from_balance,
                value,
            ));
        }

        let allowance = self.ledger().allowance(&from, caller)?;
        if allowance < value {
            return Err(TokenError::insufficient_allowance(
                from.as_str(),
                caller.as_str(),
                allowance,
                value,
            ));
        }

        let recipient_balance = self.ledger().balance_or_zero(&to)?.add(&value);
        let from_balance = from_balance
            .checked_sub(&value)
            .ok_or_else(|| TokenError::arithmetic_underflow("transferFrom"))?;
        let allowance = allowance
            .checked_sub(&value)
            .ok_or_else(|| TokenError::arithmetic_underflow("transferFrom"))?;

        self.ledger_mut().set_balance(&to, &recipient_balance);
        self.ledger_mut().set_balance(&from, &from_balance);
        self.ledger_mut().set_allowance(&from, caller, &allowance);

        self.emit(Event::DelegatedTransfer {
            spender: caller.clone(),
            from,
            to,
            value,
        });

        Ok(true)
    }
}
