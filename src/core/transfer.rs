//! Transfer engine
//!
//! Direct balance movement from the caller to a recipient. The invariants
//! that matter here:
//! - a self-directed transfer is a logged no-op: the event is emitted, the
//!   success flag returned, and no balance is read or written
//! - the caller's balance must exist; absence is a hard failure, not zero
//! - the recipient's balance may be absent and is credited from zero
//! - every check precedes every write, so a rejected transfer mutates
//!   nothing and logs nothing

use crate::core::engine::TokenEngine;
use crate::core::traits::{AddressValidator, EventLog, LedgerStore};
use crate::types::{Address, Event, TokenError};

impl<S, V, L> TokenEngine<S, V, L>
where
    S: LedgerStore,
    V: AddressValidator,
    L: EventLog,
{
    /// Move `value` from the caller's balance to `to`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `to` fails the address syntax check
    /// - `value` is not a strictly positive unsigned decimal integer
    /// - The caller has no recorded balance
    /// - The caller's balance is smaller than `value`
    pub fn transfer(&mut self, caller: &Address, to: &str, value: &str) -> Result<bool, TokenError> {
        let to = self.require_address("to", to)?;
        let value = self.require_positive(value)?;

        if caller == &to {
            self.emit(Event::Transfer {
                from: caller.clone(),
                to,
                value,
            });
            return Ok(true);
        }

        let sender_balance = self.ledger().balance(caller)?;
        if sender_balance < value {
            return Err(TokenError::insufficient_balance(
                caller.as_str(),
                sender_balance,
                value,
            ));
        }

        let recipient_balance = self.ledger().balance_or_zero(&to)?.add(&value);
        let sender_balance = sender_balance
            .checked_sub(&value)
            .ok_or_else(|| TokenError::arithmetic_underflow("transfer"))?;

        self.ledger_mut().set_balance(&to, &recipient_balance);
        self.ledger_mut().set_balance(caller, &sender_balance);

        self.emit(Event::Transfer {
            from: caller.clone(),
            to,
            value,
        });

        Ok(true)
    }
}
