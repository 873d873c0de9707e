//! Token engine orchestration
//!
//! This module provides the `TokenEngine` that owns the typed ledger view
//! and the injected host collaborators, and routes calls to the transfer
//! and allowance engines (implemented in their own modules).
//!
//! The engine enforces the ledger's ordering rule everywhere: every read
//! and every precondition check happens before the first store write, so a
//! failed operation leaves zero partial state. Atomicity across the whole
//! call is the host transaction's job; zero-writes-before-validation is
//! this engine's.

use serde::Serialize;
use serde_json::Value;

use crate::core::ledger::LedgerBook;
use crate::core::traits::{AddressValidator, EventLog, LedgerStore};
use crate::types::{
    Address, Amount, Event, InitParams, Operation, Query, TokenError, TokenMetadata,
};

/// Deterministic fungible-token ledger engine
///
/// Generic over the host collaborators so embedders bind it to their own
/// runtime; tests and the replay CLI use the in-memory implementations
/// from [`crate::host`].
pub struct TokenEngine<S, V, L> {
    ledger: LedgerBook<S>,
    validator: V,
    events: L,
}

/// Response from the read-only query surface
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryResponse {
    /// Balance of the queried address
    Balance(Amount),

    /// Allowance of the queried (owner, spender) pair
    Allowance(Amount),

    /// The token metadata record
    TokenInfo(TokenMetadata),
}

impl<S, V, L> TokenEngine<S, V, L>
where
    S: LedgerStore,
    V: AddressValidator,
    L: EventLog,
{
    /// Create an engine over host-supplied collaborators
    pub fn new(store: S, validator: V, events: L) -> Self {
        TokenEngine {
            ledger: LedgerBook::new(store),
            validator,
            events,
        }
    }

    /// The typed ledger view (read access)
    pub fn ledger(&self) -> &LedgerBook<S> {
        &self.ledger
    }

    /// The event log
    pub fn events(&self) -> &L {
        &self.events
    }

    /// Initialize the ledger: one-shot deployment entry point
    ///
    /// Validates that every string parameter is non-empty, scales the
    /// human-entered supply by `10^decimals` in arbitrary precision,
    /// persists the metadata record, and credits the entire total supply
    /// to the initializing caller.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The metadata record already exists (initialization is one-shot)
    /// - Any of name/supply/symbol/version is empty
    /// - The supply is not an unsigned decimal integer
    pub fn init(&mut self, caller: &Address, params: InitParams) -> Result<(), TokenError> {
        if self.ledger.has_metadata() {
            return Err(TokenError::AlreadyInitialized);
        }

        require_non_empty("name", &params.name)?;
        require_non_empty("supply", &params.supply)?;
        require_non_empty("symbol", &params.symbol)?;
        require_non_empty("version", &params.version)?;

        let supply = Amount::parse(&params.supply)?;
        let scale = Amount::pow10(params.decimals);
        let total_supply = supply.mul(&scale);

        let metadata = TokenMetadata {
            name: params.name,
            symbol: params.symbol,
            version: params.version,
            decimals: params.decimals,
            total_supply: total_supply.clone(),
        };

        self.ledger.put_metadata(&metadata)?;
        self.ledger.set_balance(caller, &total_supply);

        Ok(())
    }

    /// Execute a mutating operation on behalf of `caller`
    ///
    /// Returns the operation's success flag. Routing is over the closed
    /// [`Operation`] enum; method-name resolution already happened at the
    /// boundary.
    pub fn execute(&mut self, caller: &Address, op: Operation) -> Result<bool, TokenError> {
        match op {
            Operation::Transfer { to, value } => self.transfer(caller, &to, &value),
            Operation::Approve { spender, value } => self.approve(caller, &spender, &value),
            Operation::TransferFrom { from, to, value } => {
                self.transfer_from(caller, &from, &to, &value)
            }
        }
    }

    /// Mutating call surface: resolve `method` + `params` and execute
    ///
    /// # Errors
    ///
    /// `UnknownMethod` for any method outside transfer/approve/transferFrom
    /// (the operation is aborted with no state change), plus whatever the
    /// resolved operation itself returns.
    pub fn main_call(
        &mut self,
        caller: &Address,
        method: &str,
        params: &Value,
    ) -> Result<bool, TokenError> {
        let op = Operation::from_call(method, params)?;
        self.execute(caller, op)
    }

    /// Execute a read-only query
    pub fn query(&self, query: Query) -> Result<QueryResponse, TokenError> {
        match query {
            Query::TokenInfo => Ok(QueryResponse::TokenInfo(self.ledger.metadata()?)),
            Query::BalanceOf { address } => {
                let address = self.require_address("address", &address)?;
                Ok(QueryResponse::Balance(self.ledger.balance(&address)?))
            }
            Query::Allowance { owner, spender } => {
                let owner = self.require_address("owner", &owner)?;
                let spender = self.require_address("spender", &spender)?;
                Ok(QueryResponse::Allowance(
                    self.ledger.allowance(&owner, &spender)?,
                ))
            }
        }
    }

    /// Read-only call surface: resolve `method` + `params` and query
    ///
    /// # Errors
    ///
    /// `UnknownMethod` for any method outside tokenInfo/allowance/balanceOf,
    /// plus whatever the resolved query itself returns.
    pub fn query_call(&self, method: &str, params: &Value) -> Result<QueryResponse, TokenError> {
        let query = Query::from_call(method, params)?;
        self.query(query)
    }

    /// Validate an address argument against the host validator
    pub(crate) fn require_address(
        &self,
        arg: &'static str,
        raw: &str,
    ) -> Result<Address, TokenError> {
        if self.validator.is_valid(raw) {
            Ok(Address::new(raw))
        } else {
            Err(TokenError::invalid_address(arg, raw))
        }
    }

    /// Validate a value argument: unsigned decimal integer, strictly positive
    pub(crate) fn require_positive(&self, raw: &str) -> Result<Amount, TokenError> {
        let value = Amount::parse(raw)?;
        if value.is_zero() {
            return Err(TokenError::zero_amount(raw));
        }
        Ok(value)
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut LedgerBook<S> {
        &mut self.ledger
    }

    pub(crate) fn emit(&mut self, event: Event) {
        self.events.append(event);
    }
}

fn require_non_empty(name: &str, value: &str) -> Result<(), TokenError> {
    if value.is_empty() {
        Err(TokenError::empty_param(name))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{BasicAddressValidator, MemoryStore, RecordingEventLog};
    use serde_json::json;

    fn engine() -> TokenEngine<MemoryStore, BasicAddressValidator, RecordingEventLog> {
        TokenEngine::new(
            MemoryStore::new(),
            BasicAddressValidator::default(),
            RecordingEventLog::new(),
        )
    }

    fn init_params(supply: &str, decimals: u32) -> InitParams {
        InitParams {
            name: "Example Token".to_string(),
            supply: supply.to_string(),
            symbol: "EXT".to_string(),
            version: "1.0".to_string(),
            decimals,
        }
    }

    #[test]
    fn test_init_scales_supply_and_credits_caller() {
        let mut engine = engine();
        let deployer = Address::from("deployer");

        // The initializer's balance is absent beforehand.
        assert!(matches!(
            engine.ledger().balance(&deployer),
            Err(TokenError::MissingBalance { .. })
        ));

        engine.init(&deployer, init_params("100", 3)).unwrap();

        let metadata = engine.ledger().metadata().unwrap();
        assert_eq!(metadata.total_supply, Amount::parse("100000").unwrap());
        assert_eq!(metadata.decimals, 3);
        assert_eq!(
            engine.ledger().balance(&deployer).unwrap(),
            Amount::parse("100000").unwrap()
        );
    }

    #[test]
    fn test_init_with_zero_decimals_does_not_scale() {
        let mut engine = engine();
        let deployer = Address::from("deployer");

        engine.init(&deployer, init_params("250", 0)).unwrap();

        let metadata = engine.ledger().metadata().unwrap();
        assert_eq!(metadata.total_supply, Amount::parse("250").unwrap());
    }

    #[test]
    fn test_init_is_one_shot() {
        let mut engine = engine();
        let deployer = Address::from("deployer");

        engine.init(&deployer, init_params("100", 3)).unwrap();
        let result = engine.init(&deployer, init_params("200", 3));

        assert_eq!(result, Err(TokenError::AlreadyInitialized));
        // First initialization is untouched.
        assert_eq!(
            engine.ledger().metadata().unwrap().total_supply,
            Amount::parse("100000").unwrap()
        );
    }

    #[test]
    fn test_init_rejects_empty_params() {
        let mut engine = engine();
        let deployer = Address::from("deployer");

        let mut params = init_params("100", 3);
        params.symbol = String::new();

        let result = engine.init(&deployer, params);
        assert_eq!(result, Err(TokenError::empty_param("symbol")));
        assert!(!engine.ledger().has_metadata());
    }

    #[test]
    fn test_init_rejects_non_numeric_supply() {
        let mut engine = engine();
        let deployer = Address::from("deployer");

        let result = engine.init(&deployer, init_params("1e9", 3));
        assert!(matches!(result, Err(TokenError::InvalidAmount { .. })));
        assert!(!engine.ledger().has_metadata());
    }

    #[test]
    fn test_init_scaling_beyond_fixed_width() {
        let mut engine = engine();
        let deployer = Address::from("deployer");

        // 10^21 * 10^18 overflows any machine integer; the ledger must not.
        engine
            .init(&deployer, init_params("1000000000000000000000", 18))
            .unwrap();

        assert_eq!(
            engine.ledger().metadata().unwrap().total_supply.to_string(),
            "1000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_main_call_routes_mutating_methods() {
        let mut engine = engine();
        let deployer = Address::from("deployer");
        engine.init(&deployer, init_params("100", 0)).unwrap();

        let ok = engine
            .main_call(&deployer, "transfer", &json!({"to": "bob02", "value": "10"}))
            .unwrap();
        assert!(ok);
        assert_eq!(
            engine.ledger().balance(&Address::from("bob02")).unwrap(),
            Amount::from(10)
        );
    }

    #[test]
    fn test_main_call_unknown_method_changes_nothing() {
        let mut engine = engine();
        let deployer = Address::from("deployer");
        engine.init(&deployer, init_params("100", 0)).unwrap();

        let result = engine.main_call(&deployer, "burn", &json!({"value": "10"}));
        assert_eq!(result, Err(TokenError::unknown_method("burn")));

        assert_eq!(
            engine.ledger().balance(&deployer).unwrap(),
            Amount::from(100)
        );
        assert!(engine.events().entries().is_empty());
    }

    #[test]
    fn test_query_call_routes_read_methods() {
        let mut engine = engine();
        let deployer = Address::from("deployer");
        engine.init(&deployer, init_params("100", 2)).unwrap();

        let response = engine
            .query_call("balanceOf", &json!({"address": "deployer"}))
            .unwrap();
        assert_eq!(response, QueryResponse::Balance(Amount::from(10_000)));

        let response = engine.query_call("tokenInfo", &json!({})).unwrap();
        assert!(matches!(response, QueryResponse::TokenInfo(_)));
    }

    #[test]
    fn test_query_call_unknown_method_fails() {
        let engine = engine();
        let result = engine.query_call("totalHolders", &json!({}));
        assert_eq!(result, Err(TokenError::unknown_method("totalHolders")));
    }

    #[test]
    fn test_balance_query_fails_for_unknown_account() {
        let mut engine = engine();
        let deployer = Address::from("deployer");
        engine.init(&deployer, init_params("100", 0)).unwrap();

        let result = engine.query_call("balanceOf", &json!({"address": "nobody9"}));
        assert!(matches!(result, Err(TokenError::MissingBalance { .. })));
    }

    #[test]
    fn test_query_rejects_invalid_address() {
        let engine = engine();
        let result = engine.query_call("balanceOf", &json!({"address": "has space"}));
        assert!(matches!(result, Err(TokenError::InvalidAddress { .. })));
    }

    #[test]
    fn test_token_info_before_init_fails() {
        let engine = engine();
        let result = engine.query_call("tokenInfo", &json!({}));
        assert_eq!(result, Err(TokenError::MissingMetadata));
    }

    #[test]
    fn test_conservation_across_mixed_operations() {
        let mut engine = engine();
        let deployer = Address::from("deployer");
        let alice = Address::from("alice01");
        let bob = Address::from("bob02");
        let carol = Address::from("carol03");

        engine.init(&deployer, init_params("1000", 2)).unwrap();
        let total = engine.ledger().metadata().unwrap().total_supply;

        engine
            .main_call(&deployer, "transfer", &json!({"to": "alice01", "value": "40000"}))
            .unwrap();
        engine
            .main_call(&alice, "transfer", &json!({"to": "bob02", "value": "15000"}))
            .unwrap();
        engine
            .main_call(&alice, "approve", &json!({"spender": "carol03", "value": "9999"}))
            .unwrap();
        engine
            .main_call(
                &carol,
                "transferFrom",
                &json!({"from": "alice01", "to": "bob02", "value": "5000"}),
            )
            .unwrap();
        // Logged no-op: must not disturb the sum.
        engine
            .main_call(&bob, "transfer", &json!({"to": "bob02", "value": "123"}))
            .unwrap();

        let sum = [&deployer, &alice, &bob, &carol]
            .iter()
            .map(|addr| engine.ledger().balance_or_zero(addr).unwrap())
            .fold(Amount::zero(), |acc, b| acc.add(&b));

        assert_eq!(sum, total);
    }

    #[test]
    fn test_query_response_serializes_to_wire_json() {
        let response = QueryResponse::Balance(Amount::from(42));
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            "{\"balance\":\"42\"}"
        );
    }
}
