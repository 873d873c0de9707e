//! Error types for the token ledger
//!
//! This module defines all errors that can abort a ledger operation.
//! Every failure is operation-fatal: the engine performs no retries, and
//! because all validation happens before the first store write, a returned
//! error guarantees zero partial state mutation.
//!
//! # Error Categories
//!
//! - **Input validation**: invalid address, non-numeric or zero value,
//!   empty init parameter
//! - **Ledger state**: missing or insufficient balance/allowance, missing
//!   metadata, double initialization, corrupt stored record
//! - **Boundary**: unknown method, malformed params
//! - **Replay I/O**: file and script-parsing errors from the CLI layer

use thiserror::Error;

use crate::types::Amount;

/// Main error type for the token ledger
///
/// Each variant carries enough context to produce the descriptive,
/// operation-fatal message the call surface requires.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenError {
    /// An argument failed the host's address syntax check
    #[error("Arg-{arg} '{address}' is not a valid address")]
    InvalidAddress {
        /// Name of the offending argument (`to`, `from`, `spender`, ...)
        arg: String,
        /// The rejected address string
        address: String,
    },

    /// A value string is not an unsigned decimal integer
    #[error("Invalid amount '{value}': expected an unsigned decimal integer")]
    InvalidAmount {
        /// The rejected value string
        value: String,
    },

    /// A value was syntactically valid but zero; transfer-family values
    /// must be strictly positive
    #[error("Arg-value must be greater than 0, got '{value}'")]
    ZeroAmount {
        /// The rejected value string
        value: String,
    },

    /// No balance record exists for the account being debited or read
    ///
    /// Absence is a hard failure on these paths, never treated as zero.
    #[error("No balance recorded for {address}")]
    MissingBalance {
        /// The account with no recorded balance
        address: String,
    },

    /// The debited account holds less than the requested value
    #[error("Balance {balance} of {address} < transfer value {requested}")]
    InsufficientBalance {
        /// The account being debited
        address: String,
        /// Its current balance
        balance: Amount,
        /// The requested transfer value
        requested: Amount,
    },

    /// No allowance record exists for the (owner, spender) pair
    ///
    /// Absence is a hard failure, never a zero default.
    #[error("No allowance granted by {owner} to {spender}")]
    MissingAllowance {
        /// The granting account
        owner: String,
        /// The delegated spender
        spender: String,
    },

    /// The consumed allowance is smaller than the requested value
    #[error("Allowance {allowance} from {owner} to {spender} < transfer value {requested}")]
    InsufficientAllowance {
        /// The granting account
        owner: String,
        /// The delegated spender
        spender: String,
        /// The current allowance
        allowance: Amount,
        /// The requested transfer value
        requested: Amount,
    },

    /// The metadata record has not been written yet
    #[error("Token metadata not found; the ledger is uninitialized")]
    MissingMetadata,

    /// `init` was called after the metadata record was already written
    #[error("Token metadata already written; initialization is one-shot")]
    AlreadyInitialized,

    /// A required init parameter was empty
    #[error("Init param '{name}' must be non-empty")]
    EmptyParam {
        /// Name of the empty parameter
        name: String,
    },

    /// The method name matched neither the mutating nor the query surface
    /// it was dispatched against
    #[error("Unknown method '{method}'")]
    UnknownMethod {
        /// The unrecognized method name
        method: String,
    },

    /// The params object did not match the resolved method
    #[error("Invalid params for '{method}': {message}")]
    InvalidParams {
        /// The method whose params failed to decode
        method: String,
        /// Decoder error description
        message: String,
    },

    /// A stored value could not be decoded; the store contents do not
    /// match the ledger's encoding
    #[error("Corrupt ledger record at key '{key}': {message}")]
    CorruptRecord {
        /// The store key holding the undecodable value
        key: String,
        /// Decoder error description
        message: String,
    },

    /// Subtraction would have gone below zero after the guarding check
    /// somehow passed; stored values stay non-negative because this aborts
    /// the operation instead of wrapping
    #[error("Arithmetic underflow in {operation}")]
    ArithmeticUnderflow {
        /// The operation that underflowed
        operation: String,
    },

    /// A replay script line could not be parsed
    #[error("Script parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// I/O error from the replay layer
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for TokenError {
    fn from(error: std::io::Error) -> Self {
        TokenError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for TokenError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());
        TokenError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper constructors for the variants built from borrowed context

impl TokenError {
    /// Create an InvalidAddress error
    pub fn invalid_address(arg: &str, address: &str) -> Self {
        TokenError::InvalidAddress {
            arg: arg.to_string(),
            address: address.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(value: &str) -> Self {
        TokenError::InvalidAmount {
            value: value.to_string(),
        }
    }

    /// Create a ZeroAmount error
    pub fn zero_amount(value: &str) -> Self {
        TokenError::ZeroAmount {
            value: value.to_string(),
        }
    }

    /// Create a MissingBalance error
    pub fn missing_balance(address: &str) -> Self {
        TokenError::MissingBalance {
            address: address.to_string(),
        }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(address: &str, balance: Amount, requested: Amount) -> Self {
        TokenError::InsufficientBalance {
            address: address.to_string(),
            balance,
            requested,
        }
    }

    /// Create a MissingAllowance error
    pub fn missing_allowance(owner: &str, spender: &str) -> Self {
        TokenError::MissingAllowance {
            owner: owner.to_string(),
            spender: spender.to_string(),
        }
    }

    /// Create an InsufficientAllowance error
    pub fn insufficient_allowance(
        owner: &str,
        spender: &str,
        allowance: Amount,
        requested: Amount,
    ) -> Self {
        TokenError::InsufficientAllowance {
            owner: owner.to_string(),
            spender: spender.to_string(),
            allowance,
            requested,
        }
    }

    /// Create an EmptyParam error
    pub fn empty_param(name: &str) -> Self {
        TokenError::EmptyParam {
            name: name.to_string(),
        }
    }

    /// Create an UnknownMethod error
    pub fn unknown_method(method: &str) -> Self {
        TokenError::UnknownMethod {
            method: method.to_string(),
        }
    }

    /// Create an InvalidParams error from a decoder failure
    pub fn invalid_params(method: &str, error: serde_json::Error) -> Self {
        TokenError::InvalidParams {
            method: method.to_string(),
            message: error.to_string(),
        }
    }

    /// Create a CorruptRecord error
    pub fn corrupt_record(key: &str, message: impl ToString) -> Self {
        TokenError::CorruptRecord {
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    /// Create an ArithmeticUnderflow error
    pub fn arithmetic_underflow(operation: &str) -> Self {
        TokenError::ArithmeticUnderflow {
            operation: operation.to_string(),
        }
    }

    /// Create a ParseError with a line number
    pub fn parse_error(line: u64, message: impl ToString) -> Self {
        TokenError::ParseError {
            line: Some(line),
            message: message.to_string(),
        }
    }
}
