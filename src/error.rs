//! Error types for account operations and the replay driver.

use crate::amount::Amount;
use thiserror::Error;

/// Result type alias for account operations
pub type Result<T> = std::result::Result<T, AccountError>;

/// Errors that can occur while operating on an account.
#[derive(Error, Debug)]
pub enum AccountError {
    /// Non-positive transaction amount, or a value that is not a valid
    /// amount or boolean flag
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Withdrawal would drive the balance negative while overdrafts are disallowed
    #[error("Overdraft not allowed: withdrawal would result in overdraft of {shortfall}")]
    OverdraftNotAllowed { shortfall: Amount },

    /// Applying the transaction would push the balance outside the
    /// representable decimal range
    #[error("Balance overflow: applying {delta} to {balance} is out of range")]
    BalanceOverflow { balance: Amount, delta: Amount },

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing command-line argument
    #[error(
        "Missing argument. Usage: account-ledger <input.csv> <account_number> <first_name> <last_name> [initial_balance] [overdraft_allowed]"
    )]
    MissingArgument,
}

impl AccountError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        AccountError::InvalidArgument(message.into())
    }
}
