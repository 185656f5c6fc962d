//! Operation records for CSV replay scripts.

use crate::amount::Amount;
use crate::error::{AccountError, Result};
use serde::Deserialize;
use std::str::FromStr;

/// Raw operation record as read from CSV.
///
/// The second column is interpreted per operation type: an amount for
/// deposits and withdrawals, a boolean flag for overdraft changes.
#[derive(Debug, Deserialize)]
pub struct TransactionRecord {
    /// Operation type: deposit, withdrawal, overdraft
    #[serde(rename = "type")]
    pub tx_type: String,

    /// Amount or flag value
    pub amount: Option<String>,
}

impl TransactionRecord {
    /// Parses the raw CSV record into a typed operation.
    pub fn parse(&self) -> Result<TxKind> {
        let tx_type = self.tx_type.trim().to_lowercase();

        match tx_type.as_str() {
            "deposit" => Ok(TxKind::Deposit(self.parse_amount()?)),
            "withdrawal" => Ok(TxKind::Withdrawal(self.parse_amount()?)),
            "overdraft" => Ok(TxKind::SetOverdraft(parse_flag(self.value()?)?)),
            other => Err(AccountError::invalid(format!(
                "unknown operation type '{}'",
                other
            ))),
        }
    }

    fn value(&self) -> Result<&str> {
        match self.amount.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(AccountError::invalid(format!(
                "missing value for '{}'",
                self.tx_type.trim()
            ))),
        }
    }

    fn parse_amount(&self) -> Result<Amount> {
        parse_amount(self.value()?)
    }
}

/// A parsed operation ready to be applied to an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxKind {
    /// Credit funds to the account.
    Deposit(Amount),

    /// Debit funds from the account, subject to the overdraft policy.
    Withdrawal(Amount),

    /// Change whether withdrawals may drive the balance negative.
    SetOverdraft(bool),
}

/// Parses an amount, reporting failures as [`AccountError::InvalidArgument`].
pub fn parse_amount(value: &str) -> Result<Amount> {
    Amount::from_str(value)
        .map_err(|e| AccountError::invalid(format!("'{}' is not a valid amount: {}", value.trim(), e)))
}

/// Parses an overdraft flag.
///
/// Only `true` and `false` (case-insensitive, surrounding whitespace ignored)
/// are booleans; anything else, including `1`, `yes` or an amount, is
/// rejected with [`AccountError::InvalidArgument`].
pub fn parse_flag(value: &str) -> Result<bool> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(AccountError::invalid(format!(
            "overdraft flag must be a boolean, got '{}'",
            trimmed
        )))
    }
}
