//! Bank account model and operations.
//!
//! Maintains the invariant: `balance == opening balance + sum of ledger
//! deltas` at all times.

use crate::amount::Amount;
use crate::error::{AccountError, Result};
use crate::ledger::{Ledger, LedgerEntry};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single-owner bank account.
///
/// # Invariants
///
/// - `balance` only changes through [`Account::deposit`] and
///   [`Account::withdraw`], and every change is recorded in the ledger
/// - The first ledger entry has a zero delta and the initial balance as its
///   resulting balance
/// - A failed operation leaves both balance and ledger untouched
///
/// # Equality
///
/// Two accounts are equal when their account numbers are equal. Names,
/// balance, overdraft policy and history do not participate.
#[derive(Clone)]
pub struct Account {
    first_name: String,
    last_name: String,
    account_number: String,
    balance: Amount,
    overdraft_allowed: bool,
    ledger: Ledger,
}

impl Account {
    /// Opens an account with a zero balance and overdrafts disallowed.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self::open(first_name, last_name, account_number, Amount::ZERO, false)
    }

    /// Opens an account with an explicit initial balance and overdraft policy.
    ///
    /// The opening ledger entry records a zero delta and `initial_balance`
    /// as the resulting balance. A negative initial balance is accepted as-is.
    pub fn open(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        account_number: impl Into<String>,
        initial_balance: Amount,
        overdraft_allowed: bool,
    ) -> Self {
        let mut ledger = Ledger::new();
        ledger.record(Amount::ZERO, initial_balance);

        Account {
            first_name: first_name.into(),
            last_name: last_name.into(),
            account_number: account_number.into(),
            balance: initial_balance,
            overdraft_allowed,
            ledger,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Read-only view of the transaction history.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn is_overdraft_allowed(&self) -> bool {
        self.overdraft_allowed
    }

    pub fn set_overdraft_allowed(&mut self, allowed: bool) {
        self.overdraft_allowed = allowed;
    }

    /// Credits the account.
    ///
    /// Fails with [`AccountError::InvalidArgument`] unless `amount` is
    /// strictly positive, and with [`AccountError::BalanceOverflow`] if the
    /// new balance would be out of range. The account is unchanged on
    /// failure.
    pub fn deposit(&mut self, amount: Amount) -> Result<&LedgerEntry> {
        if !amount.is_positive() {
            return Err(AccountError::invalid(format!(
                "deposit amount must be positive, got {}",
                amount
            )));
        }

        self.balance = self.apply_delta(amount)?;
        Ok(self.ledger.record(amount, self.balance))
    }

    /// Debits the account.
    ///
    /// Fails with [`AccountError::InvalidArgument`] unless `amount` is
    /// strictly positive, and with [`AccountError::OverdraftNotAllowed`] if
    /// `amount` exceeds the balance while overdrafts are disallowed. Both
    /// failures leave the account unchanged, as does
    /// [`AccountError::BalanceOverflow`]. Withdrawing exactly the balance
    /// succeeds.
    pub fn withdraw(&mut self, amount: Amount) -> Result<&LedgerEntry> {
        if !amount.is_positive() {
            return Err(AccountError::invalid(format!(
                "withdrawal amount must be positive, got {}",
                amount
            )));
        }

        let next = self.apply_delta(-amount)?;
        if amount > self.balance && !self.overdraft_allowed {
            return Err(AccountError::OverdraftNotAllowed { shortfall: -next });
        }

        self.balance = next;
        Ok(self.ledger.record(-amount, self.balance))
    }

    /// Balance after applying `delta`, without touching the account.
    ///
    /// A sum that leaves the decimal range, or that had to be rounded to fit
    /// the 96-bit mantissa, is rejected so the ledger stays exact.
    fn apply_delta(&self, delta: Amount) -> Result<Amount> {
        self.balance
            .checked_add(delta)
            .filter(|next| next.checked_sub(self.balance) == Some(delta))
            .ok_or(AccountError::BalanceOverflow {
                balance: self.balance,
                delta,
            })
    }

    /// Verifies that the balance matches the recorded history.
    #[cfg(debug_assertions)]
    pub fn check_invariant(&self) -> bool {
        let chained = self.ledger.entries().windows(2).all(|pair| {
            pair[0].resulting_balance().checked_add(pair[1].amount())
                == Some(pair[1].resulting_balance())
        });
        let last = self
            .ledger
            .last()
            .map(LedgerEntry::resulting_balance)
            .unwrap_or(Amount::ZERO);

        chained && last == self.balance
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.account_number == other.account_number
    }
}

impl Eq for Account {}

impl Hash for Account {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.account_number.hash(state);
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.account_number, self.balance)
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) {}, balance: {}, overdraft: {}, # transaction: {}",
            self.account_number,
            self.last_name,
            self.balance,
            self.overdraft_allowed,
            self.ledger.len()
        )
    }
}
