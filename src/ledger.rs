//! Append-only record of balance-affecting transactions.

use crate::amount::Amount;
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use std::slice;

/// A single recorded balance change.
///
/// Entries are only created by [`Ledger::record`] and are never modified
/// afterwards, so all fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    timestamp: NaiveDateTime,
    amount: Amount,
    resulting_balance: Amount,
}

impl LedgerEntry {
    /// UTC wall-clock time the entry was captured, without a zone attached.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Signed delta: positive for a credit, negative for a debit, zero for
    /// the opening entry.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Account balance immediately after this entry was applied.
    pub fn resulting_balance(&self) -> Amount {
        self.resulting_balance
    }

    pub fn is_credit(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_debit(&self) -> bool {
        self.amount.is_negative()
    }
}

/// Chronological sequence of [`LedgerEntry`] values owned by one account.
///
/// Outside the crate a `Ledger` can only be read; cloning it yields an
/// independent copy that cannot be written to either.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Ledger {
            entries: Vec::new(),
        }
    }

    /// Appends an entry stamped with the current UTC time.
    pub(crate) fn record(&mut self, amount: Amount, resulting_balance: Amount) -> &LedgerEntry {
        self.entries.push(LedgerEntry {
            timestamp: Utc::now().naive_utc(),
            amount,
            resulting_balance,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, LedgerEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LedgerEntry> {
        self.entries.last()
    }

    /// Balance recorded by the opening entry, or zero for an empty ledger.
    pub fn opening_balance(&self) -> Amount {
        self.entries
            .first()
            .map(LedgerEntry::resulting_balance)
            .unwrap_or(Amount::ZERO)
    }

    /// Sum of every recorded delta.
    pub fn net_change(&self) -> Amount {
        self.entries.iter().map(LedgerEntry::amount).sum()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a LedgerEntry;
    type IntoIter = slice::Iter<'a, LedgerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
