//! Replays a CSV script of operations against a single account.
//!
//! Rows are streamed one at a time. A row that cannot be parsed or whose
//! operation the account rejects is logged and skipped; processing continues
//! with the next row.

use crate::account::Account;
use crate::error::{AccountError, Result};
use crate::transaction::{TransactionRecord, TxKind};
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::io::{Read, Write};

/// Timestamp layout used for ledger output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Drives an [`Account`] from a stream of operation records.
pub struct LedgerReplay {
    account: Account,
    applied: usize,
    rejected: usize,
}

impl LedgerReplay {
    pub fn new(account: Account) -> Self {
        LedgerReplay {
            account,
            applied: 0,
            rejected: 0,
        }
    }

    /// Processes operations from a CSV reader in streaming fashion.
    ///
    /// Only reader-level failures are returned; rejected rows are counted
    /// and logged at warn level.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<TransactionRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let outcome = result
                .map_err(AccountError::from)
                .and_then(|record| record.parse())
                .and_then(|op| self.apply(op, row_num));

            match outcome {
                Ok(()) => self.applied += 1,
                Err(e) => {
                    self.rejected += 1;
                    warn!("Row {}: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    /// Applies a single operation to the account.
    pub fn apply(&mut self, op: TxKind, row: usize) -> Result<()> {
        match op {
            TxKind::Deposit(amount) => {
                let entry = self.account.deposit(amount)?;
                debug!(
                    "Row {}: Deposited {}, balance {}",
                    row,
                    amount,
                    entry.resulting_balance()
                );
            }
            TxKind::Withdrawal(amount) => {
                let entry = self.account.withdraw(amount)?;
                debug!(
                    "Row {}: Withdrew {}, balance {}",
                    row,
                    amount,
                    entry.resulting_balance()
                );
            }
            TxKind::SetOverdraft(allowed) => {
                self.account.set_overdraft_allowed(allowed);
                debug!("Row {}: Overdraft allowed set to {}", row, allowed);
            }
        }

        Ok(())
    }

    /// Writes the account ledger to CSV, one row per entry in recorded order.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["timestamp", "amount", "balance"])?;

        for entry in self.account.ledger() {
            csv_writer.write_record([
                entry.timestamp().format(TIMESTAMP_FORMAT).to_string(),
                entry.amount().to_string(),
                entry.resulting_balance().to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn into_account(self) -> Account {
        self.account
    }

    /// Number of rows applied successfully.
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Number of rows skipped because they failed to parse or apply.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}
