//! # Account Ledger
//!
//! A single-owner bank account with an append-only transaction ledger and an
//! overdraft policy, plus a driver that replays CSV operation scripts.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: Amounts are `rust_decimal` values, never floats
//! - **Append-only history**: The ledger is readable but never writable from
//!   outside the crate
//! - **Atomic failures**: A rejected deposit or withdrawal changes nothing
//! - **Identity equality**: Accounts compare by account number only
//!
//! ## Example
//!
//! ```
//! use account_ledger::{Account, AccountError, Amount};
//!
//! let mut account = Account::new("John", "Smith", "123456");
//! assert!(matches!(
//!     account.withdraw(Amount::from(10)),
//!     Err(AccountError::OverdraftNotAllowed { .. })
//! ));
//!
//! account.set_overdraft_allowed(true);
//! account.withdraw(Amount::from(10)).unwrap();
//! assert_eq!(account.to_string(), "123456: -10");
//! assert_eq!(account.ledger().len(), 2);
//! ```

pub mod account;
pub mod amount;
pub mod error;
pub mod ledger;
pub mod replay;
pub mod transaction;

pub use account::Account;
pub use amount::Amount;
pub use error::{AccountError, Result};
pub use ledger::{Ledger, LedgerEntry};
pub use replay::LedgerReplay;
pub use transaction::{parse_amount, parse_flag, TransactionRecord, TxKind};
