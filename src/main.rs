//! Account Ledger CLI
//!
//! Opens one account, replays a CSV script of operations against it and
//! writes the resulting ledger to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv 123456 John Smith 100 false > ledger.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use account_ledger::{
    parse_amount, parse_flag, Account, AccountError, Amount, LedgerReplay, Result,
};
use log::info;
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 5 {
        return Err(AccountError::MissingArgument);
    }

    let input_path = &args[1];
    let initial_balance = match args.get(5) {
        Some(value) => parse_amount(value)?,
        None => Amount::ZERO,
    };
    let overdraft_allowed = match args.get(6) {
        Some(value) => parse_flag(value)?,
        None => false,
    };

    let account = Account::open(
        args[3].as_str(),
        args[4].as_str(),
        args[2].as_str(),
        initial_balance,
        overdraft_allowed,
    );

    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut replay = LedgerReplay::new(account);
    replay.process_csv(reader)?;

    info!(
        "{:?} ({} applied, {} rejected)",
        replay.account(),
        replay.applied(),
        replay.rejected()
    );

    let stdout = io::stdout();
    let handle = stdout.lock();
    replay.write_output(handle)?;

    Ok(())
}
