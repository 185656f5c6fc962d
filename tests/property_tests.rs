//! Property-based tests for account operations.
//!
//! These tests use proptest to check the balance/ledger invariants across a
//! wide range of amounts and operation sequences.

use account_ledger::{Account, AccountError, Amount};
use proptest::prelude::*;
use rust_decimal::Decimal;

// Strategies for generating test data
fn positive_amount_strategy() -> impl Strategy<Value = Amount> {
    (1i64..100_000_000, 0u32..5).prop_map(|(units, scale)| Amount::new(Decimal::new(units, scale)))
}

fn non_positive_amount_strategy() -> impl Strategy<Value = Amount> {
    (-100_000_000i64..=0, 0u32..5).prop_map(|(units, scale)| Amount::new(Decimal::new(units, scale)))
}

fn balance_strategy() -> impl Strategy<Value = Amount> {
    (-1_000_000i64..1_000_000, 0u32..3).prop_map(|(units, scale)| Amount::new(Decimal::new(units, scale)))
}

#[derive(Debug, Clone)]
enum Op {
    Deposit(Amount),
    Withdraw(Amount),
    Overdraft(bool),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        balance_strategy().prop_map(Op::Deposit),
        balance_strategy().prop_map(Op::Withdraw),
        any::<bool>().prop_map(Op::Overdraft),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn construction_records_opening_entry(initial in balance_strategy()) {
        let account = Account::open("f", "l", "1", initial, false);
        prop_assert_eq!(account.balance(), initial);
        prop_assert_eq!(account.ledger().len(), 1);

        let entry = &account.ledger().entries()[0];
        prop_assert_eq!(entry.amount(), Amount::ZERO);
        prop_assert_eq!(entry.resulting_balance(), initial);
    }

    #[test]
    fn deposit_increases_balance_by_amount(initial in balance_strategy(), amount in positive_amount_strategy()) {
        let mut account = Account::open("f", "l", "1", initial, false);
        account.deposit(amount).unwrap();

        prop_assert_eq!(account.balance(), initial + amount);
        prop_assert_eq!(account.ledger().len(), 2);
        let entry = account.ledger().last().unwrap();
        prop_assert_eq!(entry.amount(), amount);
        prop_assert_eq!(entry.resulting_balance(), account.balance());
    }

    #[test]
    fn non_positive_amounts_are_invalid(initial in balance_strategy(), amount in non_positive_amount_strategy()) {
        let mut account = Account::open("f", "l", "1", initial, true);

        prop_assert!(matches!(account.deposit(amount), Err(AccountError::InvalidArgument(_))));
        prop_assert!(matches!(account.withdraw(amount), Err(AccountError::InvalidArgument(_))));
        prop_assert_eq!(account.balance(), initial);
        prop_assert_eq!(account.ledger().len(), 1);
    }

    #[test]
    fn withdrawal_beyond_balance_needs_overdraft(initial in positive_amount_strategy(), extra in positive_amount_strategy()) {
        let amount = initial + extra;

        let mut account = Account::open("f", "l", "1", initial, false);
        let err = account.withdraw(amount).unwrap_err();
        prop_assert!(matches!(err, AccountError::OverdraftNotAllowed { shortfall } if shortfall == extra), "expected OverdraftNotAllowed with shortfall == extra, got {:?}", err);
        prop_assert_eq!(account.balance(), initial);
        prop_assert_eq!(account.ledger().len(), 1);

        account.set_overdraft_allowed(true);
        account.withdraw(amount).unwrap();
        prop_assert_eq!(account.balance(), -extra);
        let entry = account.ledger().last().unwrap();
        prop_assert_eq!(entry.amount(), -amount);
        prop_assert_eq!(entry.resulting_balance(), -extra);
    }

    #[test]
    fn balance_matches_ledger_after_any_sequence(
        initial in balance_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40)
    ) {
        let mut account = Account::open("f", "l", "1", initial, false);

        for op in ops {
            let _ = match op {
                Op::Deposit(a) => account.deposit(a).map(|_| ()),
                Op::Withdraw(a) => account.withdraw(a).map(|_| ()),
                Op::Overdraft(flag) => {
                    account.set_overdraft_allowed(flag);
                    Ok(())
                }
            };
            prop_assert!(account.check_invariant());
        }

        let ledger = account.ledger();
        prop_assert_eq!(ledger.opening_balance() + ledger.net_change(), account.balance());
        for pair in ledger.entries().windows(2) {
            prop_assert_eq!(pair[0].resulting_balance() + pair[1].amount(), pair[1].resulting_balance());
        }
    }

    #[test]
    fn equality_depends_only_on_account_number(
        number in "[0-9]{1,8}",
        other in "[0-9]{1,8}",
        b1 in balance_strategy(),
        b2 in balance_strategy(),
        flag in any::<bool>()
    ) {
        let a1 = Account::open("a", "b", number.clone(), b1, flag);
        let a2 = Account::open("c", "d", number.clone(), b2, !flag);
        let a3 = Account::open("a", "b", other.clone(), b1, flag);

        prop_assert_eq!(&a1, &a2);
        prop_assert_eq!(a1 == a3, number == other);
    }
}
