//! Property tests for account balance and history invariants

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use wallet_engine::{Account, AccountError, FixedClock, MovementKind, DAILY_WITHDRAWAL_LIMIT};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
}

/// Amounts in cents, positive or not
fn amount() -> impl Strategy<Value = Decimal> {
    (-50_000i64..500_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn operation() -> impl Strategy<Value = (MovementKind, Decimal)> {
    (
        prop_oneof![Just(MovementKind::Deposit), Just(MovementKind::Withdrawal)],
        amount(),
    )
}

proptest! {
    #[test]
    fn balance_tracks_history_and_never_goes_negative(
        initial in (0i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2)),
        operations in prop::collection::vec(operation(), 0..40),
    ) {
        let mut account = Account::with_clock(initial, FixedClock::new(today()));

        for (kind, amount) in operations {
            let balance_before = account.balance();
            let len_before = account.movements().len();

            let result = match kind {
                MovementKind::Deposit => account.deposit(amount),
                MovementKind::Withdrawal => account.withdraw(amount),
            };

            match result {
                Ok(()) => {
                    let expected = match kind {
                        MovementKind::Deposit => balance_before + amount,
                        MovementKind::Withdrawal => balance_before - amount,
                    };
                    prop_assert_eq!(account.balance(), expected);
                    prop_assert_eq!(account.movements().len(), len_before + 1);

                    let last = account.movements().last().unwrap();
                    prop_assert_eq!(last.kind(), kind);
                    prop_assert_eq!(last.amount(), amount);
                    prop_assert!(last.matches_date(today()));
                }
                Err(_) => {
                    prop_assert_eq!(account.balance(), balance_before);
                    prop_assert_eq!(account.movements().len(), len_before);
                }
            }

            prop_assert!(account.balance() >= Decimal::ZERO);
        }

        let replayed: Decimal = account.movements().iter().map(|m| m.signed_amount()).sum();
        prop_assert_eq!(account.balance(), initial + replayed);
        prop_assert!(account.deposit_count() <= 3);
        prop_assert!(account.total_withdrawn_on(today()).unwrap() <= DAILY_WITHDRAWAL_LIMIT);
    }

    #[test]
    fn non_positive_amounts_are_always_invalid(
        cents in -1_000_000i64..=0,
        initial in 0i64..1_000_000,
    ) {
        let amount = Decimal::new(cents, 2);
        let mut account = Account::with_clock(Decimal::new(initial, 2), FixedClock::new(today()));

        prop_assert_eq!(account.deposit(amount), Err(AccountError::invalid_amount(amount)));
        prop_assert_eq!(account.withdraw(amount), Err(AccountError::invalid_amount(amount)));
        prop_assert!(account.movements().is_empty());
    }

    #[test]
    fn withdrawing_exactly_the_remaining_allowance_succeeds(
        first in 1i64..=100_000,
    ) {
        let first = Decimal::new(first, 2);
        let mut account = Account::with_clock(Decimal::from(5000), FixedClock::new(today()));

        account.withdraw(first).unwrap();
        let remaining = DAILY_WITHDRAWAL_LIMIT - first;

        if remaining > Decimal::ZERO {
            prop_assert!(account.withdraw(remaining).is_ok());
        }
        prop_assert!(
            matches!(
                account.withdraw(Decimal::new(1, 2)),
                Err(AccountError::DailyLimitExceeded { .. })
            ),
            "cap reached, next withdrawal must be rejected"
        );
    }
}
