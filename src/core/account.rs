//! Account state and movement validation
//!
//! An [`Account`] owns a balance and the ordered history of movements that
//! produced it. State changes arrive through two distinct paths:
//!
//! - **Validated**: [`Account::deposit`] and [`Account::withdraw`] check the
//!   business rules, then build a [`Movement`] and let it apply itself.
//! - **Rehydration**: [`Account::rehydrate_movement`] and
//!   [`Account::rehydrate_balance`] load state from an external store without
//!   re-running any rule. The caller keeps balance and history consistent.
//!
//! Amount positivity is always checked first, before any limit, so a negative
//! withdrawal reports `InvalidAmount` even when the balance is also too low.

use crate::core::limits::{DAILY_WITHDRAWAL_LIMIT, MAX_DEPOSITS};
use crate::core::traits::{Clock, SystemClock};
use crate::types::{AccountError, Movement};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

/// A single wallet: balance plus movement history
///
/// The account is a plain owned value with no internal locking. Hosts that
/// share it across threads must serialize access per account.
#[derive(Debug, Clone)]
pub struct Account<C: Clock = SystemClock> {
    balance: Decimal,
    movements: Vec<Movement>,
    clock: C,
}

impl Account {
    /// Create an account with a zero balance and no history
    pub fn new() -> Self {
        Account::with_balance(Decimal::ZERO)
    }

    /// Create an account with an explicit initial balance
    pub fn with_balance(initial_balance: Decimal) -> Self {
        Account::with_clock(initial_balance, SystemClock)
    }
}

impl Default for Account {
    fn default() -> Self {
        Account::new()
    }
}

impl<C: Clock> Account<C> {
    /// Create an account whose movements are dated by `clock`
    pub fn with_clock(initial_balance: Decimal, clock: C) -> Self {
        Account {
            balance: initial_balance,
            movements: Vec::new(),
            clock,
        }
    }

    /// Rebuild an account from stored state without validation
    ///
    /// `balance` is taken as-is; it is not recomputed from `movements`.
    pub fn rehydrated<I>(balance: Decimal, movements: I, clock: C) -> Self
    where
        I: IntoIterator<Item = Movement>,
    {
        let mut account = Account::with_clock(balance, clock);
        for movement in movements {
            account.rehydrate_movement(movement);
        }
        account
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Movement history in insertion order
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Deposit funds
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`
    /// - `DepositLimitExceeded` if [`MAX_DEPOSITS`] deposits were already made
    /// - `ArithmeticOverflow` if the balance cannot hold the result
    ///
    /// On error the account is unchanged.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        validate_positive(amount)?;

        if self.deposit_count() >= MAX_DEPOSITS {
            return Err(AccountError::deposit_limit_exceeded(MAX_DEPOSITS));
        }

        let today = self.clock.today();
        Movement::deposit(today, amount).apply_to(self)
    }

    /// Withdraw funds
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`
    /// - `InsufficientBalance` if `amount` exceeds the balance
    /// - `DailyLimitExceeded` if `amount` exceeds what is left of today's
    ///   [`DAILY_WITHDRAWAL_LIMIT`]
    /// - `ArithmeticOverflow` if today's rehydrated withdrawals cannot be totalled
    ///
    /// On error the account is unchanged.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        validate_positive(amount)?;

        if self.balance < amount {
            return Err(AccountError::insufficient_balance(self.balance, amount));
        }

        let today = self.clock.today();
        let remaining = self.remaining_daily_allowance(today)?;
        if amount > remaining {
            return Err(AccountError::daily_limit_exceeded(
                DAILY_WITHDRAWAL_LIMIT,
                remaining,
                amount,
            ));
        }

        Movement::withdrawal(today, amount).apply_to(self)
    }

    /// Append a stored movement without validation or balance adjustment
    pub fn rehydrate_movement(&mut self, movement: Movement) {
        debug!(
            date = %movement.date(),
            kind = movement.kind().as_str(),
            amount = %movement.amount(),
            "rehydrated movement"
        );
        self.movements.push(movement);
    }

    /// Overwrite the balance without validation
    pub fn rehydrate_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    /// Sum of withdrawal amounts recorded on `date`
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if rehydrated amounts overflow the total.
    pub fn total_withdrawn_on(&self, date: NaiveDate) -> Result<Decimal, AccountError> {
        self.movements
            .iter()
            .filter(|movement| movement.is_withdrawal() && movement.matches_date(date))
            .try_fold(Decimal::ZERO, |total, movement| {
                total.checked_add(movement.amount())
            })
            .ok_or_else(|| AccountError::arithmetic_overflow("withdrawal"))
    }

    /// Withdrawal allowance left on `date`
    ///
    /// May be negative when rehydrated history already exceeds the cap.
    pub fn remaining_daily_allowance(&self, date: NaiveDate) -> Result<Decimal, AccountError> {
        DAILY_WITHDRAWAL_LIMIT
            .checked_sub(self.total_withdrawn_on(date)?)
            .ok_or_else(|| AccountError::arithmetic_overflow("withdrawal"))
    }

    /// Number of deposits in the whole history
    pub fn deposit_count(&self) -> usize {
        self.movements
            .iter()
            .filter(|movement| movement.is_deposit())
            .count()
    }

    /// Number of withdrawals in the whole history
    pub fn withdrawal_count(&self) -> usize {
        self.movements
            .iter()
            .filter(|movement| movement.is_withdrawal())
            .count()
    }

    /// The date the account's clock currently reports
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // Only reachable through Movement::apply_to.
    pub(crate) fn commit(&mut self, movement: Movement, new_balance: Decimal) {
        debug!(
            date = %movement.date(),
            kind = movement.kind().as_str(),
            amount = %movement.amount(),
            balance = %new_balance,
            "movement applied"
        );
        self.balance = new_balance;
        self.movements.push(movement);
    }
}

fn validate_positive(amount: Decimal) -> Result<(), AccountError> {
    if amount <= Decimal::ZERO {
        return Err(AccountError::invalid_amount(amount));
    }
    Ok(())
}
