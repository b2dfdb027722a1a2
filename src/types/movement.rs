//! Movement types for the wallet engine
//!
//! A movement is an immutable, dated record of a single deposit or withdrawal.
//! The amount is always a positive magnitude; direction lives in [`MovementKind`].

use crate::core::{Account, Clock};
use crate::types::AccountError;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Direction of a movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKind {
    /// Increases the account balance
    Deposit,

    /// Decreases the account balance
    Withdrawal,
}

impl MovementKind {
    /// Lowercase name used in CSV files and log output
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Withdrawal => "withdrawal",
        }
    }
}

/// A single dated deposit or withdrawal
///
/// Construction performs no validation; the account checks its business
/// rules before a movement is ever built on the validated path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    date: NaiveDate,
    amount: Decimal,
    kind: MovementKind,
}

impl Movement {
    pub fn new(date: NaiveDate, amount: Decimal, kind: MovementKind) -> Self {
        Movement { date, amount, kind }
    }

    pub fn deposit(date: NaiveDate, amount: Decimal) -> Self {
        Movement::new(date, amount, MovementKind::Deposit)
    }

    pub fn withdrawal(date: NaiveDate, amount: Decimal) -> Self {
        Movement::new(date, amount, MovementKind::Withdrawal)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Positive magnitude of the movement
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn is_deposit(&self) -> bool {
        self.kind == MovementKind::Deposit
    }

    pub fn is_withdrawal(&self) -> bool {
        self.kind == MovementKind::Withdrawal
    }

    pub fn matches_date(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// Balance delta contributed by this movement
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            MovementKind::Deposit => self.amount,
            MovementKind::Withdrawal => -self.amount,
        }
    }

    /// Apply this movement to an account
    ///
    /// Adjusts the balance by `+amount` for deposits and `-amount` for
    /// withdrawals, then appends the movement to the account history. This is
    /// the only place the validated path mutates account state, so balance
    /// and history always change together.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::ArithmeticOverflow`] if the new balance cannot
    /// be represented. The account is left untouched in that case.
    pub fn apply_to<C: Clock>(self, account: &mut Account<C>) -> Result<(), AccountError> {
        let new_balance = match self.kind {
            MovementKind::Deposit => account.balance().checked_add(self.amount),
            MovementKind::Withdrawal => account.balance().checked_sub(self.amount),
        }
        .ok_or_else(|| AccountError::arithmetic_overflow(self.kind.as_str()))?;

        account.commit(self, new_balance);
        Ok(())
    }
}
