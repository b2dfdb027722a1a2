//! Wallet Engine Library
//! # Overview
//!
//! This library models a single wallet account: a balance plus the dated
//! history of deposits and withdrawals that produced it.
//!
//! # Architecture
//!
//! - [`types`] - Movements and error types
//! - [`core`] - Business logic:
//!   - [`core::account`] - Balance, history and movement validation
//!   - [`core::limits`] - Deposit count and daily withdrawal caps
//!   - [`core::traits`] - The `Clock` supplying "today"
//! - [`io`] - CSV parsing and output
//! - [`replay`] - Drives an account through a CSV of operations
//! - [`cli`] - Command-line arguments and logging setup
//!
//! # Business Rules
//!
//! - Amounts must be strictly positive
//! - An account accepts at most [`MAX_DEPOSITS`] deposits over its lifetime
//! - At most [`DAILY_WITHDRAWAL_LIMIT`] may be withdrawn per calendar day
//! - A withdrawal may never take the balance below zero
//!
//! Violations are reported as [`AccountError`] and leave the account untouched.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use wallet_engine::{Account, AccountError};
//!
//! let mut account = Account::with_balance(Decimal::from(500));
//! account.deposit(Decimal::from(100)).unwrap();
//!
//! assert!(matches!(
//!     account.withdraw(Decimal::from(601)),
//!     Err(AccountError::InsufficientBalance { .. })
//! ));
//! assert_eq!(account.balance(), Decimal::from(600));
//! ```

pub mod cli;
pub mod core;
pub mod io;
pub mod replay;
pub mod types;

pub use crate::core::{
    Account, Clock, FixedClock, SystemClock, DAILY_WITHDRAWAL_LIMIT, MAX_DEPOSITS,
};
pub use replay::{replay, OutputKind, ReplayConfig, ReplayReport};
pub use types::{AccountError, Movement, MovementKind, ReplayError};
