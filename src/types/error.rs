//! Error types for the wallet engine
//!
//! Two families of errors exist:
//!
//! - [`AccountError`]: business-rule violations raised by the account itself.
//!   These are local, synchronous validation failures and never leave the
//!   account in a partially updated state.
//! - [`ReplayError`]: fatal failures of the CSV replay pipeline (missing
//!   files, I/O, malformed input and unreportable account state).

use rust_decimal::Decimal;
use thiserror::Error;

/// Business-rule violations reported by [`crate::core::Account`]
///
/// Every variant carries the offending amount or limit so callers can render
/// a meaningful message. The variant, not the message text, is the contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// Deposit or withdrawal of a zero or negative amount
    #[error("{amount}: the amount must be a positive value")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// The account already holds the maximum number of deposits
    ///
    /// The count covers the whole account lifetime, not a single day.
    #[error("Already made the maximum of {limit} deposits")]
    DepositLimitExceeded {
        /// Maximum number of deposits allowed
        limit: usize,
    },

    /// Withdrawal larger than the current balance
    #[error("Cannot withdraw {requested}: balance is only {balance}")]
    InsufficientBalance {
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Withdrawal larger than what is left of today's allowance
    #[error("Cannot withdraw more than {limit} per day: requested {requested}, remaining {remaining}")]
    DailyLimitExceeded {
        /// Daily withdrawal cap
        limit: Decimal,
        /// Allowance left for the day
        remaining: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// The resulting balance cannot be represented
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },
}

impl AccountError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        AccountError::InvalidAmount { amount }
    }

    /// Create a DepositLimitExceeded error
    pub fn deposit_limit_exceeded(limit: usize) -> Self {
        AccountError::DepositLimitExceeded { limit }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(balance: Decimal, requested: Decimal) -> Self {
        AccountError::InsufficientBalance { balance, requested }
    }

    /// Create a DailyLimitExceeded error
    pub fn daily_limit_exceeded(limit: Decimal, remaining: Decimal, requested: Decimal) -> Self {
        AccountError::DailyLimitExceeded {
            limit,
            remaining,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        AccountError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }
}

/// Fatal errors of the replay pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplayError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Malformed CSV content
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Account state that cannot be reported, such as an overflowing history
    #[error("Account error: {0}")]
    Account(#[from] AccountError),
}

impl ReplayError {
    /// Create a ParseError
    pub fn parse(line: Option<u64>, message: impl Into<String>) -> Self {
        ReplayError::ParseError {
            line,
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ReplayError {
    fn from(error: std::io::Error) -> Self {
        ReplayError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ReplayError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ReplayError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_amount(
        AccountError::InvalidAmount { amount: Decimal::new(-1, 0) },
        "-1: the amount must be a positive value"
    )]
    #[case::deposit_limit(
        AccountError::DepositLimitExceeded { limit: 3 },
        "Already made the maximum of 3 deposits"
    )]
    #[case::insufficient_balance(
        AccountError::InsufficientBalance { balance: Decimal::new(500, 0), requested: Decimal::new(501, 0) },
        "Cannot withdraw 501: balance is only 500"
    )]
    #[case::daily_limit(
        AccountError::DailyLimitExceeded {
            limit: Decimal::new(1000, 0),
            remaining: Decimal::new(250, 0),
            requested: Decimal::new(300, 0),
        },
        "Cannot withdraw more than 1000 per day: requested 300, remaining 250"
    )]
    #[case::overflow(
        AccountError::ArithmeticOverflow { operation: "deposit".to_string() },
        "Arithmetic overflow in deposit"
    )]
    fn test_account_error_display(#[case] error: AccountError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_amount(
        AccountError::invalid_amount(Decimal::ZERO),
        AccountError::InvalidAmount { amount: Decimal::ZERO }
    )]
    #[case::deposit_limit(
        AccountError::deposit_limit_exceeded(3),
        AccountError::DepositLimitExceeded { limit: 3 }
    )]
    #[case::insufficient_balance(
        AccountError::insufficient_balance(Decimal::ONE, Decimal::TWO),
        AccountError::InsufficientBalance { balance: Decimal::ONE, requested: Decimal::TWO }
    )]
    #[case::overflow(
        AccountError::arithmetic_overflow("withdrawal"),
        AccountError::ArithmeticOverflow { operation: "withdrawal".to_string() }
    )]
    fn test_helper_functions(#[case] result: AccountError, #[case] expected: AccountError) {
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case::file_not_found(
        ReplayError::FileNotFound { path: "ops.csv".to_string() },
        "File not found: ops.csv"
    )]
    #[case::parse_error_with_line(
        ReplayError::parse(Some(7), "Invalid amount 'abc'"),
        "CSV parse error at line 7: Invalid amount 'abc'"
    )]
    #[case::parse_error_without_line(
        ReplayError::parse(None, "Invalid amount 'abc'"),
        "CSV parse error: Invalid amount 'abc'"
    )]
    #[case::account(
        ReplayError::from(AccountError::arithmetic_overflow("withdrawal")),
        "Account error: Arithmetic overflow in withdrawal"
    )]
    fn test_replay_error_display(#[case] error: ReplayError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: ReplayError = io_error.into();
        assert!(matches!(error, ReplayError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
