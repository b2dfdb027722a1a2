//! Business-rule limits enforced by [`crate::core::Account`]

use rust_decimal::Decimal;

/// Maximum number of deposits an account accepts over its lifetime
pub const MAX_DEPOSITS: usize = 3;

/// Maximum cumulative withdrawal amount per calendar day
pub const DAILY_WITHDRAWAL_LIMIT: Decimal = Decimal::ONE_THOUSAND;
