//! Core business logic module
//!
//! - `account` - Account state and movement validation
//! - `limits` - Fixed business-rule limits
//! - `traits` - The `Clock` abstraction for "today"

pub mod account;
pub mod limits;
pub mod traits;

pub use account::Account;
pub use limits::{DAILY_WITHDRAWAL_LIMIT, MAX_DEPOSITS};
pub use traits::{Clock, FixedClock, SystemClock};
