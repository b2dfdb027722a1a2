//! Types module
//!
//! Contains the data structures shared across the crate:
//! - `movement`: dated deposit/withdrawal records
//! - `error`: account and replay error types

pub mod error;
pub mod movement;

pub use error::{AccountError, ReplayError};
pub use movement::{Movement, MovementKind};
