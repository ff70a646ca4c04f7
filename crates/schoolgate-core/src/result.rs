//! Convenience result type alias for SchoolGate.

use crate::error::AppError;

/// A specialized `Result` type for SchoolGate operations.
pub type AppResult<T> = Result<T, AppError>;
