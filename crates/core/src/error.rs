//! Core error types for fnkit operations.
//!
//! Only `factorial` can fail; every other function is total over its input.

use thiserror::Error;

/// Message carried by [`Error::InvalidArgument`] when `factorial` sees a negative input.
pub const NEGATIVE_FACTORIAL: &str = "Negatív számra nincs faktoriális";

/// Core error type for fnkit operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{reason}")]
    InvalidArgument { reason: String },
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
