//! Result type definition.

use crate::error::Error;

/// The standard Result type for fnkit operations.
///
/// # Examples
///
/// ```
/// use fnkit_core::{Result, factorial};
///
/// fn factorial_digits(n: i64) -> Result<usize> {
///     Ok(factorial(n)?.to_string().len())
/// }
///
/// assert_eq!(factorial_digits(10), Ok(7));
/// assert!(factorial_digits(-1).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
