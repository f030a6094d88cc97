//! Factorial over signed input.

use num_bigint::BigUint;

use crate::Result;
use crate::error::{Error, NEGATIVE_FACTORIAL};

/// Compute `n!`.
///
/// `factorial(0)` is 1. The product is accumulated iteratively in an
/// arbitrary-precision integer, so it never overflows and never grows the
/// stack.
///
/// # Errors
///
/// [`Error::InvalidArgument`] with [`NEGATIVE_FACTORIAL`] when `n < 0`.
///
/// # Examples
///
/// ```
/// use fnkit_core::{BigUint, factorial};
///
/// assert_eq!(factorial(5), Ok(BigUint::from(120_u32)));
/// assert!(factorial(-3).is_err());
/// ```
pub fn factorial(n: i64) -> Result<BigUint> {
    let upper = u64::try_from(n).map_err(|_| {
        tracing::debug!(n, "rejecting negative factorial input");
        Error::invalid_argument(NEGATIVE_FACTORIAL)
    })?;

    Ok((1..=upper).map(BigUint::from).product())
}
