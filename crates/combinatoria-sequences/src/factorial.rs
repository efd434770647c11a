//! The factorial family of closed-form functions.
//!
//! These delegate to the product primitives in `combinatoria-integers`
//! after a domain check; no memo table is involved because each value
//! is a single bounded product.

use crate::error::{check_index, check_pair, invalid, Result};
use combinatoria_integers::Integer;
use num_traits::{One, Zero};

/// Computes n!.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `n` is negative.
pub fn factorial(n: i64) -> Result<Integer> {
    let n = check_index("factorial", n)?;
    Ok(Integer::factorial(n))
}

/// Computes the quotient n!/k!.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` unless `0 <= k <= n`.
pub fn factorial_quotient(n: i64, k: i64) -> Result<Integer> {
    let (n, k) = check_pair("factorial_quotient", n, k)?;
    if k > n {
        return Err(invalid(
            "factorial_quotient",
            format!("k = {k} must not exceed n = {n}"),
        ));
    }
    Ok(Integer::falling_product(n, n - k))
}

/// Computes the falling factorial n * (n-1) * ... * (n-k+1), k factors.
///
/// Returns zero when `k > n` (the product passes through zero).
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `n` or `k` is negative.
pub fn falling_factorial(n: i64, k: i64) -> Result<Integer> {
    let (n, k) = check_pair("falling_factorial", n, k)?;
    if k > n {
        return Ok(Integer::zero());
    }
    Ok(Integer::falling_product(n, k))
}

/// Computes the rising factorial n * (n+1) * ... * (n+k-1), k factors.
///
/// The empty product (k = 0) is 1; when `n = 0` and `k > 0` the result
/// is zero. Otherwise equals the falling factorial of n+k-1 taken k
/// factors.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `n` or `k` is negative.
pub fn rising_factorial(n: i64, k: i64) -> Result<Integer> {
    let (n, k) = check_pair("rising_factorial", n, k)?;
    if k == 0 {
        return Ok(Integer::one());
    }
    if n == 0 {
        return Ok(Integer::zero());
    }
    Ok(Integer::falling_product(n + k - 1, k))
}
