//! Binomial-type closed-form functions.

use crate::error::{check_index, check_pair, invalid, Result};
use combinatoria_integers::Integer;
use num_traits::One;

/// Computes the binomial coefficient C(n, k).
///
/// Returns zero when `k > n`.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `n` or `k` is negative.
pub fn binomial(n: i64, k: i64) -> Result<Integer> {
    let (n, k) = check_pair("binomial", n, k)?;
    Ok(Integer::binomial(n, k))
}

/// Computes the n-th Catalan number C(2n, n) / (n + 1).
///
/// The division is exact for every n.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `n` is negative.
pub fn catalan(n: i64) -> Result<Integer> {
    let n = check_index("catalan", n)?;
    Ok(Integer::binomial(2 * n, n).div_exact(&Integer::from(n + 1)))
}

/// Computes the multiset coefficient C(n + k - 1, k): the number of
/// ways to choose k elements from n kinds with repetition.
///
/// Choosing nothing (k = 0) counts one way, for every n including 0.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `n` or `k` is negative.
pub fn multichoose(n: i64, k: i64) -> Result<Integer> {
    let (n, k) = check_pair("multichoose", n, k)?;
    if k == 0 {
        return Ok(Integer::one());
    }
    Ok(Integer::binomial(n + k - 1, k))
}

/// Computes the multinomial coefficient (Σvᵢ)! / (v₁! · v₂! · ... · vₘ!)
/// over a sequence of group sizes.
///
/// Reduces to a product of binomials over the running sum; the empty
/// sequence yields 1.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if any group size is negative.
pub fn multinomial(groups: &[i64]) -> Result<Integer> {
    let mut sizes = Vec::with_capacity(groups.len());
    for &group in groups {
        if group < 0 {
            return Err(invalid(
                "multinomial",
                format!("group sizes must be non-negative, got {group}"),
            ));
        }
        sizes.push(group as u64);
    }

    let mut result = Integer::one();
    let mut total = 0u64;
    for &size in &sizes {
        total += size;
        result = result * Integer::binomial(total, size);
    }
    Ok(result)
}
