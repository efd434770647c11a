//! Sums of k-th powers of the first n positive integers.

use crate::error::{check_pair, Result};
use crate::sequences::Sequences;
use combinatoria_integers::Integer;
use num_traits::Zero;

impl Sequences {
    /// Computes Σ_{i=1}^{n} i^k.
    ///
    /// The empty sum (n = 0) is zero; k = 0 sums n ones; k = 1 is the
    /// binomial shortcut C(n, 2); for k >= 2 the recurrence strips the
    /// top term: Σ(n, k) = n^k + Σ(n-1, k).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `n` or `k` is negative.
    pub fn power_sum(&self, n: i64, k: i64) -> Result<Integer> {
        let (n, k) = check_pair("power_sum", n, k)?;
        if k >= 2 {
            for i in 1..=n {
                if !self.power_sum.contains(&(i, k)) {
                    let value = self.power_sum_cell(i, k);
                    self.power_sum.insert((i, k), value);
                }
            }
        }
        Ok(self.power_sum_cell(n, k))
    }

    fn power_sum_cell(&self, n: u64, k: u64) -> Integer {
        if n == 0 {
            return Integer::zero();
        }
        if k == 0 {
            return Integer::from(n);
        }
        if k == 1 {
            return Integer::binomial(n, 2);
        }
        if let Some(value) = self.power_sum.get(&(n, k)) {
            return value;
        }
        Integer::from(n).pow(k) + self.power_sum_cell(n - 1, k)
    }
}
