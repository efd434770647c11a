//! Euler (secant) numbers.

use crate::error::{check_index, Result};
use crate::sequences::Sequences;
use combinatoria_integers::Integer;
use num_traits::{One, Zero};

impl Sequences {
    /// Computes the n-th Euler number, the coefficients of the secant
    /// series: E(0) = 1, E(n) = 0 for odd n, and for even n
    /// E(n) = -Σ_{k=0}^{n/2-1} C(n, 2k) * E(2k).
    ///
    /// The signs alternate over the even indices: 1, -1, 5, -61, ...
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `n` is negative.
    pub fn euler(&self, n: i64) -> Result<Integer> {
        let n = check_index("euler", n)?;
        if n % 2 == 1 {
            return Ok(Integer::zero());
        }
        for m in (2..=n).step_by(2) {
            if !self.euler.contains(&m) {
                let value = self.euler_cell(m);
                self.euler.insert(m, value);
            }
        }
        Ok(self.euler_cell(n))
    }

    fn euler_cell(&self, n: u64) -> Integer {
        if n == 0 {
            return Integer::one();
        }
        if let Some(value) = self.euler.get(&n) {
            return value;
        }
        let mut sum = Integer::zero();
        for k in 0..n / 2 {
            sum = sum + Integer::binomial(n, 2 * k) * self.euler_cell(2 * k);
        }
        -sum
    }
}
