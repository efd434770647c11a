//! Stirling numbers of both kinds, and Bell numbers.
//!
//! The two Stirling triangles share one evaluation shape: a cell
//! function states the base cases, consults the cache, and otherwise
//! applies the recurrence; the public entry points warm the triangle
//! row by row first, so the cell function's self-calls always resolve
//! against the cache or a base case.

use crate::error::{check_index, check_pair, Result};
use crate::sequences::Sequences;
use combinatoria_integers::Integer;
use num_traits::{One, Zero};

impl Sequences {
    /// Computes the Stirling number of the second kind S₂(n, k): the
    /// number of partitions of an n-element set into k non-empty blocks.
    ///
    /// S₂(n, k) = S₂(n-1, k-1) + k * S₂(n-1, k), with S₂(0, 0) = 1,
    /// S₂(n, n) = 1, and zero when k > n or k = 0 < n.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `n` or `k` is negative.
    pub fn stirling2(&self, n: i64, k: i64) -> Result<Integer> {
        let (n, k) = check_pair("stirling2", n, k)?;
        for i in 1..=n {
            for j in 1..=i.min(k) {
                if !self.stirling2.contains(&(i, j)) {
                    let value = self.stirling2_cell(i, j);
                    self.stirling2.insert((i, j), value);
                }
            }
        }
        Ok(self.stirling2_cell(n, k))
    }

    fn stirling2_cell(&self, n: u64, k: u64) -> Integer {
        if k > n {
            return Integer::zero();
        }
        if n == 0 || n == k {
            return Integer::one();
        }
        if k == 0 {
            return Integer::zero();
        }
        if let Some(value) = self.stirling2.get(&(n, k)) {
            return value;
        }
        self.stirling2_cell(n - 1, k - 1) + Integer::from(k) * self.stirling2_cell(n - 1, k)
    }

    /// Computes the signed Stirling number of the first kind s(n, k).
    ///
    /// s(n, k) = s(n-1, k-1) - (n-1) * s(n-1, k), with the same corner
    /// conventions as [`Sequences::stirling2`]. Values may be negative.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `n` or `k` is negative.
    pub fn stirling1(&self, n: i64, k: i64) -> Result<Integer> {
        let (n, k) = check_pair("stirling1", n, k)?;
        for i in 1..=n {
            for j in 1..=i.min(k) {
                if !self.stirling1.contains(&(i, j)) {
                    let value = self.stirling1_cell(i, j);
                    self.stirling1.insert((i, j), value);
                }
            }
        }
        Ok(self.stirling1_cell(n, k))
    }

    fn stirling1_cell(&self, n: u64, k: u64) -> Integer {
        if k > n {
            return Integer::zero();
        }
        if n == 0 || n == k {
            return Integer::one();
        }
        if k == 0 {
            return Integer::zero();
        }
        if let Some(value) = self.stirling1.get(&(n, k)) {
            return value;
        }
        self.stirling1_cell(n - 1, k - 1) - Integer::from(n - 1) * self.stirling1_cell(n - 1, k)
    }

    /// Computes the n-th Bell number: the number of partitions of an
    /// n-element set into any number of non-empty blocks.
    ///
    /// B(n) = Σ_{k=0}^{n-1} C(n-1, k) * B(k), with B(0) = 1.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `n` is negative.
    pub fn bell(&self, n: i64) -> Result<Integer> {
        let n = check_index("bell", n)?;
        if let Some(value) = self.bell.get(&n) {
            return Ok(value);
        }

        let mut values = Vec::with_capacity(n as usize + 1);
        values.push(Integer::one());
        self.bell.insert(0, Integer::one());
        for m in 1..=n {
            let value = match self.bell.get(&m) {
                Some(value) => value,
                None => {
                    let mut sum = Integer::zero();
                    for (k, prev) in values.iter().enumerate() {
                        sum = sum + Integer::binomial(m - 1, k as u64) * prev;
                    }
                    self.bell.insert(m, sum.clone());
                    sum
                }
            };
            values.push(value);
        }
        Ok(values.pop().unwrap_or_else(Integer::one))
    }
}
