//! The memoized sequence evaluator.
//!
//! [`Sequences`] owns one memo table per recursively defined sequence.
//! No sequence ever touches another sequence's table; cross-sequence
//! dependencies (Bell on binomial, distinct partitions on partitions)
//! go through the owning method. Every method takes `&self` (the
//! tables mutate behind their own locks), so a single evaluator can be
//! shared freely, including across threads.
//!
//! Each public entry point validates its domain, then fills its table
//! bottom-up from the base cases. The tabulated fill produces values
//! identical to the naive recursion while bounding call-stack depth,
//! and it reuses whatever prefix of the table earlier calls populated.

use crate::error::{check_index, Result};
use crate::memo::MemoTable;
use combinatoria_integers::Integer;
use num_traits::{One, Zero};

/// Evaluator for the memoized sequences, one table per sequence.
pub struct Sequences {
    pub(crate) fibonacci: MemoTable<u64>,
    pub(crate) double_factorial: MemoTable<u64>,
    pub(crate) derangements: MemoTable<u64>,
    pub(crate) stirling1: MemoTable<(u64, u64)>,
    pub(crate) stirling2: MemoTable<(u64, u64)>,
    pub(crate) bell: MemoTable<u64>,
    /// Partitions of n into exactly k parts, keyed `(n, k)`.
    pub(crate) partitions: MemoTable<(u64, u64)>,
    /// Total partitions of n; a separate table so the one-argument form
    /// can never collide with an `(n, k)` key.
    pub(crate) partitions_total: MemoTable<u64>,
    pub(crate) euler: MemoTable<u64>,
    pub(crate) power_sum: MemoTable<(u64, u64)>,
}

impl Sequences {
    /// Creates an evaluator with an empty table for every sequence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fibonacci: MemoTable::new(),
            double_factorial: MemoTable::new(),
            derangements: MemoTable::new(),
            stirling1: MemoTable::new(),
            stirling2: MemoTable::new(),
            bell: MemoTable::new(),
            partitions: MemoTable::new(),
            partitions_total: MemoTable::new(),
            euler: MemoTable::new(),
            power_sum: MemoTable::new(),
        }
    }

    /// Computes the n-th Fibonacci number.
    ///
    /// F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `n` is negative.
    pub fn fibonacci(&self, n: i64) -> Result<Integer> {
        let n = check_index("fibonacci", n)?;
        if let Some(value) = self.fibonacci.get(&n) {
            return Ok(value);
        }

        let mut prev = Integer::zero();
        let mut curr = Integer::one();
        self.fibonacci.insert(0, prev.clone());
        self.fibonacci.insert(1, curr.clone());
        if n == 0 {
            return Ok(prev);
        }
        for i in 2..=n {
            let next = match self.fibonacci.get(&i) {
                Some(value) => value,
                None => {
                    let value = &prev + &curr;
                    self.fibonacci.insert(i, value.clone());
                    value
                }
            };
            prev = curr;
            curr = next;
        }
        Ok(curr)
    }

    /// Computes the double factorial n!!.
    ///
    /// 0!! = 1!! = 1 and n!! = n * (n-2)!! for n >= 2; the chain only
    /// ever steps through arguments of the same parity as n.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `n` is negative.
    pub fn double_factorial(&self, n: i64) -> Result<Integer> {
        let n = check_index("double_factorial", n)?;
        if let Some(value) = self.double_factorial.get(&n) {
            return Ok(value);
        }

        let base = n % 2;
        let mut curr = Integer::one();
        self.double_factorial.insert(base, curr.clone());
        let mut i = base;
        while i < n {
            i += 2;
            curr = match self.double_factorial.get(&i) {
                Some(value) => value,
                None => {
                    let value = Integer::from(i) * &curr;
                    self.double_factorial.insert(i, value.clone());
                    value
                }
            };
        }
        Ok(curr)
    }

    /// Computes the number of derangements of n elements.
    ///
    /// D(0) = 1, D(1) = 0, D(n) = (n-1) * (D(n-1) + D(n-2)).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `n` is negative.
    pub fn derangements(&self, n: i64) -> Result<Integer> {
        let n = check_index("derangements", n)?;
        if let Some(value) = self.derangements.get(&n) {
            return Ok(value);
        }

        let mut prev = Integer::one();
        let mut curr = Integer::zero();
        self.derangements.insert(0, prev.clone());
        self.derangements.insert(1, curr.clone());
        if n == 0 {
            return Ok(prev);
        }
        for i in 2..=n {
            let next = match self.derangements.get(&i) {
                Some(value) => value,
                None => {
                    let value = Integer::from(i - 1) * (&prev + &curr);
                    self.derangements.insert(i, value.clone());
                    value
                }
            };
            prev = curr;
            curr = next;
        }
        Ok(curr)
    }
}

impl Default for Sequences {
    fn default() -> Self {
        Self::new()
    }
}
