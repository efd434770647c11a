//! Integer partitions, with and without distinctness constraints.
//!
//! Four operations share the `(n, k)` table for partitions into
//! exactly k parts:
//!
//! - [`Sequences::partitions`]: partitions of n into exactly k parts
//! - [`Sequences::partitions_total`]: all partitions of n, cached in
//!   its own single-integer table
//! - [`Sequences::partitions_distinct`]: exactly k distinct parts,
//!   derived from `partitions` by the triangular-offset identity and
//!   therefore not separately cached
//! - [`Sequences::partitions_distinct_total`]: all partitions of n
//!   into distinct parts

use crate::error::{check_index, check_pair, Result};
use crate::sequences::Sequences;
use combinatoria_integers::Integer;
use num_traits::{One, Zero};

/// The triangular offset k(k-1)/2: the smallest excess a partition
/// into k distinct parts carries over one into k unconstrained parts.
fn triangular(k: u64) -> u64 {
    if k == 0 {
        0
    } else {
        k * (k - 1) / 2
    }
}

impl Sequences {
    /// Computes the number of partitions of n into exactly k parts.
    ///
    /// p(n, k) = Σ_{i=0}^{k} p(n-k, i): removing one unit from each of
    /// the k parts leaves a partition of n-k into at most k parts.
    /// p(0, 0) = 1, p(n, 1) = p(n, n) = 1, and the count is zero when
    /// k > n or k = 0 < n.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `n` or `k` is negative.
    pub fn partitions(&self, n: i64, k: i64) -> Result<Integer> {
        let (n, k) = check_pair("partitions", n, k)?;
        Ok(self.partitions_memo(n, k))
    }

    /// Computes the total number of partitions of n, summing the exact
    /// counts for every part count k = 0..=n.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `n` is negative.
    pub fn partitions_total(&self, n: i64) -> Result<Integer> {
        let n = check_index("partitions_total", n)?;
        if let Some(value) = self.partitions_total.get(&n) {
            return Ok(value);
        }

        self.warm_partitions(n, n);
        let mut sum = Integer::zero();
        for k in 0..=n {
            sum = sum + self.partitions_cell(n, k);
        }
        self.partitions_total.insert(n, sum.clone());
        Ok(sum)
    }

    /// Computes the number of partitions of n into exactly k distinct
    /// parts.
    ///
    /// Subtracting 0, 1, ..., k-1 from the parts in increasing order
    /// maps these bijectively onto partitions of n - k(k-1)/2 into
    /// exactly k parts, so the count is p(n - k(k-1)/2, k), or zero
    /// when n is below the triangular offset.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `n` or `k` is negative.
    pub fn partitions_distinct(&self, n: i64, k: i64) -> Result<Integer> {
        let (n, k) = check_pair("partitions_distinct", n, k)?;
        let offset = triangular(k);
        if n < offset {
            return Ok(Integer::zero());
        }
        Ok(self.partitions_memo(n - offset, k))
    }

    /// Computes the total number of partitions of n into distinct
    /// parts, accumulating over k = 1, 2, ... and stopping at the
    /// first exactly-zero term.
    ///
    /// The early exit is sound because the terms vanish monotonically:
    /// once n < k(k-1)/2 + k there is no partition into k or more
    /// distinct parts.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `n` is negative.
    pub fn partitions_distinct_total(&self, n: i64) -> Result<Integer> {
        let n = check_index("partitions_distinct_total", n)?;
        let mut sum = Integer::zero();
        let mut k = 1;
        loop {
            let offset = triangular(k);
            if n < offset {
                break;
            }
            let term = self.partitions_memo(n - offset, k);
            if term.is_zero() {
                break;
            }
            sum = sum + term;
            k += 1;
        }
        Ok(sum)
    }

    /// Warms the table and reads one exact-part-count value.
    pub(crate) fn partitions_memo(&self, n: u64, k: u64) -> Integer {
        self.warm_partitions(n, k);
        self.partitions_cell(n, k)
    }

    /// Fills the `(m, j)` triangle for m <= limit, j <= width, in an
    /// order where every recurrence operand is already present.
    fn warm_partitions(&self, limit: u64, width: u64) {
        for m in 1..=limit {
            for j in 1..=m.min(width) {
                if !self.partitions.contains(&(m, j)) {
                    let value = self.partitions_cell(m, j);
                    self.partitions.insert((m, j), value);
                }
            }
        }
    }

    fn partitions_cell(&self, n: u64, k: u64) -> Integer {
        if k > n {
            return Integer::zero();
        }
        if n == 0 || k == 1 || k == n {
            return Integer::one();
        }
        if k == 0 {
            return Integer::zero();
        }
        if let Some(value) = self.partitions.get(&(n, k)) {
            return value;
        }
        let mut sum = Integer::zero();
        for i in 0..=k {
            sum = sum + self.partitions_cell(n - k, i);
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partitions_by_parts() {
        let seq = Sequences::new();
        assert_eq!(seq.partitions(5, 2).unwrap(), Integer::from(2));
        assert_eq!(seq.partitions(8, 3).unwrap(), Integer::from(5));
        assert_eq!(seq.partitions(5, 1).unwrap(), Integer::from(1));
        assert_eq!(seq.partitions(5, 5).unwrap(), Integer::from(1));
        assert_eq!(seq.partitions(0, 0).unwrap(), Integer::from(1));
        assert_eq!(seq.partitions(5, 0).unwrap(), Integer::from(0));
        assert_eq!(seq.partitions(3, 7).unwrap(), Integer::from(0));
    }

    #[test]
    fn test_partitions_total_values() {
        let seq = Sequences::new();
        let expected = [1, 1, 2, 3, 5, 7, 11, 15, 22, 30, 42];
        for (n, value) in expected.iter().enumerate() {
            assert_eq!(
                seq.partitions_total(n as i64).unwrap(),
                Integer::from(*value)
            );
        }
    }

    #[test]
    fn test_partitions_total_is_sum_over_part_counts() {
        let seq = Sequences::new();
        for n in 0..20i64 {
            let mut sum = Integer::zero();
            for k in 0..=n {
                sum = sum + seq.partitions(n, k).unwrap();
            }
            assert_eq!(seq.partitions_total(n).unwrap(), sum);
        }
    }

    #[test]
    fn test_two_tables_never_collide() {
        let seq = Sequences::new();
        assert_eq!(seq.partitions_total(6).unwrap(), Integer::from(11));
        // The one-argument form caches under its own key space; the
        // (6, 6) entry of the two-argument table is untouched by it.
        assert_eq!(seq.partitions_total.len(), 1);
        assert_eq!(seq.partitions_total.get(&6), Some(Integer::from(11)));
        assert_eq!(seq.partitions.get(&(6, 6)), Some(Integer::from(1)));
    }

    #[test]
    fn test_partitions_distinct_by_parts() {
        let seq = Sequences::new();
        // 6 = 5+1 = 4+2
        assert_eq!(seq.partitions_distinct(6, 2).unwrap(), Integer::from(2));
        // 6 = 3+2+1
        assert_eq!(seq.partitions_distinct(6, 3).unwrap(), Integer::from(1));
        assert_eq!(seq.partitions_distinct(6, 4).unwrap(), Integer::from(0));
        assert_eq!(seq.partitions_distinct(2, 3).unwrap(), Integer::from(0));
    }

    #[test]
    fn test_partitions_distinct_total_values() {
        let seq = Sequences::new();
        // q(6): 6, 5+1, 4+2, 3+2+1
        assert_eq!(seq.partitions_distinct_total(6).unwrap(), Integer::from(4));

        // q(1)..q(10); the sum over part counts starts at k = 1, so
        // q(0) is the empty sum.
        let expected = [1, 1, 2, 2, 3, 4, 5, 6, 8, 10];
        for (i, value) in expected.iter().enumerate() {
            let n = i as i64 + 1;
            assert_eq!(
                seq.partitions_distinct_total(n).unwrap(),
                Integer::from(*value),
                "q({n})"
            );
        }
        assert_eq!(seq.partitions_distinct_total(0).unwrap(), Integer::from(0));
    }

    #[test]
    fn test_partitions_reject_negative() {
        let seq = Sequences::new();
        assert!(seq.partitions(-1, 2).is_err());
        assert!(seq.partitions(5, -2).is_err());
        assert!(seq.partitions_total(-1).is_err());
        assert!(seq.partitions_distinct(-4, 1).is_err());
        assert!(seq.partitions_distinct_total(-1).is_err());
        assert!(seq.partitions.is_empty());
    }
}
