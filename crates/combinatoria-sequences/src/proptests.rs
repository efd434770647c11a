//! Property-based tests for the sequence engine.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{binomial, multinomial, Sequences};
    use combinatoria_integers::Integer;

    // Arguments stay small: the properties quantify over structure,
    // not magnitude, and the values grow super-exponentially anyway.
    fn small_n() -> impl Strategy<Value = i64> {
        0i64..40
    }

    fn small_pair() -> impl Strategy<Value = (i64, i64)> {
        (0i64..30, 0i64..30)
    }

    proptest! {
        #[test]
        fn fibonacci_recurrence(n in small_n()) {
            let seq = Sequences::new();
            prop_assert_eq!(
                seq.fibonacci(n + 2).unwrap(),
                seq.fibonacci(n + 1).unwrap() + seq.fibonacci(n).unwrap()
            );
        }

        #[test]
        fn derangement_recurrence(n in small_n()) {
            let seq = Sequences::new();
            prop_assert_eq!(
                seq.derangements(n + 2).unwrap(),
                Integer::from(n + 1) * (seq.derangements(n + 1).unwrap() + seq.derangements(n).unwrap())
            );
        }

        #[test]
        fn stirling2_vanishes_above_the_diagonal((n, k) in small_pair()) {
            prop_assume!(k > n);
            let seq = Sequences::new();
            prop_assert!(seq.stirling2(n, k).unwrap().is_zero());
        }

        #[test]
        fn stirling2_diagonal_is_one(n in small_n()) {
            let seq = Sequences::new();
            prop_assert_eq!(seq.stirling2(n, n).unwrap(), Integer::from(1));
        }

        #[test]
        fn stirling1_row_sums_vanish(n in 2i64..25) {
            // x(x-1)...(x-n+1) evaluated at x = 1 is zero for n >= 2.
            let seq = Sequences::new();
            let mut sum = Integer::zero();
            for k in 0..=n {
                sum = sum + seq.stirling1(n, k).unwrap();
            }
            prop_assert!(sum.is_zero());
        }

        #[test]
        fn partitions_total_matches_sum_over_part_counts(n in small_n()) {
            let seq = Sequences::new();
            let mut sum = Integer::zero();
            for k in 0..=n {
                sum = sum + seq.partitions(n, k).unwrap();
            }
            prop_assert_eq!(seq.partitions_total(n).unwrap(), sum);
        }

        #[test]
        fn partitions_distinct_matches_offset_identity((n, k) in small_pair()) {
            let seq = Sequences::new();
            let offset = k * (k - 1) / 2;
            let expected = if n >= offset {
                seq.partitions(n - offset, k).unwrap()
            } else {
                Integer::zero()
            };
            prop_assert_eq!(seq.partitions_distinct(n, k).unwrap(), expected);
        }

        #[test]
        fn euler_odd_indices_vanish(n in small_n()) {
            let seq = Sequences::new();
            prop_assert!(seq.euler(2 * n + 1).unwrap().is_zero());
        }

        #[test]
        fn power_sum_bases(n in small_n()) {
            let seq = Sequences::new();
            prop_assert_eq!(seq.power_sum(n, 0).unwrap(), Integer::from(n));
            prop_assert_eq!(seq.power_sum(n, 1).unwrap(), binomial(n, 2).unwrap());
        }

        #[test]
        fn power_sum_recurrence((n, k) in small_pair()) {
            prop_assume!(k >= 2);
            let seq = Sequences::new();
            prop_assert_eq!(
                seq.power_sum(n + 1, k).unwrap(),
                Integer::from(n + 1).pow(k as u64) + seq.power_sum(n, k).unwrap()
            );
        }

        #[test]
        fn multinomial_of_two_groups_is_binomial((a, b) in small_pair()) {
            prop_assert_eq!(
                multinomial(&[a, b]).unwrap(),
                binomial(a + b, b).unwrap()
            );
        }

        #[test]
        fn repeated_calls_are_transparent(n in small_n()) {
            let seq = Sequences::new();
            let first = seq.bell(n).unwrap();
            let fib_before = seq.fibonacci(n).unwrap();
            let cached = seq.bell.len();

            let second = seq.bell(n).unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(seq.bell.len(), cached);
            prop_assert_eq!(seq.fibonacci(n).unwrap(), fib_before);
        }

        #[test]
        fn domain_violations_leave_tables_unchanged(n in small_n()) {
            let seq = Sequences::new();
            seq.stirling2(n, n).unwrap();
            let cached = seq.stirling2.len();

            prop_assert!(seq.stirling2(-1, 0).is_err());
            prop_assert!(seq.stirling2(n, -1).is_err());
            prop_assert_eq!(seq.stirling2.len(), cached);
        }
    }
}
