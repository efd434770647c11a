//! # Combinatoria
//!
//! Exact combinatorial sequences and numbers over arbitrary precision
//! integers.
//!
//! ## Features
//!
//! - **Exact Values**: every result is an arbitrary precision integer,
//!   never a float or an approximation
//! - **Memoized Recurrences**: Fibonacci, derangements, Bell, Stirling
//!   (both kinds), integer partitions, Euler numbers, power sums
//! - **Closed Forms**: factorial variants, binomial coefficients,
//!   Catalan numbers, multiset and multinomial coefficients
//! - **Thread Safe**: a [`Sequences`](combinatoria_sequences::Sequences)
//!   evaluator can be shared across threads; its tables are lock-guarded
//!
//! ## Quick Start
//!
//! ```
//! use combinatoria::prelude::*;
//!
//! let seq = Sequences::new();
//! assert_eq!(seq.bell(4).unwrap(), Integer::from(15));
//! assert_eq!(seq.partitions_total(5).unwrap(), Integer::from(7));
//! assert_eq!(binomial(5, 2).unwrap(), Integer::from(10));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use combinatoria_integers as integers;
pub use combinatoria_sequences as sequences;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use combinatoria_integers::Integer;
    pub use combinatoria_sequences::{
        binomial, catalan, factorial, factorial_quotient, falling_factorial, multichoose,
        multinomial, rising_factorial, Error, MemoTable, Result, Sequences,
    };
}
