//! # combinatoria-sequences
//!
//! Memoized exact evaluation of classical combinatorial sequences and
//! numbers: factorials and their variants, binomial-type coefficients,
//! derangements, Bell and Stirling numbers, integer partitions, Euler
//! numbers, and power sums. Every value is an exact arbitrary precision
//! integer; nothing here approximates.
//!
//! The crate has two kinds of entry points:
//!
//! - Closed-form functions (`factorial`, `binomial`, `catalan`, ...)
//!   that delegate to the arithmetic primitives after a domain check.
//! - The [`Sequences`] evaluator, which owns one memo table per
//!   recursively defined sequence and fills each table bottom-up so
//!   repeated queries are cache hits and large arguments cannot
//!   exhaust the call stack.
//!
//! ## Quick Start
//!
//! ```
//! use combinatoria_sequences::{binomial, Sequences};
//!
//! let seq = Sequences::new();
//! assert_eq!(seq.fibonacci(10).unwrap().to_i64(), Some(55));
//! assert_eq!(seq.bell(4).unwrap().to_i64(), Some(15));
//! assert_eq!(binomial(5, 2).unwrap().to_i64(), Some(10));
//! ```
//!
//! All domain violations (negative arguments, and the argument shapes
//! each function documents as errors rather than zero results) surface
//! as [`Error::InvalidArgument`]; no partial value is ever returned or
//! cached on error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binomial;
pub mod error;
pub mod factorial;
pub mod memo;
pub mod sequences;

mod euler;
mod partitions;
mod power_sum;
mod stirling;

#[cfg(test)]
mod proptests;

pub use binomial::{binomial, catalan, multichoose, multinomial};
pub use error::{Error, Result};
pub use factorial::{factorial, factorial_quotient, falling_factorial, rising_factorial};
pub use memo::MemoTable;
pub use sequences::Sequences;
