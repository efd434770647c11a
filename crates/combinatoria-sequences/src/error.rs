//! The single error kind for domain violations.
//!
//! Every sequence function validates its arguments before touching any
//! cache; an out-of-domain call fails with [`Error::InvalidArgument`]
//! and leaves all memo tables untouched.

use thiserror::Error;

/// Errors raised by the sequence functions.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An argument outside the function's documented domain.
    #[error("invalid argument to {function}: {message}")]
    InvalidArgument {
        /// The function that rejected the call.
        function: &'static str,
        /// What was wrong with the arguments.
        message: String,
    },
}

/// Result alias for sequence evaluation.
pub type Result<T> = std::result::Result<T, Error>;

/// Builds an [`Error::InvalidArgument`] for the given call site.
pub(crate) fn invalid(function: &'static str, message: impl Into<String>) -> Error {
    Error::InvalidArgument {
        function,
        message: message.into(),
    }
}

/// Validates that a single argument is non-negative.
pub(crate) fn check_index(function: &'static str, n: i64) -> Result<u64> {
    u64::try_from(n).map_err(|_| invalid(function, format!("expected non-negative argument, got {n}")))
}

/// Validates that both arguments of a pair are non-negative.
pub(crate) fn check_pair(function: &'static str, n: i64, k: i64) -> Result<(u64, u64)> {
    Ok((check_index(function, n)?, check_index(function, k)?))
}
