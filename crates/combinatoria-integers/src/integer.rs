//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` with the
//! operations the sequence engine needs: ring arithmetic, exact
//! division, exponentiation, and the product-form combinatorial
//! primitives (factorial, falling products, binomial coefficients).

use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An arbitrary precision signed integer.
///
/// This type wraps `dashu::IBig` and provides the exact arithmetic
/// needed for combinatorial sequence evaluation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp for a non-negative exponent.
    ///
    /// By convention `x^0 = 1` for every x, including zero.
    #[must_use]
    pub fn pow(&self, exp: u64) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Divides exactly, checking that no remainder is discarded.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero or does not divide `self`.
    #[must_use]
    pub fn div_exact(&self, divisor: &Self) -> Self {
        assert!(!divisor.is_zero(), "division by zero");
        let quotient = &self.0 / &divisor.0;
        let remainder = &self.0 - &quotient * &divisor.0;
        assert!(remainder == IBig::ZERO, "inexact division");
        Self(quotient)
    }

    /// Computes n! by direct product.
    #[must_use]
    pub fn factorial(n: u64) -> Self {
        let mut result = Self::one();
        for i in 2..=n {
            result = result * Self::from(i);
        }
        result
    }

    /// Computes the k-factor falling product n * (n-1) * ... * (n-k+1).
    ///
    /// Callers must ensure `k <= n`; the empty product (k = 0) is 1.
    #[must_use]
    pub fn falling_product(n: u64, k: u64) -> Self {
        debug_assert!(k <= n, "falling product needs k <= n");
        let mut result = Self::one();
        for i in 0..k {
            result = result * Self::from(n - i);
        }
        result
    }

    /// Computes the binomial coefficient C(n, k) by the multiplicative
    /// formula, reducing via the symmetry C(n, k) = C(n, n-k) first.
    ///
    /// Returns zero when `k > n`. Every intermediate division is exact:
    /// after the i-th step the accumulator holds C(n, i+1).
    #[must_use]
    pub fn binomial(n: u64, k: u64) -> Self {
        if k > n {
            return Self::zero();
        }
        let k = k.min(n - k);
        let mut result = Self::one();
        for i in 0..k {
            result = (result * Self::from(n - i)).div_exact(&Self::from(i + 1));
        }
        result
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer(&self.0 - &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}
