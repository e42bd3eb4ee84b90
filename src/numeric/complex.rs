// ============================================================================
// Complex
// Double-precision complex numbers
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::interfaces::Arithmetic;
use std::fmt;

/// Complex number `re + im·i` with `f64` components.
///
/// There is no normalization step and no guard against non-finite results;
/// arithmetic follows ordinary IEEE-754 semantics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// Zero (0 + 0i)
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One (1 + 0i)
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// Imaginary unit (0 + 1i)
    pub const I: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[inline]
    pub const fn re(self) -> f64 {
        self.re
    }

    #[inline]
    pub const fn im(self) -> f64 {
        self.im
    }

    /// Squared magnitude `re² + im²`.
    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Complex conjugate `re - im·i`.
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Both components within `epsilon` (absolute) of `other`'s.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.re - other.re).abs() <= epsilon && (self.im - other.im).abs() <= epsilon
    }
}

impl Arithmetic for Complex {
    fn add(&self, rhs: &Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }

    fn subtract(&self, rhs: &Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }

    fn multiply(&self, rhs: &Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }

    /// Fails when `re² + im²` of `rhs` evaluates to exactly 0.0, which
    /// includes divisors so small that the squared magnitude underflows.
    /// No tolerance is applied beyond that.
    fn divide(&self, rhs: &Self) -> NumericResult<Self> {
        let denominator = rhs.norm_sqr();
        if denominator == 0.0 {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::new(
            (self.re * rhs.re + self.im * rhs.im) / denominator,
            (self.im * rhs.re - self.re * rhs.im) / denominator,
        ))
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl fmt::Display for Complex {
    /// Always `"<re> + <im>i"`, so a negative imaginary part renders as
    /// `"1 + -3i"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.re, self.im)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn complex() -> impl Strategy<Value = Complex> {
        (-1.0e6f64..1.0e6, -1.0e6f64..1.0e6).prop_map(|(re, im)| Complex::new(re, im))
    }

    proptest! {
        #[test]
        fn add_commutes(a in complex(), b in complex()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn multiply_commutes(a in complex(), b in complex()) {
            prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        }

        #[test]
        fn identities_hold(x in complex()) {
            prop_assert_eq!(x.multiply(&Complex::ONE), x);
            prop_assert_eq!(x.add(&Complex::ZERO), x);
        }

        #[test]
        fn divide_by_self_is_one(x in complex()) {
            prop_assume!(x.norm_sqr() > 1e-6);
            let q = x.divide(&x).unwrap();
            prop_assert!(q.approx_eq(&Complex::ONE, 1e-9));
        }
    }
}
