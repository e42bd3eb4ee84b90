// ============================================================================
// Rational
// Exact fractions over arbitrary-precision integers, always in lowest terms
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::interfaces::Arithmetic;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// Exact rational number `numer / denom`.
///
/// # Invariants
/// Every value is normalized on construction, including the results of
/// arithmetic:
/// - `denom > 0` (the sign lives in the numerator)
/// - `gcd(|numer|, denom) == 1`
/// - zero is always `0/1`
///
/// Because the representation is canonical, the derived `PartialEq`/`Hash`
/// coincide with numeric equality.
///
/// # Example
/// ```
/// use binomial_numbers::interfaces::Arithmetic;
/// use binomial_numbers::numeric::Rational;
///
/// let third = Rational::new(1, 3)?;
/// let sixth = Rational::new(1, 6)?;
/// assert_eq!(third.add(&sixth).to_string(), "1/2");
/// assert_eq!(Rational::new(4, -8)?.to_string(), "-1/2");
/// # Ok::<(), binomial_numbers::numeric::NumericError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a rational from a numerator and denominator, reducing it to
    /// lowest terms.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `denom` is zero.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> NumericResult<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::normalized(numer.into(), denom))
    }

    /// Create the whole number `value/1`.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numer: value.into(),
            denom: BigInt::one(),
        }
    }

    /// Additive identity, `0/1`.
    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    /// Multiplicative identity, `1/1`.
    pub fn one() -> Self {
        Self::from_integer(1)
    }

    /// Reduce by the gcd, then move the sign into the numerator.
    ///
    /// Callers guarantee `denom != 0`. With `numer == 0` the gcd is `|denom|`,
    /// which yields the canonical `0/1`.
    fn normalized(numer: BigInt, denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero(), "normalized() called with zero denominator");

        let g = numer.gcd(&denom);
        let mut numer = numer / &g;
        let mut denom = denom / &g;

        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }

        Self { numer, denom }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Numerator of the reduced fraction (carries the sign).
    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Denominator of the reduced fraction (always positive).
    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl Arithmetic for Rational {
    fn add(&self, rhs: &Self) -> Self {
        Self::normalized(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }

    fn subtract(&self, rhs: &Self) -> Self {
        Self::normalized(
            &self.numer * &rhs.denom - &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }

    fn multiply(&self, rhs: &Self) -> Self {
        Self::normalized(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }

    /// Any fraction with a zero numerator is zero, whatever its denominator,
    /// so the check is on `rhs.numer`. A negative `rhs` produces a negative
    /// intermediate denominator, which normalization flips back.
    fn divide(&self, rhs: &Self) -> NumericResult<Self> {
        if rhs.numer.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::normalized(
            &self.numer * &rhs.denom,
            &self.denom * &rhs.numer,
        ))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

// ============================================================================
// Tests
// ============================================================================
