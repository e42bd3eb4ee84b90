// ============================================================================
// Arithmetic Interface
// Defines the contract every number-like type must satisfy
// ============================================================================

use crate::numeric::NumericResult;

/// The four field operations shared by every number type in this crate.
///
/// The trait is self-referential: operands and results are always the
/// implementing type, so generic code written against `T: Arithmetic`
/// never needs to know which concrete number it is working with.
///
/// Operands are borrowed, so an implementation cannot mutate them; each
/// call returns a freshly constructed value.
pub trait Arithmetic: Sized {
    /// Sum of `self` and `rhs`.
    fn add(&self, rhs: &Self) -> Self;

    /// Difference `self - rhs`.
    fn subtract(&self, rhs: &Self) -> Self;

    /// Product of `self` and `rhs`.
    fn multiply(&self, rhs: &Self) -> Self;

    /// Quotient `self / rhs`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `rhs` represents zero.
    fn divide(&self, rhs: &Self) -> NumericResult<Self>;
}
