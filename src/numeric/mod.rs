// ============================================================================
// Numeric Module
// Concrete number types implementing the generic arithmetic capability
// ============================================================================
//
// This module provides:
// - Rational: exact fraction over arbitrary-precision integers
// - Complex: double-precision complex number
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - Values are immutable; every operation returns a new value
// - Division returns Result (no panics, no sentinel values)
// - Rationals are always stored in lowest terms with a positive denominator

mod complex;
mod errors;
mod rational;

pub use complex::Complex;
pub use errors::{NumericError, NumericResult};
pub use rational::Rational;
