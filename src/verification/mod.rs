// ============================================================================
// Verification Module
// Generic checks of algebraic identities over any Arithmetic type
// ============================================================================

mod binomial;

pub use binomial::{verify_binomial_square, BinomialSquare, REPORT_LINES};
