// ============================================================================
// Binomial Numbers Library
// Generic arithmetic over exact rationals and complex numbers
// ============================================================================

//! # Binomial Numbers
//!
//! A small generic-arithmetic library exercised by two number types and
//! checked against the identity `(a+b)^2 = a^2 + 2ab + b^2`.
//!
//! ## Features
//!
//! - **`Arithmetic` trait**: add, subtract, multiply and divide over a
//!   self-referential type
//! - **Exact rationals** backed by arbitrary-precision integers, always in
//!   lowest terms
//! - **Complex numbers** over `f64`
//! - **Generic verification** that works for any `Arithmetic` type
//!
//! ## Example
//!
//! ```rust
//! use binomial_numbers::prelude::*;
//!
//! let report = verify_binomial_square(
//!     Rational::new(1, 3)?,
//!     Rational::new(1, 6)?,
//!     &NoOpReportHandler,
//! );
//! assert_eq!(report.lhs().to_string(), "1/4");
//! assert!(report.holds_exactly());
//!
//! let report = BinomialSquare::compute(Complex::new(1.0, 3.0), Complex::new(1.0, 6.0));
//! assert!(report.holds_by(|l, r| l.approx_eq(r, 1e-9)));
//! # Ok::<(), NumericError>(())
//! ```

pub mod demo;
pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod verification;

// Re-exports for convenience
pub mod prelude {
    pub use crate::demo::DemoSummary;
    pub use crate::domain::DemoConfig;
    pub use crate::interfaces::{
        Arithmetic, CollectingReportHandler, ConsoleReportHandler, LoggingReportHandler,
        NoOpReportHandler, ReportHandler,
    };
    pub use crate::numeric::{Complex, NumericError, NumericResult, Rational};
    pub use crate::verification::{verify_binomial_square, BinomialSquare};
}
