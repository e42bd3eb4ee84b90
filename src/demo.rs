// ============================================================================
// Demo Runner
// Drives the binomial-square check over the fixed rational and complex pairs
// ============================================================================

use crate::domain::DemoConfig;
use crate::interfaces::ReportHandler;
use crate::numeric::{Complex, NumericResult, Rational};
use crate::verification::verify_binomial_square;

/// Whether each identity held in a demo run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSummary {
    /// Exact equality of both sides for 1/3 and 1/6
    pub rational_holds: bool,
    /// Both sides within `DemoConfig::tolerance` for 1+3i and 1+6i
    pub complex_holds: bool,
}

impl DemoSummary {
    pub fn all_hold(&self) -> bool {
        self.rational_holds && self.complex_holds
    }

    /// Message naming each identity that failed, `None` when both held.
    pub fn failure_message(&self) -> Option<String> {
        let failed: Vec<&str> = [
            (!self.rational_holds).then_some("rational"),
            (!self.complex_holds).then_some("complex"),
        ]
        .into_iter()
        .flatten()
        .collect();

        if failed.is_empty() {
            None
        } else {
            Some(format!("identity did not hold for: {}", failed.join(", ")))
        }
    }
}

/// Run both verifications, sending the report lines to `handler`.
///
/// # Errors
/// Propagates `DivisionByZero` from operand construction.
pub fn run(config: &DemoConfig, handler: &dyn ReportHandler) -> NumericResult<DemoSummary> {
    let rational = verify_binomial_square(Rational::new(1, 3)?, Rational::new(1, 6)?, handler);
    let rational_holds = rational.holds_exactly();
    tracing::info!(holds = rational_holds, "rational identity checked");

    let complex = verify_binomial_square(Complex::new(1.0, 3.0), Complex::new(1.0, 6.0), handler);
    let complex_holds = complex.holds_by(|lhs, rhs| lhs.approx_eq(rhs, config.tolerance));
    tracing::info!(
        holds = complex_holds,
        tolerance = config.tolerance,
        "complex identity checked"
    );

    Ok(DemoSummary {
        rational_holds,
        complex_holds,
    })
}
