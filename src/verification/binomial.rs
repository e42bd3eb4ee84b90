// ============================================================================
// Binomial Square Verification
// Computes both sides of (a+b)^2 = a^2 + 2ab + b^2 for any Arithmetic type
// ============================================================================

use crate::interfaces::{Arithmetic, ReportHandler};
use arrayvec::ArrayVec;
use std::fmt;

/// Number of lines in a rendered report (header plus six values)
pub const REPORT_LINES: usize = 7;

/// Every intermediate value of one binomial-square evaluation.
///
/// `lhs` is `(a+b)·(a+b)`; `rhs` is `(a² + 2ab) + b²`, with `2ab` computed
/// as `ab + ab` so only the four capability operations are used.
#[derive(Debug, Clone, PartialEq)]
pub struct BinomialSquare<T> {
    a: T,
    b: T,
    sum: T,
    lhs: T,
    a_squared: T,
    b_squared: T,
    two_ab: T,
    rhs: T,
}

impl<T: Arithmetic> BinomialSquare<T> {
    /// Evaluate both sides of the identity for `a` and `b`.
    pub fn compute(a: T, b: T) -> Self {
        let sum = a.add(&b);
        let lhs = sum.multiply(&sum);

        let a_squared = a.multiply(&a);
        let b_squared = b.multiply(&b);
        let two_ab = a.multiply(&b).add(&a.multiply(&b));

        let rhs = a_squared.add(&two_ab).add(&b_squared);

        Self {
            a,
            b,
            sum,
            lhs,
            a_squared,
            b_squared,
            two_ab,
            rhs,
        }
    }
}

impl<T> BinomialSquare<T> {
    pub fn a(&self) -> &T {
        &self.a
    }

    pub fn b(&self) -> &T {
        &self.b
    }

    /// `a + b`
    pub fn sum(&self) -> &T {
        &self.sum
    }

    /// `(a + b)^2`
    pub fn lhs(&self) -> &T {
        &self.lhs
    }

    pub fn a_squared(&self) -> &T {
        &self.a_squared
    }

    pub fn b_squared(&self) -> &T {
        &self.b_squared
    }

    pub fn two_ab(&self) -> &T {
        &self.two_ab
    }

    /// `a^2 + 2ab + b^2`
    pub fn rhs(&self) -> &T {
        &self.rhs
    }

    /// Compare the two sides with a caller-supplied predicate.
    pub fn holds_by<F>(&self, eq: F) -> bool
    where
        F: FnOnce(&T, &T) -> bool,
    {
        eq(&self.lhs, &self.rhs)
    }
}

impl<T: PartialEq> BinomialSquare<T> {
    /// Both sides are exactly equal.
    pub fn holds_exactly(&self) -> bool {
        self.lhs == self.rhs
    }
}

impl<T: fmt::Display> BinomialSquare<T> {
    /// The report, one entry per output line.
    pub fn lines(&self) -> ArrayVec<String, REPORT_LINES> {
        let mut lines = ArrayVec::new();
        lines.push(format!(
            "=== Testing (a+b)^2 = a^2 + 2ab + b^2 with a = {}, b = {} ===",
            self.a, self.b
        ));
        lines.push(format!("(a + b) = {}", self.sum));
        lines.push(format!("(a+b)^2 = {}", self.lhs));
        lines.push(format!("a^2 = {}", self.a_squared));
        lines.push(format!("b^2 = {}", self.b_squared));
        lines.push(format!("2ab = {}", self.two_ab));
        lines.push(format!("a^2 + 2ab + b^2 = {}", self.rhs));
        lines
    }
}

impl<T: fmt::Display> fmt::Display for BinomialSquare<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Evaluate the identity for `a` and `b` and send the report to `handler`.
///
/// The returned report lets callers decide how to compare the two sides:
/// exactly for exact types, within a tolerance for floating ones.
pub fn verify_binomial_square<T>(a: T, b: T, handler: &dyn ReportHandler) -> BinomialSquare<T>
where
    T: Arithmetic + fmt::Display,
{
    let report = BinomialSquare::compute(a, b);

    tracing::debug!(
        a = %report.a,
        b = %report.b,
        lhs = %report.lhs,
        rhs = %report.rhs,
        "binomial square evaluated"
    );

    handler.on_lines(&report.lines());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{CollectingReportHandler, NoOpReportHandler};
    use crate::numeric::{Complex, Rational};

    #[test]
    fn test_rational_identity_is_exact() {
        let a = Rational::new(1, 3).unwrap();
        let b = Rational::new(1, 6).unwrap();
        let report = BinomialSquare::compute(a, b);

        assert_eq!(report.sum().to_string(), "1/2");
        assert_eq!(report.lhs().to_string(), "1/4");
        assert_eq!(report.rhs().to_string(), "1/4");
        assert_eq!(report.a_squared().to_string(), "1/9");
        assert_eq!(report.b_squared().to_string(), "1/36");
        assert_eq!(report.two_ab().to_string(), "1/9");
        assert!(report.holds_exactly());
    }

    #[test]
    fn test_complex_identity_within_tolerance() {
        let a = Complex::new(1.0, 3.0);
        let b = Complex::new(1.0, 6.0);
        let report = BinomialSquare::compute(a, b);

        assert_eq!(*report.sum(), Complex::new(2.0, 9.0));
        assert_eq!(*report.lhs(), Complex::new(-77.0, 36.0));
        assert!(report.holds_by(|l, r| l.approx_eq(r, 1e-9)));
    }

    #[test]
    fn test_report_lines() {
        let a = Rational::new(1, 3).unwrap();
        let b = Rational::new(1, 6).unwrap();
        let report = BinomialSquare::compute(a, b);
        let lines = report.lines();

        assert_eq!(lines.len(), REPORT_LINES);
        assert_eq!(
            lines[0],
            "=== Testing (a+b)^2 = a^2 + 2ab + b^2 with a = 1/3, b = 1/6 ==="
        );
        assert_eq!(lines[1], "(a + b) = 1/2");
        assert_eq!(lines[2], "(a+b)^2 = 1/4");
        assert_eq!(lines[3], "a^2 = 1/9");
        assert_eq!(lines[4], "b^2 = 1/36");
        assert_eq!(lines[5], "2ab = 1/9");
        assert_eq!(lines[6], "a^2 + 2ab + b^2 = 1/4");
    }

    #[test]
    fn test_display_joins_lines() {
        let report = BinomialSquare::compute(Complex::new(1.0, 3.0), Complex::new(1.0, 6.0));
        let text = report.to_string();

        assert_eq!(text.lines().count(), REPORT_LINES);
        assert!(text.starts_with("=== Testing (a+b)^2 = a^2 + 2ab + b^2 with a = 1 + 3i, b = 1 + 6i ==="));
        assert!(text.contains("(a+b)^2 = -77 + 36i"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_verify_sends_lines_to_handler() {
        let handler = CollectingReportHandler::new();
        let report = verify_binomial_square(
            Rational::new(2, 5).unwrap(),
            Rational::new(-1, 5).unwrap(),
            &handler,
        );

        let lines = handler.lines();
        assert_eq!(lines.len(), REPORT_LINES);
        assert_eq!(lines[1], "(a + b) = 1/5");
        assert_eq!(lines[6], "a^2 + 2ab + b^2 = 1/25");
        assert!(report.holds_exactly());
    }

    #[test]
    fn test_verify_with_noop_handler() {
        let report = verify_binomial_square(
            Complex::new(0.5, -1.5),
            Complex::new(2.0, 0.25),
            &NoOpReportHandler,
        );
        assert!(report.holds_by(|l, r| l.approx_eq(r, 1e-9)));
    }

    #[test]
    fn test_operands_are_kept() {
        let report = BinomialSquare::compute(Complex::ONE, Complex::I);
        assert_eq!(*report.a(), Complex::ONE);
        assert_eq!(*report.b(), Complex::I);
        // (1 + i)^2 = 2i
        assert_eq!(*report.lhs(), Complex::new(0.0, 2.0));
    }
}
