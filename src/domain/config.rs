// ============================================================================
// Demo Configuration
// Settings for the binomial-square demo binary
// ============================================================================

/// Default absolute tolerance when comparing floating-point results
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Configuration for a demo run
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Block on a single line from stdin before exiting.
    /// Defaults to the `pause-on-exit` cargo feature.
    pub pause_on_exit: bool,

    /// Absolute per-component tolerance used to decide whether the
    /// complex identity holds
    pub tolerance: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            pause_on_exit: cfg!(feature = "pause-on-exit"),
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl DemoConfig {
    /// Builder method: Wait for a line on stdin before exiting
    pub fn with_pause_on_exit(mut self, pause: bool) -> Self {
        self.pause_on_exit = pause;
        self
    }

    /// Builder method: Set comparison tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.tolerance.is_finite() {
            return Err("Tolerance must be finite".to_string());
        }

        if self.tolerance < 0.0 {
            return Err("Tolerance cannot be negative".to_string());
        }

        Ok(())
    }
}
