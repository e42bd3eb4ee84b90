// ============================================================================
// Domain Module
// Run-time settings for the verification demo
// ============================================================================

pub mod config;

pub use config::DemoConfig;
