// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod arithmetic;
mod report_handler;

pub use arithmetic::Arithmetic;
pub use report_handler::{
    CollectingReportHandler, ConsoleReportHandler, LoggingReportHandler, NoOpReportHandler,
    ReportHandler,
};
