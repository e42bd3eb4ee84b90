// ============================================================================
// Binomial Square Demo
// ============================================================================

use binomial_numbers::demo;
use binomial_numbers::prelude::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::default();
    if let Err(reason) = config.validate() {
        eprintln!("invalid configuration: {}", reason);
        return ExitCode::FAILURE;
    }

    let code = match demo::run(&config, &ConsoleReportHandler) {
        Ok(summary) => {
            // Visible without a tracing subscriber
            if let Some(message) = summary.failure_message() {
                eprintln!("warning: {}", message);
                tracing::warn!(?summary, "identity did not hold");
            }
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    };

    if config.pause_on_exit {
        let mut line = String::new();
        if let Err(err) = std::io::stdin().read_line(&mut line) {
            tracing::debug!(%err, "stdin read failed");
        }
    }

    code
}
