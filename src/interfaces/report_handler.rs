// ============================================================================
// Report Handler Interface
// Defines where rendered verification lines are delivered
// ============================================================================

use parking_lot::Mutex;
use std::io::{self, Write};

/// Sink for the text lines produced by a verification run.
/// Implementations can print, log, collect, or discard them.
pub trait ReportHandler: Send + Sync {
    /// Handle a single rendered line
    fn on_line(&self, line: &str);

    /// Batch line handler (optional optimization)
    fn on_lines(&self, lines: &[String]) {
        for line in lines {
            self.on_line(line);
        }
    }
}

/// No-op handler for tests and benchmarks
pub struct NoOpReportHandler;

impl ReportHandler for NoOpReportHandler {
    fn on_line(&self, _line: &str) {
        // Do nothing
    }
}

/// Writes every line to standard output
pub struct ConsoleReportHandler;

impl ConsoleReportHandler {
    /// Write `lines` to `out`, stopping at the first failed write.
    fn write_lines<W, I, S>(out: &mut W, lines: I) -> io::Result<()>
    where
        W: Write,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            writeln!(out, "{}", line.as_ref())?;
        }
        Ok(())
    }

    fn emit<I, S>(lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // One lock for the whole report keeps its lines together
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(err) = Self::write_lines(&mut out, lines) {
            tracing::warn!(%err, "stdout closed, dropping remaining report lines");
        }
    }
}

impl ReportHandler for ConsoleReportHandler {
    fn on_line(&self, line: &str) {
        Self::emit([line]);
    }

    fn on_lines(&self, lines: &[String]) {
        Self::emit(lines);
    }
}

/// Logging handler
pub struct LoggingReportHandler;

impl ReportHandler for LoggingReportHandler {
    fn on_line(&self, line: &str) {
        tracing::info!("{}", line);
    }
}

/// Keeps every line in memory, in arrival order
#[derive(Default)]
pub struct CollectingReportHandler {
    lines: Mutex<Vec<String>>,
}

impl CollectingReportHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines received so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl ReportHandler for CollectingReportHandler {
    fn on_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpReportHandler;
        handler.on_line("=== header ===");
        handler.on_lines(&["a".to_string(), "b".to_string()]);
        // Should not panic
    }

    #[test]
    fn test_collecting_handler_keeps_order() {
        let handler = CollectingReportHandler::new();
        handler.on_line("first");
        handler.on_lines(&["second".to_string(), "third".to_string()]);

        assert_eq!(handler.lines(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_collecting_handler_shared_across_threads() {
        let handler = CollectingReportHandler::new();

        std::thread::scope(|scope| {
            for t in 0..4 {
                let handler = &handler;
                scope.spawn(move || {
                    for i in 0..25 {
                        handler.on_line(&format!("{}-{}", t, i));
                    }
                });
            }
        });

        let lines = handler.lines();
        assert_eq!(lines.len(), 100);
        // Per-thread order survives interleaving
        for t in 0..4 {
            let own: Vec<_> = lines
                .iter()
                .filter(|l| l.starts_with(&format!("{}-", t)))
                .cloned()
                .collect();
            let expected: Vec<_> = (0..25).map(|i| format!("{}-{}", t, i)).collect();
            assert_eq!(own, expected);
        }
    }

    // Writer whose sink has gone away, like a closed stdout pipe
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_console_writes_one_line_each() {
        let mut out = Vec::new();
        ConsoleReportHandler::write_lines(&mut out, ["a^2 = 1/9", "b^2 = 1/36"]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a^2 = 1/9\nb^2 = 1/36\n");
    }

    #[test]
    fn test_console_closed_output_is_an_error_not_a_panic() {
        let result = ConsoleReportHandler::write_lines(&mut ClosedPipe, ["(a + b) = 1/2"]);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_handlers_are_object_safe() {
        let handlers: Vec<Box<dyn ReportHandler>> = vec![
            Box::new(NoOpReportHandler),
            Box::new(LoggingReportHandler),
            Box::new(CollectingReportHandler::new()),
        ];
        for handler in &handlers {
            handler.on_line("line");
        }
    }
}
