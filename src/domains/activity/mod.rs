//! Activity logging.
//!
//! Loggers are append-only sinks: nothing written can be read back through
//! this interface, and a failed write never reaches the caller.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::info;

use crate::core::ActivityLogEntry;

pub trait ActivityLog: Send + Sync {
    /// Record `message`, stamped with the current time.
    fn log(&self, message: &str);
}

impl<T: ActivityLog + ?Sized> ActivityLog for Arc<T> {
    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

/// Writes one `[<timestamp>] <message>` line per call.
pub struct ConsoleLogger<W = io::Stdout> {
    out: Mutex<W>,
}

impl ConsoleLogger<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsoleLogger<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> ConsoleLogger<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W: Write + Send> ActivityLog for ConsoleLogger<W> {
    fn log(&self, message: &str) {
        let entry = ActivityLogEntry::now(message);
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        // Write failures are dropped.
        let _ = writeln!(out, "{entry}").and_then(|()| out.flush());
    }
}

/// Emits each entry as a `tracing` event at INFO under target `activity`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ActivityLog for TracingLogger {
    fn log(&self, message: &str) {
        let entry = ActivityLogEntry::now(message);
        info!(target: "activity", "{entry}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_console_logger_writes_one_line_per_call() {
        let logger = ConsoleLogger::new(Vec::new());
        logger.log("saved");
        logger.log("save failed: storage error");

        let output = String::from_utf8(logger.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] saved"));
        assert!(lines[1].ends_with("] save failed: storage error"));
    }

    #[test]
    fn test_console_logger_timestamp_is_iso8601_utc() {
        let logger = ConsoleLogger::new(Vec::new());
        logger.log("saved");

        let output = String::from_utf8(logger.into_inner()).unwrap();
        let stamp = output
            .strip_prefix('[')
            .and_then(|rest| rest.split(']').next())
            .unwrap();
        assert!(stamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_tracing_logger_emits_info_under_activity_target() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_target(true)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || TracingLogger.log("saved"));

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("INFO"), "{output}");
        assert!(output.contains("activity"), "{output}");
        assert!(output.contains("] saved"), "{output}");
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_console_logger_ignores_write_failures() {
        let logger = ConsoleLogger::new(BrokenPipe);
        logger.log("saved");
    }
}
