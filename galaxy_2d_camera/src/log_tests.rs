//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger and the global logger slot.
//!
//! The logger slot is process-wide: tests that swap it are marked #[serial].

use crate::log::{self, Logger, LogEntry, LogSeverity, DefaultLogger};
use super::format_entry;
use colored::Colorize;
use serial_test::serial;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Logger that records "Severity: [source] message" lines for test sources only.
///
/// Camera tests running in parallel log under "galaxy2d::Camera2D"; they are
/// filtered out so assertions only see what the test itself emitted.
struct CaptureLogger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.source != "galaxy2d::test" {
            return;
        }
        let location = match (entry.file, entry.line) {
            (Some(_), Some(line)) => format!(" @{}", line),
            _ => String::new(),
        };
        self.entries
            .lock()
            .unwrap()
            .push(format!("{:?}: [{}] {}{}", entry.severity, entry.source, entry.message, location));
    }
}

fn install_capture() -> Arc<Mutex<Vec<String>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    log::set_logger(CaptureLogger { entries: Arc::clone(&entries) });
    entries
}

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "galaxy2d::Camera2D".to_string(),
        message: "viewport resized".to_string(),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_labels_are_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.label().len(), 5);
    }
    assert_eq!(LogSeverity::Info.label(), "INFO ");
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_format_entry_without_location() {
    let line = format_entry(&entry(LogSeverity::Info, None, None), LogSeverity::Info.label(), "galaxy2d::Camera2D");
    assert!(line.contains("[INFO ] [galaxy2d::Camera2D] viewport resized"));
    assert!(!line.ends_with(')'));
}

#[test]
fn test_format_entry_with_location() {
    let line = format_entry(&entry(LogSeverity::Error, Some("camera_2d.rs"), Some(42)), "ERROR", "src");
    assert!(line.contains("[ERROR] [src]"));
    assert!(line.ends_with("viewport resized (camera_2d.rs:42)"));
}

#[test]
fn test_format_entry_keeps_colored_fields() {
    colored::control::set_override(true);
    let line = format_entry(&entry(LogSeverity::Warn, None, None), "WARN ".yellow(), "galaxy2d::Camera2D".bright_blue());
    colored::control::unset_override();

    assert!(line.contains("\u{1b}["));
    assert!(line.ends_with("viewport resized"));
}

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        // Just verify neither branch panics
        logger.log(&entry(severity, None, None));
        logger.log(&entry(severity, Some("test.rs"), Some(7)));
    }
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
    assert_send_sync::<CaptureLogger>();
}

// ============================================================================
// GLOBAL LOGGER TESTS
// ============================================================================

#[test]
#[serial]
fn test_set_logger_routes_macros() {
    let entries = install_capture();

    crate::camera_info!("galaxy2d::test", "zoom set to {}", 2.5);
    crate::camera_warn!("galaxy2d::test", "empty bounds");

    let captured = entries.lock().unwrap().clone();
    log::reset_logger();

    assert_eq!(captured, vec![
        "Info: [galaxy2d::test] zoom set to 2.5".to_string(),
        "Warn: [galaxy2d::test] empty bounds".to_string(),
    ]);
}

#[test]
#[serial]
fn test_error_macro_carries_location() {
    let entries = install_capture();

    crate::camera_error!("galaxy2d::test", "far == near");

    let captured = entries.lock().unwrap().clone();
    log::reset_logger();

    assert_eq!(captured.len(), 1);
    assert!(captured[0].starts_with("Error: [galaxy2d::test] far == near @"));
}

#[test]
#[serial]
fn test_reset_logger_detaches_custom_logger() {
    let entries = install_capture();
    log::reset_logger();

    crate::camera_debug!("galaxy2d::test", "goes to stdout");
    crate::camera_trace!("galaxy2d::test", "also stdout");

    assert!(entries.lock().unwrap().is_empty());
}
