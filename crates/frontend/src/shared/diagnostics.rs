//! Injectable diagnostic sink
//!
//! Widgets never call `console.log` directly; they record diagnostics through a
//! [`DiagnosticSink`] so that hosts can route them and tests can assert on them.

use log::Level;
use std::cell::RefCell;

pub trait DiagnosticSink {
    fn record(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.record(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }
}

/// Forwards diagnostics to the `log` facade (browser console via `console_log`).
#[derive(Debug, Clone, Copy)]
pub struct LogSink {
    target: &'static str,
}

impl LogSink {
    pub const fn new(target: &'static str) -> Self {
        Self { target }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new("frontend")
    }
}

impl DiagnosticSink for LogSink {
    fn record(&self, level: Level, message: &str) {
        log::log!(target: self.target, level, "{}", message);
    }
}

/// Keeps every entry in memory. Used by tests and by hosts that ship client
/// logs elsewhere.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: RefCell<Vec<(Level, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.borrow().clone()
    }

    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, level: Level, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}
