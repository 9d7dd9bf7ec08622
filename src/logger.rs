//! Front door to a logging chain.
//!
//! A `Logger` holds the head node of an externally wired chain. The head is
//! set once at wiring time; emitting with no head installed is a no-op, not
//! an error.

use crate::domain::{LogRecord, Severity, SharedCause};
use crate::sink::SharedSink;
use parking_lot::RwLock;

/// Process-wide facade, for applications that want a single ambient chain.
/// Library users that need isolation construct their own `Logger`.
pub static LOG: Logger = Logger::new();

#[derive(Default)]
pub struct Logger {
    head: RwLock<Option<SharedSink>>,
}

impl Logger {
    pub const fn new() -> Self {
        Self {
            head: RwLock::new(None),
        }
    }

    /// Install the head node of the chain.
    pub fn set_head(&self, head: SharedSink) {
        *self.head.write() = Some(head);
    }

    pub fn clear_head(&self) {
        *self.head.write() = None;
    }

    pub fn head(&self) -> Option<SharedSink> {
        self.head.read().clone()
    }

    /// Hand a record to the head of the chain, if one is installed.
    pub fn log(&self, record: &LogRecord) {
        let head = self.head.read().clone();
        if let Some(head) = head {
            head.emit(record);
        }
    }

    pub fn emit(&self, severity: Severity, tag: Option<&str>, message: &str) {
        let mut record = LogRecord::new(severity, message);
        if let Some(tag) = tag {
            record = record.with_tag(tag);
        }
        self.log(&record);
    }

    pub fn emit_with_cause(
        &self,
        severity: Severity,
        tag: Option<&str>,
        message: &str,
        cause: SharedCause,
    ) {
        let mut record = LogRecord::new(severity, message).with_shared_cause(cause);
        if let Some(tag) = tag {
            record = record.with_tag(tag);
        }
        self.log(&record);
    }

    pub fn verbose(&self, tag: &str, message: &str) {
        self.emit(Severity::Verbose, Some(tag), message);
    }

    pub fn debug(&self, tag: &str, message: &str) {
        self.emit(Severity::Debug, Some(tag), message);
    }

    pub fn info(&self, tag: &str, message: &str) {
        self.emit(Severity::Info, Some(tag), message);
    }

    pub fn warn(&self, tag: &str, message: &str) {
        self.emit(Severity::Warn, Some(tag), message);
    }

    pub fn error(&self, tag: &str, message: &str) {
        self.emit(Severity::Error, Some(tag), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use std::sync::Arc;
    use thiserror::Error;

    #[derive(Error, Debug)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn test_no_head_is_a_noop() {
        let logger = Logger::new();
        logger.info("Net", "nobody listening");
    }

    #[test]
    fn test_helpers_route_with_severity_and_tag() {
        let tail = Arc::new(MemorySink::new());
        let logger = Logger::new();
        logger.set_head(tail.clone());

        logger.verbose("A", "v");
        logger.debug("B", "d");
        logger.info("C", "i");
        logger.warn("D", "w");
        logger.error("E", "e");

        let records = tail.records();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].severity, Severity::Verbose);
        assert_eq!(records[4].severity, Severity::Error);
        assert_eq!(records[2].tag.as_deref(), Some("C"));
        assert_eq!(records[3].message, "w");
    }

    #[test]
    fn test_emit_with_cause_attaches_cause() {
        let tail = Arc::new(MemorySink::new());
        let logger = Logger::new();
        logger.set_head(tail.clone());

        logger.emit_with_cause(Severity::Error, Some("IO"), "failed", Arc::new(Boom));
        let records = tail.records();
        assert_eq!(records[0].cause.as_ref().unwrap().to_string(), "boom");
    }

    #[test]
    fn test_clear_head_stops_routing() {
        let tail = Arc::new(MemorySink::new());
        let logger = Logger::new();
        logger.set_head(tail.clone());
        logger.info("Net", "seen");
        logger.clear_head();
        logger.info("Net", "unseen");
        assert_eq!(tail.len(), 1);
    }
}
