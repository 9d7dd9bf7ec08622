use super::{LogSink, SharedSink};
use crate::domain::{LogRecord, Severity};

/// Pass-through node that reduces records to their message text.
///
/// Prints nothing itself: the next node receives a verbose-severity record
/// with no tag and no cause, carrying only the original message. A filter
/// with no next node drops records on the floor.
#[derive(Default)]
pub struct MessageOnlyFilter {
    next: Option<SharedSink>,
}

impl MessageOnlyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_next(mut self, next: SharedSink) -> Self {
        self.next = Some(next);
        self
    }

    pub fn set_next(&mut self, next: Option<SharedSink>) {
        self.next = next;
    }
}

impl LogSink for MessageOnlyFilter {
    fn emit(&self, record: &LogRecord) {
        if let Some(next) = &self.next {
            let reduced = LogRecord::new(Severity::Verbose, record.message.clone());
            next.emit(&reduced);
        }
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
    fn test_filter_strips_everything_but_message() {
        let tail = Arc::new(MemorySink::new());
        let filter = MessageOnlyFilter::new().with_next(tail.clone());

        filter.emit(
            &LogRecord::new(Severity::Error, "failed")
                .with_tag("IO")
                .with_cause(Boom),
        );

        let captured = tail.records();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, Severity::Verbose);
        assert_eq!(captured[0].tag, None);
        assert_eq!(captured[0].message, "failed");
        assert!(captured[0].cause.is_none());
    }

    #[test]
    fn test_terminal_filter_drops_records() {
        let filter = MessageOnlyFilter::new();
        // No next node: nothing to observe, nothing to panic.
        filter.emit(&LogRecord::new(Severity::Info, "lost"));
    }
}
