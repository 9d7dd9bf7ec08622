use super::{LogSink, SharedSink};
use crate::domain::LogRecord;
use parking_lot::Mutex;

/// Capture node: stores every received record in arrival order, then
/// forwards like any other node.
///
/// Serves as the display tail of a chain and as the observation point in
/// tests.
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
    next: Option<SharedSink>,
}

impl MemorySink {
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

    /// Snapshot of the captured records.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn emit(&self, record: &LogRecord) {
        self.records.lock().push(record.clone());
        if let Some(next) = &self.next {
            next.emit(record);
        }
    }
}
