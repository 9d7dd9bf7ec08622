use super::severity::Severity;
use std::borrow::Cow;
use std::error::Error;
use std::sync::Arc;

/// Shared handle to a record's error cause.
///
/// Shared rather than owned so capturing nodes can clone records cheaply
/// while the chain itself only ever passes references.
pub type SharedCause = Arc<dyn Error + Send + Sync + 'static>;

/// A log record traveling down a chain.
///
/// Transient value: built by the caller, borrowed by every node in turn,
/// never stored by the forwarding path itself.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub severity: Severity,
    pub tag: Option<String>,
    pub message: String,
    pub cause: Option<SharedCause>,
}

impl LogRecord {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            tag: None,
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    pub fn with_shared_cause(mut self, cause: SharedCause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// The message with the rendered cause chain appended, or the message
    /// alone when no cause is attached.
    pub fn effective_message(&self) -> Cow<'_, str> {
        match &self.cause {
            Some(cause) => {
                Cow::Owned(format!("{}\n{}", self.message, render_cause(cause.as_ref())))
            }
            None => Cow::Borrowed(&self.message),
        }
    }
}

/// Render an error and its `source()` chain into a multi-line string.
pub fn render_cause(err: &(dyn Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str("\nCaused by: ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Error, Debug)]
    #[error("connection reset")]
    struct Inner;

    #[derive(Error, Debug)]
    #[error("request failed")]
    struct Outer(#[source] Inner);

    #[test]
    fn test_record_builder() {
        let record = LogRecord::new(Severity::Warn, "slow response").with_tag("Net");
        assert_eq!(record.severity, Severity::Warn);
        assert_eq!(record.tag.as_deref(), Some("Net"));
        assert_eq!(record.message, "slow response");
        assert!(record.cause.is_none());
    }

    #[test]
    fn test_effective_message_without_cause_borrows() {
        let record = LogRecord::new(Severity::Info, "connected");
        assert!(matches!(record.effective_message(), Cow::Borrowed("connected")));
    }

    #[test]
    fn test_effective_message_appends_cause_chain() {
        let record = LogRecord::new(Severity::Error, "failed").with_cause(Outer(Inner));
        let effective = record.effective_message();
        assert_eq!(
            effective.as_ref(),
            "failed\nrequest failed\nCaused by: connection reset"
        );
    }

    #[test]
    fn test_render_cause_walks_source_chain() {
        let rendered = render_cause(&Outer(Inner));
        assert_eq!(rendered, "request failed\nCaused by: connection reset");
    }

    #[test]
    fn test_record_clone_shares_cause() {
        let record = LogRecord::new(Severity::Error, "failed").with_cause(Inner);
        let copy = record.clone();
        let (a, b) = (record.cause.unwrap(), copy.cause.unwrap());
        assert!(Arc::ptr_eq(&a, &b));
    }
}
