use super::{LogSink, SharedSink};
use crate::domain::{LogRecord, Severity, render_cause};
use clap::ValueEnum;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::debug;

/// Where console output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Line format written by `ConsoleSink`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleFormat {
    /// `SEVERITY/tag: message` (default)
    #[default]
    Text,
    /// One JSON object per line with severity, tag, message, and cause fields
    Json,
}

/// How a record's cause is rendered on the console line.
///
/// Whatever the style, the record forwarded to the next node carries the
/// original cause; only this node's own output differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CauseStyle {
    /// Render the cause chain after the message (default)
    #[default]
    Append,
    /// Accept the cause but leave the printed line untouched
    Ignore,
}

/// The forwarding log node: writes each record to a console writer, then
/// hands the identical record to the optional next node.
///
/// Stateless aside from the `next` link. Never fails: a console write error
/// is swallowed (with a diagnostic) and never blocks forwarding.
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
    format: ConsoleFormat,
    cause_style: CauseStyle,
    next: Option<SharedSink>,
}

#[derive(Serialize)]
struct ConsoleLine<'a> {
    severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<&'a str>,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cause: Option<String>,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    pub fn stderr() -> Self {
        Self::with_writer(Box::new(io::stderr()))
    }

    pub fn for_target(target: ConsoleTarget) -> Self {
        match target {
            ConsoleTarget::Stdout => Self::stdout(),
            ConsoleTarget::Stderr => Self::stderr(),
        }
    }

    /// Build a sink over an arbitrary writer. Test code injects a shared
    /// buffer here; production code goes through `stdout`/`stderr`.
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
            format: ConsoleFormat::default(),
            cause_style: CauseStyle::default(),
            next: None,
        }
    }

    pub fn format(mut self, format: ConsoleFormat) -> Self {
        self.format = format;
        self
    }

    pub fn cause_style(mut self, style: CauseStyle) -> Self {
        self.cause_style = style;
        self
    }

    pub fn with_next(mut self, next: SharedSink) -> Self {
        self.next = Some(next);
        self
    }

    pub fn set_next(&mut self, next: Option<SharedSink>) {
        self.next = next;
    }

    fn render(&self, record: &LogRecord) -> String {
        let rendered_cause = match (self.cause_style, &record.cause) {
            (CauseStyle::Append, Some(cause)) => Some(render_cause(cause.as_ref())),
            _ => None,
        };

        match self.format {
            ConsoleFormat::Text => {
                let mut line = match &record.tag {
                    Some(tag) => format!("{}/{}: {}", record.severity, tag, record.message),
                    None => format!("{}: {}", record.severity, record.message),
                };
                if let Some(cause) = rendered_cause {
                    line.push('\n');
                    line.push_str(&cause);
                }
                line
            }
            ConsoleFormat::Json => {
                let line = ConsoleLine {
                    severity: record.severity,
                    tag: record.tag.as_deref(),
                    message: &record.message,
                    cause: rendered_cause,
                };
                serde_json::to_string(&line).unwrap_or_else(|e| {
                    debug!("console line serialization failed: {e}");
                    format!("{}: {}", record.severity, record.message)
                })
            }
        }
    }
}

impl LogSink for ConsoleSink {
    fn emit(&self, record: &LogRecord) {
        let line = self.render(record);
        {
            let mut writer = self.writer.lock();
            if let Err(e) = writeln!(writer, "{line}") {
                debug!("console write failed: {e}");
            }
        }

        // Forward the original record, not the rendered line.
        if let Some(next) = &self.next {
            next.emit(record);
        }
    }
}
