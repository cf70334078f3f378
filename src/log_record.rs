//! Log record representation for the attologging writer.
//!
//! `AttoLogRecord` captures a log event together with its creation timestamp
//! and optional context (tag, error text, stack trace). Records are produced
//! by the caller and consumed immediately by one append call; they are never
//! persisted as objects.

use chrono::{DateTime, Local};
use std::fmt;

use crate::level::AttoLevel;

#[derive(Clone, Debug)]
pub struct AttoLogRecord {
    /// Severity of the record.
    pub level: AttoLevel,
    /// The log message content.
    pub message: String,
    /// Optional tag rendered ahead of the level token.
    pub tag: Option<String>,
    /// Optional text representation of an associated error value.
    pub error: Option<String>,
    /// Optional stack-trace text.
    pub stack_trace: Option<String>,
    /// Time the record was created.
    pub timestamp: DateTime<Local>,
}

impl AttoLogRecord {
    /// Construct a new record from `level` and `message`, timestamped now.
    pub fn new(level: AttoLevel, message: &str) -> Self {
        Self {
            level,
            message: message.to_owned(),
            tag: None,
            error: None,
            stack_trace: None,
            timestamp: Local::now(),
        }
    }

    /// Attach a tag to the record.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Attach the text representation of an error value.
    pub fn with_error(mut self, error: impl fmt::Display) -> Self {
        self.error = Some(error.to_string());
        self
    }

    /// Attach stack-trace text.
    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    /// Override the creation timestamp. Rotation decisions derive the calendar
    /// day from this value, so tests use it to simulate day boundaries.
    #[cfg(test)]
    pub(crate) fn at(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

impl fmt::Display for AttoLogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.level, self.message)
    }
}
