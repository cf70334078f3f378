//! Formatter seam and the default line formatter.
//!
//! Provides the [`AttoFormatter`] trait so callers can swap in their own line
//! templating, plus [`LineFormatter`], which renders the writer's standard
//! layout. Each writer owns its formatter instance; there is no process-wide
//! formatter state.

use crate::log_record::AttoLogRecord;

/// Trait for formatting log records into strings.
///
/// Implementors must be thread-safe (`Send + Sync`) so formatters can be
/// shared with the writer's serialized append path.
pub trait AttoFormatter: Send + Sync {
    /// Format a log record into a string representation.
    fn format(&self, record: &AttoLogRecord) -> String;
}

/// Default formatter producing `<timestamp> [<tag>-<level>]:<message>` lines.
///
/// The `<tag>-` segment is omitted when the record carries no tag. Error text
/// and stack-trace text, when present, follow on their own lines.
///
/// The timestamp pattern uses chrono's `strftime` syntax and must be valid;
/// the writer builder validates the pattern before a `LineFormatter` is
/// constructed from configuration.
#[derive(Clone, Debug)]
pub struct LineFormatter {
    log_date_format: String,
}

impl LineFormatter {
    pub fn new(log_date_format: impl Into<String>) -> Self {
        Self {
            log_date_format: log_date_format.into(),
        }
    }
}

impl AttoFormatter for LineFormatter {
    fn format(&self, record: &AttoLogRecord) -> String {
        let timestamp = record.timestamp.format(&self.log_date_format);
        let mut output = match &record.tag {
            Some(tag) => format!(
                "{timestamp} [{tag}-{level}]:{message}",
                level = record.level,
                message = record.message
            ),
            None => format!(
                "{timestamp} [{level}]:{message}",
                level = record.level,
                message = record.message
            ),
        };

        if let Some(error) = &record.error {
            output.push('\n');
            output.push_str(error);
        }

        if let Some(stack) = &record.stack_trace {
            output.push('\n');
            output.push_str(stack);
        }

        output
    }
}

impl AttoFormatter for Box<dyn AttoFormatter> {
    fn format(&self, record: &AttoLogRecord) -> String {
        (**self).format(record)
    }
}
