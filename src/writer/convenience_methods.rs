//! Convenience logging methods for the writer.
//!
//! These wrap [`AttoFileWriter::append`] with a fixed level so call sites can
//! stay terse. Records needing a tag, error text, or stack trace go through
//! `append` with an explicitly built [`AttoLogRecord`].

use std::fmt;

use super::{AttoFileWriter, WriterError};
use crate::{level::AttoLevel, log_record::AttoLogRecord};

impl AttoFileWriter {
    /// Append a message at VERBOSE level.
    pub fn verbose(&self, message: &str) -> Result<(), WriterError> {
        self.append(AttoLogRecord::new(AttoLevel::Verbose, message))
    }

    /// Append a message at DEBUG level.
    pub fn debug(&self, message: &str) -> Result<(), WriterError> {
        self.append(AttoLogRecord::new(AttoLevel::Debug, message))
    }

    /// Append a message at INFO level.
    pub fn info(&self, message: &str) -> Result<(), WriterError> {
        self.append(AttoLogRecord::new(AttoLevel::Info, message))
    }

    /// Append a message at WARNING level.
    pub fn warning(&self, message: &str) -> Result<(), WriterError> {
        self.append(AttoLogRecord::new(AttoLevel::Warning, message))
    }

    /// Append a message at ERROR level.
    pub fn error(&self, message: &str) -> Result<(), WriterError> {
        self.append(AttoLogRecord::new(AttoLevel::Error, message))
    }

    /// Append a message at ERROR level together with an error value's text.
    pub fn error_with(
        &self,
        message: &str,
        error: impl fmt::Display,
    ) -> Result<(), WriterError> {
        self.append(AttoLogRecord::new(AttoLevel::Error, message).with_error(error))
    }
}
