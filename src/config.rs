//! Writer configuration and builder.
//!
//! [`WriterConfig`] carries the immutable options fixed at construction time.
//! [`AttoFileWriterBuilder`] validates them and assembles an
//! [`AttoFileWriter`], returning [`WriterBuildError`] for invalid input so
//! misconfiguration is caught before the first append.

use std::fmt::Write as _;

use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    base_dir::{BaseDirProvider, PlatformBaseDir},
    formatter::{AttoFormatter, LineFormatter},
    level::AttoLevel,
    writer::AttoFileWriter,
};

/// One configured size unit, in bytes.
pub const BYTES_PER_SIZE_UNIT: u64 = 1_000_000;

/// Subdirectory of the platform base directory holding all log files.
pub const LOG_SUBDIRECTORY: &str = "logs";

/// Default retention window, in whole days.
pub const DEFAULT_NUMBER_OF_DAYS: u32 = 1;

/// Default date pattern encoded into file names.
pub const DEFAULT_FILE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default date pattern for in-line timestamps.
pub const DEFAULT_LOG_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Default log file extension.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Errors that may occur while building a writer.
#[derive(Debug, Error)]
pub enum WriterBuildError {
    /// Invalid user supplied configuration.
    #[error("invalid writer configuration: {0}")]
    InvalidConfig(String),
}

/// Immutable configuration supplied to the writer at construction.
#[derive(Clone, Debug)]
pub struct WriterConfig {
    /// Severity tokens this writer accepts.
    pub(crate) levels: Vec<AttoLevel>,
    /// Retention window in whole days. `None` disables pruning.
    pub(crate) number_of_days: Option<u32>,
    /// Per-file size cap in units of [`BYTES_PER_SIZE_UNIT`]. `None` disables
    /// size-based rotation.
    pub(crate) max_size: Option<u64>,
    /// Date pattern encoded into file names.
    pub(crate) file_date_format: String,
    /// Date pattern for in-line timestamps.
    pub(crate) log_date_format: String,
    /// Log file extension, without the leading dot.
    pub(crate) extension: String,
}

impl WriterConfig {
    pub(crate) fn accepts(&self, level: AttoLevel) -> bool {
        self.levels.contains(&level)
    }

    pub(crate) fn max_size_bytes(&self) -> Option<u64> {
        self.max_size
            .map(|units| units.saturating_mul(BYTES_PER_SIZE_UNIT))
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            levels: AttoLevel::ALL.to_vec(),
            number_of_days: Some(DEFAULT_NUMBER_OF_DAYS),
            max_size: None,
            file_date_format: DEFAULT_FILE_DATE_FORMAT.to_owned(),
            log_date_format: DEFAULT_LOG_DATE_FORMAT.to_owned(),
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }
}

/// Builder for [`AttoFileWriter`].
pub struct AttoFileWriterBuilder {
    config: WriterConfig,
    base_dir: Option<Box<dyn BaseDirProvider>>,
    formatter: Option<Box<dyn AttoFormatter>>,
}

impl Default for AttoFileWriterBuilder {
    fn default() -> Self {
        Self {
            config: WriterConfig::default(),
            base_dir: None,
            formatter: None,
        }
    }
}

impl AttoFileWriterBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the accepted severity tokens.
    pub fn with_levels(mut self, levels: impl IntoIterator<Item = AttoLevel>) -> Self {
        self.config.levels = levels.into_iter().collect();
        self
    }

    /// Set the retention window in whole days.
    pub fn with_retention_days(mut self, number_of_days: u32) -> Self {
        self.config.number_of_days = Some(number_of_days);
        self
    }

    /// Disable retention pruning entirely.
    pub fn without_retention(mut self) -> Self {
        self.config.number_of_days = None;
        self
    }

    /// Cap file size at `units` times [`BYTES_PER_SIZE_UNIT`] bytes.
    pub fn with_max_size(mut self, units: u64) -> Self {
        self.config.max_size = Some(units);
        self
    }

    /// Set the date pattern encoded into file names.
    pub fn with_file_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.config.file_date_format = pattern.into();
        self
    }

    /// Set the date pattern for in-line timestamps.
    pub fn with_log_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.config.log_date_format = pattern.into();
        self
    }

    /// Set the log file extension (without the leading dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.config.extension = extension.into();
        self
    }

    /// Supply the base-directory capability.
    pub fn with_base_dir<P>(mut self, provider: P) -> Self
    where
        P: BaseDirProvider + 'static,
    {
        self.base_dir = Some(Box::new(provider));
        self
    }

    /// Supply a custom line formatter.
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: AttoFormatter + 'static,
    {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Validate the configuration and construct the writer.
    pub fn build(self) -> Result<AttoFileWriter, WriterBuildError> {
        let Self {
            config,
            base_dir,
            formatter,
        } = self;

        if config.number_of_days == Some(0) {
            return Err(WriterBuildError::InvalidConfig(
                "number_of_days must be at least one".into(),
            ));
        }
        if config.max_size == Some(0) {
            return Err(WriterBuildError::InvalidConfig(
                "max_size must be at least one unit".into(),
            ));
        }
        if config.extension.is_empty() {
            return Err(WriterBuildError::InvalidConfig(
                "extension must not be empty".into(),
            ));
        }
        validate_file_date_pattern(&config.file_date_format)?;
        validate_log_date_pattern(&config.log_date_format)?;

        let formatter = formatter
            .unwrap_or_else(|| Box::new(LineFormatter::new(config.log_date_format.as_str())));
        let base_dir = base_dir.unwrap_or_else(|| Box::new(PlatformBaseDir));
        Ok(AttoFileWriter::from_parts(config, formatter, base_dir))
    }
}

/// Check that the file-name pattern round-trips a calendar date.
///
/// Patterns that render but cannot be parsed back (e.g. missing the year)
/// would break the directory scanner's `format`/`parse` contract.
fn validate_file_date_pattern(pattern: &str) -> Result<(), WriterBuildError> {
    let probe = NaiveDate::from_ymd_opt(2001, 2, 3).expect("valid probe date");
    let mut rendered = String::new();
    if write!(rendered, "{}", probe.format(pattern)).is_err() {
        return Err(WriterBuildError::InvalidConfig(format!(
            "file date pattern '{pattern}' cannot render a calendar date"
        )));
    }
    match NaiveDate::parse_from_str(&rendered, pattern) {
        Ok(parsed) if parsed == probe => Ok(()),
        _ => Err(WriterBuildError::InvalidConfig(format!(
            "file date pattern '{pattern}' does not round-trip a calendar date"
        ))),
    }
}

fn validate_log_date_pattern(pattern: &str) -> Result<(), WriterBuildError> {
    let probe = NaiveDate::from_ymd_opt(2001, 2, 3)
        .and_then(|date| date.and_hms_opt(4, 5, 6))
        .expect("valid probe timestamp");
    let mut rendered = String::new();
    if write!(rendered, "{}", probe.format(pattern)).is_err() {
        return Err(WriterBuildError::InvalidConfig(format!(
            "log date pattern '{pattern}' cannot render a timestamp"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_accept_all_levels_with_one_day_retention() {
        let config = WriterConfig::default();
        assert_eq!(config.levels, AttoLevel::ALL.to_vec());
        assert_eq!(config.number_of_days, Some(1));
        assert_eq!(config.max_size, None);
        assert_eq!(config.file_date_format, "%Y-%m-%d");
        assert_eq!(config.extension, "txt");
    }

    #[test]
    fn max_size_units_convert_to_bytes() {
        let config = WriterConfig {
            max_size: Some(2),
            ..WriterConfig::default()
        };
        assert_eq!(config.max_size_bytes(), Some(2_000_000));
    }

    #[rstest]
    #[case::zero_days(AttoFileWriterBuilder::new().with_retention_days(0))]
    #[case::zero_size(AttoFileWriterBuilder::new().with_max_size(0))]
    #[case::empty_extension(AttoFileWriterBuilder::new().with_extension(""))]
    #[case::unparseable_file_pattern(
        AttoFileWriterBuilder::new().with_file_date_format("%H:%M")
    )]
    #[case::lossy_file_pattern(AttoFileWriterBuilder::new().with_file_date_format("%m-%d"))]
    #[case::bad_log_pattern(AttoFileWriterBuilder::new().with_log_date_format("%Q"))]
    fn rejects_invalid_configuration(#[case] builder: AttoFileWriterBuilder) {
        assert!(matches!(
            builder.build(),
            Err(WriterBuildError::InvalidConfig(_))
        ));
    }

    #[test]
    fn accepts_default_configuration() {
        assert!(AttoFileWriterBuilder::new().build().is_ok());
    }

    #[test]
    fn accepts_custom_patterns_that_round_trip() {
        let built = AttoFileWriterBuilder::new()
            .with_file_date_format("%d.%m.%Y")
            .with_log_date_format("%H:%M:%S")
            .build();
        assert!(built.is_ok());
    }
}
