//! Daily-rotating, size-bounded, self-pruning log-file writer.
//!
//! [`AttoFileWriter`] appends structured log records to files under
//! `<platform-base>/logs/`, named `<date>_<index>.<ext>`. It rolls to a new
//! file when the calendar day changes or the active file exceeds the
//! configured size cap, and deletes files older than the retention window.
//! All rotation decisions and appends for one writer instance are serialized
//! under a single lock, so concurrent callers never interleave partial writes
//! or race on rollover.
//!
//! ```no_run
//! use attologging_rs::AttoFileWriterBuilder;
//!
//! let writer = AttoFileWriterBuilder::new()
//!     .with_retention_days(7)
//!     .with_max_size(5)
//!     .build()?;
//! writer.info("service started")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod base_dir;
mod config;
mod formatter;
mod level;
mod log_compat;
mod log_record;
mod rotation;
mod writer;

pub use base_dir::{BaseDirProvider, FixedBaseDir, PlatformBaseDir};
pub use config::{
    AttoFileWriterBuilder, BYTES_PER_SIZE_UNIT, DEFAULT_EXTENSION, DEFAULT_FILE_DATE_FORMAT,
    DEFAULT_LOG_DATE_FORMAT, DEFAULT_NUMBER_OF_DAYS, LOG_SUBDIRECTORY, WriterBuildError,
};
pub use formatter::{AttoFormatter, LineFormatter};
pub use level::AttoLevel;
pub use log_compat::AttoLogBridge;
pub use log_record::AttoLogRecord;
pub use writer::{AttoFileWriter, WriterError};
