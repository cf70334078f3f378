//! Serialized, daily-rotating log-file writer.
//!
//! `AttoFileWriter` is the public entry point. Initialisation, rollover
//! decisions, and appends for one instance all execute under a single mutex,
//! so the whole "check day, maybe rotate, format, append" sequence is atomic
//! with respect to other append calls. Independent writer instances share
//! nothing and require no coordination.
//!
//! Construct the writer with [`AttoFileWriterBuilder`](crate::AttoFileWriterBuilder).

mod convenience_methods;

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use parking_lot::Mutex;
use thiserror::Error;

use crate::{
    base_dir::BaseDirProvider,
    config::{LOG_SUBDIRECTORY, WriterConfig},
    formatter::AttoFormatter,
    log_record::AttoLogRecord,
    rotation::{retention, selector},
};

/// Errors surfaced by [`AttoFileWriter::append`].
///
/// Logging is best-effort for the host application: callers decide whether a
/// failed append matters. The writer itself never retries.
#[derive(Debug, Error)]
pub enum WriterError {
    /// No writable base directory could be resolved for this platform.
    #[error("no writable base directory available on this platform")]
    UnsupportedPlatform,
    /// The log directory could not be created.
    #[error("failed to create log directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Underlying I/O error whilst selecting, opening, or appending to the
    /// active file.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The currently selected file and the calendar date it was computed for.
///
/// Invariant: the date encoded in the file name equals `opened_for`. The value
/// is replaced wholesale on rollover, never mutated in place; the physical
/// file is only ever deleted by the retention pruner.
#[derive(Clone, Debug)]
struct ActiveFile {
    path: PathBuf,
    opened_for: NaiveDate,
}

impl ActiveFile {
    /// Valid exactly while the calendar date matches the date the file was
    /// selected for, independent of time of day.
    fn is_valid_for(&self, today: NaiveDate) -> bool {
        self.opened_for == today
    }
}

struct WriterState {
    directory: PathBuf,
    active: ActiveFile,
}

/// Daily-rotating, size-bounded, self-pruning log-file writer.
///
/// The writer is `Uninitialized` until the first accepted append, which
/// resolves the platform base directory, creates the `logs` subdirectory,
/// prunes stale files, and selects the active file. Every subsequent append
/// re-validates the active file's calendar date, rolling over (prune then
/// re-select) when the day has changed, then appends the formatted record and
/// flushes it to stable storage before returning.
pub struct AttoFileWriter {
    config: WriterConfig,
    formatter: Box<dyn AttoFormatter>,
    base_dir: Box<dyn BaseDirProvider>,
    state: Mutex<Option<WriterState>>,
}

impl AttoFileWriter {
    pub(crate) fn from_parts(
        config: WriterConfig,
        formatter: Box<dyn AttoFormatter>,
        base_dir: Box<dyn BaseDirProvider>,
    ) -> Self {
        Self {
            config,
            formatter,
            base_dir,
            state: Mutex::new(None),
        }
    }

    /// Append one record to the active log file.
    ///
    /// Records whose level is not in the accepted set return `Ok(())` without
    /// touching the filesystem. Rotation decisions derive "today" from the
    /// record's creation timestamp; records are consumed immediately after
    /// construction, so this is the moment of the call.
    pub fn append(&self, record: AttoLogRecord) -> Result<(), WriterError> {
        if !self.config.accepts(record.level) {
            return Ok(());
        }
        let today = record.timestamp.date_naive();

        let mut guard = self.state.lock();
        let state = match guard.take() {
            Some(state) if state.active.is_valid_for(today) => state,
            Some(state) => self.roll_over(state.directory, today)?,
            None => self.initialise(today)?,
        };
        let formatted = self.formatter.format(&record);
        let result = append_line(&state.active.path, &formatted);
        *guard = Some(state);
        result.map_err(WriterError::from)
    }

    /// The resolved log directory.
    ///
    /// `None` until the first accepted append triggers initialisation.
    pub fn directory(&self) -> Option<PathBuf> {
        self.state
            .lock()
            .as_ref()
            .map(|state| state.directory.clone())
    }

    /// First-time setup: resolve the base directory, create the `logs`
    /// subdirectory idempotently, then prune and select.
    ///
    /// Failure leaves the writer uninitialised; the next append retries from
    /// scratch.
    fn initialise(&self, today: NaiveDate) -> Result<WriterState, WriterError> {
        let base = self
            .base_dir
            .base_dir()
            .ok_or(WriterError::UnsupportedPlatform)?;
        let directory = base.join(LOG_SUBDIRECTORY);
        fs::create_dir_all(&directory).map_err(|source| WriterError::CreateDirectory {
            path: directory.clone(),
            source,
        })?;
        self.roll_over(directory, today)
    }

    /// Prune, then select, in that order: a newly stale file must not itself
    /// be selected as current.
    fn roll_over(&self, directory: PathBuf, today: NaiveDate) -> Result<WriterState, WriterError> {
        retention::prune(
            &directory,
            today,
            self.config.number_of_days,
            &self.config.file_date_format,
        );
        let path = selector::select(
            &directory,
            today,
            self.config.max_size_bytes(),
            &self.config.file_date_format,
            &self.config.extension,
        )?;
        Ok(WriterState {
            directory,
            active: ActiveFile {
                path,
                opened_for: today,
            },
        })
    }
}

fn append_line(path: &Path, formatted: &str) -> io::Result<()> {
    #[expect(
        clippy::ineffective_open_options,
        reason = "Be explicit about write intent alongside append"
    )]
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(true)
        .open(path)?;
    file.write_all(formatted.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()
}

#[cfg(test)]
mod tests;
