//! Compatibility bridge for the Rust `log` crate.
//!
//! `AttoLogBridge` implements `log::Log` and forwards facade records into a
//! shared [`AttoFileWriter`], so applications already instrumented with
//! `log::info!` and friends can write through the rotating file writer without
//! changing call sites.

use std::cell::Cell;
use std::sync::Arc;

use log::{Metadata, Record};

use crate::{level::AttoLevel, log_record::AttoLogRecord, writer::AttoFileWriter};

thread_local! {
    static FORWARDING: Cell<bool> = const { Cell::new(false) };
}

/// Adapter implementing the Rust `log::Log` trait.
///
/// Each facade record is converted to an [`AttoLogRecord`] with the record's
/// target as its tag and dispatched through the shared writer. The writer's
/// own tolerated-failure diagnostics also travel over the `log` facade; a
/// thread-local guard discards records emitted while a forward is already in
/// progress on the same thread, as those would re-enter the instance lock.
pub struct AttoLogBridge {
    writer: Arc<AttoFileWriter>,
}

fn map_log_level(level: log::Level) -> AttoLevel {
    match level {
        log::Level::Trace => AttoLevel::Verbose,
        log::Level::Debug => AttoLevel::Debug,
        log::Level::Info => AttoLevel::Info,
        log::Level::Warn => AttoLevel::Warning,
        log::Level::Error => AttoLevel::Error,
    }
}

fn is_enabled_by_global_max(level: log::Level) -> bool {
    log::max_level() >= level.to_level_filter()
}

impl AttoLogBridge {
    pub fn new(writer: Arc<AttoFileWriter>) -> Self {
        Self { writer }
    }

    /// Install the bridge as the process-wide `log` logger.
    ///
    /// Fails if another logger is already installed.
    pub fn install(
        writer: Arc<AttoFileWriter>,
        max_level: log::LevelFilter,
    ) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(writer)))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl log::Log for AttoLogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        is_enabled_by_global_max(metadata.level())
    }

    fn log(&self, record: &Record<'_>) {
        if !is_enabled_by_global_max(record.level()) {
            return;
        }
        let already_forwarding = FORWARDING.with(|flag| flag.replace(true));
        if already_forwarding {
            return;
        }
        let atto = AttoLogRecord::new(map_log_level(record.level()), &record.args().to_string())
            .with_tag(record.target());
        if let Err(err) = self.writer.append(atto) {
            eprintln!("attologging: failed to forward log record: {err}");
        }
        FORWARDING.with(|flag| flag.set(false));
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_trace_to_verbose() {
        assert_eq!(map_log_level(log::Level::Trace), AttoLevel::Verbose);
        assert_eq!(map_log_level(log::Level::Warn), AttoLevel::Warning);
        assert_eq!(map_log_level(log::Level::Error), AttoLevel::Error);
    }
}
