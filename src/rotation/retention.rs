//! Retention pruning of stale log files.

use std::{fs, path::Path};

use chrono::{Days, NaiveDate};
use log::warn;

use super::scanner;

/// Delete managed log files whose encoded date falls outside the retention
/// window. Returns the number of files deleted.
///
/// `number_of_days = Some(n)` keeps files dated within `today - (n - 1)` days;
/// `None` disables pruning. Per-file delete failures are warned and skipped so
/// one bad file never aborts the pass; a missed prune self-corrects on the
/// next rollover. Only the date component is considered: today's files and
/// in-window files are kept regardless of index or size.
pub(crate) fn prune(
    directory: &Path,
    today: NaiveDate,
    number_of_days: Option<u32>,
    file_date_format: &str,
) -> usize {
    let Some(number_of_days) = number_of_days else {
        return 0;
    };
    let days_back = u64::from(number_of_days.saturating_sub(1));
    let Some(min_date) = today.checked_sub_days(Days::new(days_back)) else {
        return 0;
    };

    let entries = match scanner::scan(directory, file_date_format) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(
                "attologging: could not scan log directory {}: {err}",
                directory.display()
            );
            return 0;
        }
    };

    let mut deleted = 0;
    for entry in entries {
        if entry.date >= min_date {
            continue;
        }
        match fs::remove_file(&entry.path) {
            Ok(()) => deleted += 1,
            Err(err) => {
                warn!(
                    "attologging: could not delete stale log file {}: {err}",
                    entry.path.display()
                );
            }
        }
    }
    deleted
}
