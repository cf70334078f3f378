//! Active file selection.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;

use super::scanner;

/// Determine the file the next append for `today` belongs in.
///
/// The highest index among today's entries is current (0 when none exist).
/// With a size cap, a current file whose length already exceeds the cap yields
/// index `current + 1` instead; that file need not exist yet and is created by
/// the first write. The oversized file is never truncated or deleted here.
/// Entries for other dates are excluded before the maximum is taken, so their
/// indices cannot influence the choice.
pub(crate) fn select(
    directory: &Path,
    today: NaiveDate,
    max_size_bytes: Option<u64>,
    file_date_format: &str,
    extension: &str,
) -> io::Result<PathBuf> {
    let current_index = scanner::scan(directory, file_date_format)?
        .filter(|entry| entry.date == today)
        .map(|entry| entry.index)
        .max()
        .unwrap_or(0);

    let date_part = today.format(file_date_format).to_string();
    let candidate = directory.join(format!("{date_part}_{current_index}.{extension}"));

    let Some(max_bytes) = max_size_bytes else {
        return Ok(candidate);
    };
    match fs::metadata(&candidate) {
        Ok(meta) if meta.len() > max_bytes => {
            let next_index = current_index + 1;
            Ok(directory.join(format!("{date_part}_{next_index}.{extension}")))
        }
        Ok(_) => Ok(candidate),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(candidate),
        Err(err) => Err(err),
    }
}
