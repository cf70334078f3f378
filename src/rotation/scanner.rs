//! Directory scanner for managed log files.
//!
//! Listings are recomputed from live filesystem state on every call. Caching
//! would let a stale snapshot drive rotation decisions, so the scan is treated
//! as a pure, finite, lookup-once query.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;

/// A directory entry recognised as a managed log file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ScannedLog {
    pub(crate) path: PathBuf,
    pub(crate) date: NaiveDate,
    pub(crate) index: u32,
}

/// List the managed log files in `directory`.
///
/// Entries whose name does not encode a date in `file_date_format` are not
/// managed files and are skipped. An index segment that fails integer parsing
/// is tolerated and treated as index 0.
pub(crate) fn scan<'a>(
    directory: &Path,
    file_date_format: &'a str,
) -> io::Result<impl Iterator<Item = ScannedLog> + 'a> {
    let entries = fs::read_dir(directory)?;
    Ok(entries.filter_map(move |entry| parse_file_name(&entry.ok()?.path(), file_date_format)))
}

/// Parse a path of the shape `<date>_<index>.<ext>` into a [`ScannedLog`].
///
/// The stem is split on the last `_` so date patterns containing underscores
/// still resolve.
pub(crate) fn parse_file_name(path: &Path, file_date_format: &str) -> Option<ScannedLog> {
    let stem = path.file_stem()?.to_str()?;
    let (date_part, index_part) = stem.rsplit_once('_')?;
    let date = NaiveDate::parse_from_str(date_part, file_date_format).ok()?;
    let index = index_part.parse().unwrap_or(0);
    Some(ScannedLog {
        path: path.to_path_buf(),
        date,
        index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs::File;
    use tempfile::tempdir;

    const FORMAT: &str = "%Y-%m-%d";

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[rstest]
    #[case::plain("2024-01-03_2.txt", Some((date(2024, 1, 3), 2)))]
    #[case::lenient_index("2024-01-01_abc.txt", Some((date(2024, 1, 1), 0)))]
    #[case::negative_index("2024-01-01_-4.txt", Some((date(2024, 1, 1), 0)))]
    #[case::no_separator("2024-01-03.txt", None)]
    #[case::unparseable_date("notes_1.txt", None)]
    #[case::unrelated("README.md", None)]
    fn parses_file_names_leniently(
        #[case] name: &str,
        #[case] expected: Option<(NaiveDate, u32)>,
    ) {
        let parsed = parse_file_name(Path::new(name), FORMAT);
        assert_eq!(parsed.map(|log| (log.date, log.index)), expected);
    }

    #[test]
    fn scan_skips_unmanaged_entries() -> io::Result<()> {
        let dir = tempdir()?;
        for name in ["2024-01-03_0.txt", "2024-01-02_1.txt", "stray.txt"] {
            File::create(dir.path().join(name))?;
        }

        let mut found: Vec<_> = scan(dir.path(), FORMAT)?
            .map(|log| (log.date, log.index))
            .collect();
        found.sort();
        assert_eq!(
            found,
            vec![(date(2024, 1, 2), 1), (date(2024, 1, 3), 0)]
        );
        Ok(())
    }

    #[test]
    fn scan_of_missing_directory_errors() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("absent");
        assert!(scan(&missing, FORMAT).is_err());
    }
}
