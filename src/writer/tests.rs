//! Behavioural tests for the serialized writer.
//!
//! Day boundaries are simulated by overriding record timestamps, so rollover
//! and retention can be exercised without waiting for midnight.

use std::fs::{self, File};
use std::io::Write as _;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use chrono::{DateTime, Local, TimeZone};
use tempfile::tempdir;

use super::*;
use crate::base_dir::{BaseDirProvider, FixedBaseDir};
use crate::config::AttoFileWriterBuilder;
use crate::level::AttoLevel;
use crate::log_record::AttoLogRecord;

fn local_noon(year: i32, month: u32, day: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid local time")
}

fn writer_in(base: &Path) -> AttoFileWriter {
    AttoFileWriterBuilder::new()
        .with_base_dir(FixedBaseDir(base.to_path_buf()))
        .with_log_date_format("%H:%M:%S")
        .build()
        .expect("writer builds")
}

fn record_at(level: AttoLevel, message: &str, timestamp: DateTime<Local>) -> AttoLogRecord {
    AttoLogRecord::new(level, message).at(timestamp)
}

#[test]
fn first_append_initialises_directory_and_file() {
    let base = tempdir().expect("tempdir");
    let writer = writer_in(base.path());
    assert_eq!(writer.directory(), None);

    writer
        .append(record_at(AttoLevel::Info, "hello", local_noon(2024, 1, 3)))
        .expect("append succeeds");

    let logs = base.path().join("logs");
    assert_eq!(writer.directory(), Some(logs.clone()));
    let contents = fs::read_to_string(logs.join("2024-01-03_0.txt")).expect("active file exists");
    assert_eq!(contents, "12:00:00 [INFO]:hello\n");
}

#[test]
fn same_day_appends_share_one_file_in_call_order() {
    let base = tempdir().expect("tempdir");
    let writer = writer_in(base.path());
    let noon = local_noon(2024, 1, 3);

    for message in ["first", "second", "third"] {
        writer
            .append(record_at(AttoLevel::Info, message, noon))
            .expect("append succeeds");
    }

    let contents =
        fs::read_to_string(base.path().join("logs/2024-01-03_0.txt")).expect("active file exists");
    assert_eq!(
        contents,
        "12:00:00 [INFO]:first\n12:00:00 [INFO]:second\n12:00:00 [INFO]:third\n"
    );
}

#[test]
fn day_rollover_prunes_then_reselects() {
    let base = tempdir().expect("tempdir");
    let writer = writer_in(base.path());

    writer
        .append(record_at(AttoLevel::Info, "yesterday", local_noon(2024, 1, 3)))
        .expect("append succeeds");
    writer
        .append(record_at(AttoLevel::Info, "today", local_noon(2024, 1, 4)))
        .expect("append succeeds");

    let logs = base.path().join("logs");
    // Default retention keeps one day, so the old file is pruned on rollover.
    assert!(!logs.join("2024-01-03_0.txt").exists());
    let contents = fs::read_to_string(logs.join("2024-01-04_0.txt")).expect("new file exists");
    assert_eq!(contents, "12:00:00 [INFO]:today\n");
}

#[test]
fn initialisation_prunes_and_adopts_the_surviving_file() {
    let base = tempdir().expect("tempdir");
    let logs = base.path().join("logs");
    fs::create_dir_all(&logs).expect("seed directory");
    File::create(logs.join("2024-01-01_0.txt"))
        .and_then(|mut f| f.write_all(b"old\n"))
        .expect("seed stale file");
    File::create(logs.join("2024-01-03_0.txt"))
        .and_then(|mut f| f.write_all(b"seed\n"))
        .expect("seed current file");

    let writer = AttoFileWriterBuilder::new()
        .with_base_dir(FixedBaseDir(base.path().to_path_buf()))
        .with_log_date_format("%H:%M:%S")
        .with_retention_days(2)
        .build()
        .expect("writer builds");
    writer
        .append(record_at(AttoLevel::Info, "appended", local_noon(2024, 1, 3)))
        .expect("append succeeds");

    assert!(!logs.join("2024-01-01_0.txt").exists());
    let contents = fs::read_to_string(logs.join("2024-01-03_0.txt")).expect("kept file exists");
    assert_eq!(contents, "seed\n12:00:00 [INFO]:appended\n");
}

#[test]
fn unaccepted_levels_are_discarded_without_initialising() {
    let base = tempdir().expect("tempdir");
    let writer = AttoFileWriterBuilder::new()
        .with_base_dir(FixedBaseDir(base.path().to_path_buf()))
        .with_levels([AttoLevel::Error])
        .build()
        .expect("writer builds");

    writer.info("ignored").expect("discarded append is ok");

    assert_eq!(writer.directory(), None);
    assert!(!base.path().join("logs").exists());
}

struct NoBaseDir;

impl BaseDirProvider for NoBaseDir {
    fn base_dir(&self) -> Option<std::path::PathBuf> {
        None
    }
}

#[test]
fn unresolvable_platform_surfaces_and_leaves_writer_uninitialised() {
    let writer = AttoFileWriterBuilder::new()
        .with_base_dir(NoBaseDir)
        .build()
        .expect("writer builds");

    let err = writer.info("dropped").expect_err("append must fail");
    assert!(matches!(err, WriterError::UnsupportedPlatform));
    assert_eq!(writer.directory(), None);

    // Still not Ready: the next append fails the same way.
    let err = writer.info("dropped again").expect_err("append must fail");
    assert!(matches!(err, WriterError::UnsupportedPlatform));
}

#[test]
fn concurrent_appends_across_a_day_boundary_stay_whole() {
    let base = tempdir().expect("tempdir");
    let writer = Arc::new(writer_in(base.path()));

    writer
        .append(record_at(AttoLevel::Info, "day one", local_noon(2024, 1, 3)))
        .expect("append succeeds");

    let next_day = local_noon(2024, 1, 4);
    let mut handles = Vec::new();
    for thread_id in 0..8 {
        let writer = Arc::clone(&writer);
        handles.push(thread::spawn(move || {
            for record_id in 0..5 {
                let message = format!("t{thread_id}-r{record_id}");
                writer
                    .append(record_at(AttoLevel::Info, &message, next_day))
                    .expect("append succeeds");
            }
        }));
    }
    for handle in handles {
        handle.join().expect("thread completes");
    }

    let logs = base.path().join("logs");
    // Rollover ran once for the boundary: the old file was pruned and every
    // record landed in the single new file.
    assert!(!logs.join("2024-01-03_0.txt").exists());
    let contents = fs::read_to_string(logs.join("2024-01-04_0.txt")).expect("new file exists");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 40);
    for thread_id in 0..8 {
        for record_id in 0..5 {
            let expected = format!("12:00:00 [INFO]:t{thread_id}-r{record_id}");
            assert!(
                lines.contains(&expected.as_str()),
                "missing record {expected}"
            );
        }
    }
}
