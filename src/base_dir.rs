//! Platform base-directory resolution.
//!
//! The writer consumes a narrow "writable base directory" capability rather
//! than choosing physical roots itself. [`PlatformBaseDir`] is the default
//! provider; embedders and tests substitute their own implementation to point
//! the writer anywhere.

use std::path::PathBuf;

/// Capability supplying the writable base directory for this platform.
///
/// Returning `None` means no writable location could be resolved; the writer
/// surfaces that as a fatal error on the first append.
pub trait BaseDirProvider: Send + Sync {
    fn base_dir(&self) -> Option<PathBuf>;
}

/// Default provider backed by the operating system's local data directory.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlatformBaseDir;

impl BaseDirProvider for PlatformBaseDir {
    fn base_dir(&self) -> Option<PathBuf> {
        dirs::data_local_dir()
    }
}

/// Provider pinned to a fixed directory.
///
/// Useful when the host application has already decided where logs belong,
/// and for tests that run against a temporary directory.
#[derive(Clone, Debug)]
pub struct FixedBaseDir(pub PathBuf);

impl BaseDirProvider for FixedBaseDir {
    fn base_dir(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}
