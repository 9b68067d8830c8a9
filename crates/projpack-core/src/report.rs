//! Per-file outcomes, run reporting, and progress callbacks.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of evaluating one file during packaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// File was appended to the archive.
    Added {
        /// Uncompressed bytes copied into the archive.
        bytes: u64,
    },

    /// File was excluded by policy (or was the output archive itself).
    Skipped,

    /// File could not be added; traversal continued.
    Failed {
        /// Human-readable failure description.
        reason: String,
    },
}

/// A file that could not be added, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    /// Filesystem path of the file.
    pub path: PathBuf,

    /// Why the file could not be added.
    pub reason: String,
}

/// Report of one packaging run.
///
/// Accumulates typed per-file outcomes so callers can inspect results
/// programmatically instead of scraping console output.
///
/// # Examples
///
/// ```
/// use projpack_core::ArchiveReport;
/// use projpack_core::FileOutcome;
/// use std::path::Path;
/// use std::path::PathBuf;
///
/// let mut report = ArchiveReport::new(PathBuf::from("/p/out.zip"));
/// report.record(Path::new("/p/src/main.rs"), FileOutcome::Added { bytes: 120 });
/// report.record(Path::new("/p/notes.pyc"), FileOutcome::Skipped);
///
/// assert_eq!(report.files_added, 1);
/// assert_eq!(report.files_skipped, 1);
/// assert_eq!(report.total_files(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveReport {
    /// Absolute path of the produced archive.
    pub archive_path: PathBuf,

    /// Number of files appended to the archive.
    pub files_added: usize,

    /// Number of files excluded by policy.
    pub files_skipped: usize,

    /// Number of files that failed and were passed over.
    pub files_failed: usize,

    /// Uncompressed bytes copied into the archive.
    pub bytes_written: u64,

    /// Size of the finalized archive on disk.
    pub archive_size: u64,

    /// Duration of the run.
    pub duration: Duration,

    /// Every failure, in traversal order.
    pub failures: Vec<FileFailure>,
}

impl ArchiveReport {
    /// Creates an empty report for the given output path.
    #[must_use]
    pub fn new(archive_path: PathBuf) -> Self {
        Self {
            archive_path,
            files_added: 0,
            files_skipped: 0,
            files_failed: 0,
            bytes_written: 0,
            archive_size: 0,
            duration: Duration::default(),
            failures: Vec::new(),
        }
    }

    /// Records one file outcome, updating the matching counter.
    pub fn record(&mut self, path: &Path, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Added { bytes } => {
                self.files_added += 1;
                self.bytes_written += bytes;
            }
            FileOutcome::Skipped => self.files_skipped += 1,
            FileOutcome::Failed { reason } => {
                self.files_failed += 1;
                self.failures.push(FileFailure {
                    path: path.to_path_buf(),
                    reason,
                });
            }
        }
    }

    /// Total number of files evaluated.
    ///
    /// Always equals `files_added + files_skipped + files_failed`; files
    /// under pruned directories are never evaluated and never counted.
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.files_added + self.files_skipped + self.files_failed
    }

    /// Returns whether any file failed during the run.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Archive size in megabytes.
    #[must_use]
    pub fn size_mb(&self) -> f64 {
        self.archive_size as f64 / (1024.0 * 1024.0)
    }
}

/// Callback invoked as files are evaluated during packaging.
///
/// Implementations drive console lines or progress bars; the library
/// itself prints nothing.
pub trait ProgressCallback {
    /// Called after a file was appended to the archive.
    fn on_file_added(&mut self, path: &Path, bytes: u64);

    /// Called when a file was excluded by policy.
    fn on_file_skipped(&mut self, path: &Path);

    /// Called when a file failed and was passed over.
    fn on_file_failed(&mut self, path: &Path, reason: &str);

    /// Called once after the archive is finalized.
    fn on_complete(&mut self);
}

/// No-op progress callback for non-interactive use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_file_added(&mut self, _path: &Path, _bytes: u64) {}

    fn on_file_skipped(&mut self, _path: &Path) {}

    fn on_file_failed(&mut self, _path: &Path, _reason: &str) {}

    fn on_complete(&mut self) {}
}
