//! Project directory packaging library.
//!
//! `projpack-core` walks a project tree, filters out build artifacts, VCS
//! metadata, and OS cruft through an [`ExclusionPolicy`], and writes the
//! remaining files into a deflate-compressed ZIP archive under their
//! root-relative paths. Per-file failures are collected in the
//! [`ArchiveReport`] instead of aborting the run.
//!
//! # Examples
//!
//! ```no_run
//! use projpack_core::ArchiveTask;
//! use projpack_core::ExclusionPolicy;
//! use projpack_core::create_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let task = ArchiveTask::new(".", None)?;
//! let report = create_archive(&task, &ExclusionPolicy::default())?;
//! println!(
//!     "{} / {} files -> {}",
//!     report.files_added,
//!     report.total_files(),
//!     report.archive_path.display()
//! );
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod archiver;
pub mod error;
pub mod policy;
pub mod report;
pub mod task;
pub mod walker;

// Re-export main API types
pub use archiver::create_archive;
pub use archiver::create_archive_with_progress;
pub use error::ArchiveError;
pub use error::Result;
pub use policy::ARCHIVE_EXTENSION;
pub use policy::ExclusionPolicy;
pub use report::ArchiveReport;
pub use report::FileFailure;
pub use report::FileOutcome;
pub use report::NoopProgress;
pub use report::ProgressCallback;
pub use task::ArchiveTask;
pub use task::DEFAULT_OUTPUT_NAME;
