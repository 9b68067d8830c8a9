//! Error conversion utilities for CLI.
//!
//! Converts projpack-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use projpack_core::ArchiveError;
use std::path::Path;

/// Converts `ArchiveError` to a user-friendly anyhow error with context
pub fn convert_archive_error(err: ArchiveError, dir: &Path) -> anyhow::Error {
    match err {
        ArchiveError::RootUnavailable { path, source } => {
            anyhow!(
                "Cannot resolve project directory '{}': {source}\n\
                 HINT: Check that the path exists and is accessible.",
                path.display()
            )
        }
        ArchiveError::RootNotADirectory { path } => {
            anyhow!(
                "'{}' is not a directory\n\
                 HINT: Pass the project directory itself, not a file inside it.",
                path.display()
            )
        }
        ArchiveError::OutputUnavailable { path, source } => {
            anyhow!(
                "Cannot create archive at '{}': {source}\n\
                 HINT: Check that the parent directory exists and has free space.",
                path.display()
            )
        }
        ArchiveError::Io(io_err) => {
            anyhow!(
                "I/O error while packaging '{}': {io_err}",
                dir.display()
            )
        }
        other => anyhow::Error::from(other)
            .context(format!("Error packaging directory '{}'", dir.display())),
    }
}

/// Adds context to a result of a packaging operation
pub fn add_pack_context<T>(
    result: Result<T, ArchiveError>,
    dir: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, dir))
}
