//! Error types for archive packaging operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while packaging a project directory.
///
/// Structural variants (`RootUnavailable`, `RootNotADirectory`,
/// `OutputUnavailable`) abort the whole operation. The remaining variants
/// describe a single file and are recorded in the run report instead of
/// propagating.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The project root could not be resolved.
    #[error("cannot resolve project root {path}: {source}")]
    RootUnavailable {
        /// The root path as given.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The project root exists but is not a directory.
    #[error("project root is not a directory: {path}")]
    RootNotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// The output archive could not be created.
    #[error("cannot create archive at {path}: {source}")]
    OutputUnavailable {
        /// The output path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A file path is not located under the project root.
    #[error("path is not under the project root: {path}")]
    OutsideRoot {
        /// The offending path.
        path: PathBuf,
    },

    /// A file path is not valid UTF-8 and cannot become an entry name.
    #[error("path is not valid UTF-8: {path}")]
    NonUtf8Path {
        /// The offending path.
        path: PathBuf,
    },
}

impl ArchiveError {
    /// Returns `true` if this error aborts the whole operation rather than
    /// a single file.
    ///
    /// # Examples
    ///
    /// ```
    /// use projpack_core::ArchiveError;
    /// use std::path::PathBuf;
    ///
    /// let err = ArchiveError::RootNotADirectory {
    ///     path: PathBuf::from("/tmp/file.txt"),
    /// };
    /// assert!(err.is_structural());
    ///
    /// let err = ArchiveError::NonUtf8Path {
    ///     path: PathBuf::from("weird"),
    /// };
    /// assert!(!err.is_structural());
    /// ```
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::RootUnavailable { .. }
                | Self::RootNotADirectory { .. }
                | Self::OutputUnavailable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArchiveError::RootNotADirectory {
            path: PathBuf::from("/tmp/plain.txt"),
        };
        assert!(err.to_string().contains("not a directory"));
        assert!(err.to_string().contains("/tmp/plain.txt"));
    }

    #[test]
    fn test_output_unavailable_display() {
        let err = ArchiveError::OutputUnavailable {
            path: PathBuf::from("/bad/out.zip"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("cannot create archive"));
        assert!(msg.contains("/bad/out.zip"));
    }

    #[test]
    fn test_structural_classification() {
        let structural = ArchiveError::OutputUnavailable {
            path: PathBuf::from("out.zip"),
            source: std::io::Error::other("disk full"),
        };
        assert!(structural.is_structural());

        let per_file = ArchiveError::OutsideRoot {
            path: PathBuf::from("/elsewhere/file"),
        };
        assert!(!per_file.is_structural());

        let io = ArchiveError::Io(std::io::Error::other("boom"));
        assert!(!io.is_structural());
    }
}
