//! Archive task configuration.

use crate::error::ArchiveError;
use crate::error::Result;
use crate::policy::ARCHIVE_EXTENSION;
use std::path::Path;
use std::path::PathBuf;

/// Base name used for the output archive when the caller gives none.
pub const DEFAULT_OUTPUT_NAME: &str = "project_archive";

/// One packaging run: the resolved root directory and the output path.
///
/// The root is canonicalized at construction, so a root that cannot be
/// resolved fails here as a structural error rather than mid-traversal.
///
/// # Examples
///
/// ```no_run
/// use projpack_core::ArchiveTask;
///
/// let task = ArchiveTask::new(".", Some("release_bundle"))?;
/// assert!(task.output.ends_with("release_bundle.zip"));
/// # Ok::<(), projpack_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveTask {
    /// Canonicalized root directory to package.
    pub root: PathBuf,

    /// Path of the archive to produce.
    pub output: PathBuf,

    /// Deflate compression level (1-9). `None` uses the format default.
    pub compression_level: Option<u8>,
}

impl ArchiveTask {
    /// Creates a task writing `<root>/<name>.zip`.
    ///
    /// `output_name` is the base name without extension; the default base
    /// name is used when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::RootUnavailable`] if the root cannot be
    /// resolved and [`ArchiveError::RootNotADirectory`] if it is not a
    /// directory.
    pub fn new(root: impl AsRef<Path>, output_name: Option<&str>) -> Result<Self> {
        let root = resolve_root(root.as_ref())?;
        let name = output_name.unwrap_or(DEFAULT_OUTPUT_NAME);
        let output = root.join(format!("{name}.{ARCHIVE_EXTENSION}"));
        Ok(Self {
            root,
            output,
            compression_level: None,
        })
    }

    /// Creates a task with an explicit output path.
    ///
    /// Useful for placing the archive outside the tree being packaged.
    ///
    /// # Errors
    ///
    /// Same as [`ArchiveTask::new`].
    pub fn with_output(root: impl AsRef<Path>, output: impl Into<PathBuf>) -> Result<Self> {
        let root = resolve_root(root.as_ref())?;
        Ok(Self {
            root,
            output: output.into(),
            compression_level: None,
        })
    }

    /// Sets the deflate compression level.
    ///
    /// # Panics
    ///
    /// Panics if the level is not in the range 1-9.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        assert!((1..=9).contains(&level), "compression level must be 1-9");
        self.compression_level = Some(level);
        self
    }
}

fn resolve_root(root: &Path) -> Result<PathBuf> {
    let resolved = root
        .canonicalize()
        .map_err(|source| ArchiveError::RootUnavailable {
            path: root.to_path_buf(),
            source,
        })?;
    if !resolved.is_dir() {
        return Err(ArchiveError::RootNotADirectory { path: resolved });
    }
    Ok(resolved)
}
