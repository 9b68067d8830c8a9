//! Exclusion filtering policy for archive packaging.
//!
//! The policy is an immutable configuration value constructed once at
//! startup and passed into the traversal, so the exclusion rules stay
//! unit-testable in isolation.

use std::collections::BTreeSet;
use std::path::Path;

/// Extension used by the archives this crate produces.
///
/// Files carrying this extension are always excluded so a previously
/// produced archive is never packed into a new one.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Decides which directory trees and files stay out of the archive.
///
/// Three rule sets, all applied as a logical OR:
/// - `prune_dirs`: directory names whose entire subtree is skipped without
///   per-file evaluation,
/// - `skip_names`: exact file names to skip,
/// - `skip_extensions`: extension suffixes (without the dot) to skip.
///
/// # Examples
///
/// ```
/// use projpack_core::ExclusionPolicy;
/// use std::path::Path;
///
/// let policy = ExclusionPolicy::default();
/// let root = Path::new("/project");
///
/// assert!(policy.should_exclude(Path::new("/project/target/debug/app"), root));
/// assert!(policy.should_exclude(Path::new("/project/.DS_Store"), root));
/// assert!(!policy.should_exclude(Path::new("/project/src/main.rs"), root));
/// ```
#[derive(Debug, Clone)]
pub struct ExclusionPolicy {
    prune_dirs: BTreeSet<String>,
    skip_names: BTreeSet<String>,
    skip_extensions: BTreeSet<String>,
}

impl Default for ExclusionPolicy {
    /// Creates a policy covering the usual build, VCS, editor, and OS cruft.
    ///
    /// Default prune directories: `target`, `.git`, `.vscode`, `.idea`,
    /// `__pycache__`, `node_modules`, `.pytest_cache`.
    ///
    /// Default skip names: `.DS_Store`, `Thumbs.db`.
    ///
    /// Default skip extensions: `pyc`, `pyo`, `pyd`, `so`, `dylib`, `dll`.
    fn default() -> Self {
        Self {
            prune_dirs: [
                "target",
                ".git",
                ".vscode",
                ".idea",
                "__pycache__",
                "node_modules",
                ".pytest_cache",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            skip_names: [".DS_Store", "Thumbs.db"]
                .into_iter()
                .map(String::from)
                .collect(),
            skip_extensions: ["pyc", "pyo", "pyd", "so", "dylib", "dll"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ExclusionPolicy {
    /// Creates a policy with the default rule sets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a policy with empty rule sets.
    ///
    /// The archive's own extension is still excluded; that rule is not
    /// configurable.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            prune_dirs: BTreeSet::new(),
            skip_names: BTreeSet::new(),
            skip_extensions: BTreeSet::new(),
        }
    }

    /// Replaces the prune directory set.
    #[must_use]
    pub fn with_prune_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prune_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the skip name set.
    #[must_use]
    pub fn with_skip_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the skip extension set.
    #[must_use]
    pub fn with_skip_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a directory name to the prune set.
    #[must_use]
    pub fn prune_dir(mut self, name: impl Into<String>) -> Self {
        self.prune_dirs.insert(name.into());
        self
    }

    /// Adds an exact file name to the skip set.
    #[must_use]
    pub fn skip_name(mut self, name: impl Into<String>) -> Self {
        self.skip_names.insert(name.into());
        self
    }

    /// Adds an extension (without the dot) to the skip set.
    #[must_use]
    pub fn skip_extension(mut self, extension: impl Into<String>) -> Self {
        self.skip_extensions.insert(extension.into());
        self
    }

    /// Returns `true` if a directory with this name must not be entered.
    ///
    /// # Examples
    ///
    /// ```
    /// use projpack_core::ExclusionPolicy;
    ///
    /// let policy = ExclusionPolicy::default();
    /// assert!(policy.prunes_directory("node_modules"));
    /// assert!(!policy.prunes_directory("src"));
    /// ```
    #[must_use]
    pub fn prunes_directory(&self, name: &str) -> bool {
        self.prune_dirs.contains(name)
    }

    /// Decides whether a file stays out of the archive.
    ///
    /// Rules are checked in order, first match wins:
    /// 1. any component of the path relative to `root` is a pruned
    ///    directory name,
    /// 2. the file's base name is a skip name,
    /// 3. the file's extension is a skip extension,
    /// 4. the file's extension is the archive format's own extension.
    ///
    /// Paths not under `root` are checked component-by-component as given.
    /// No side effects.
    #[must_use]
    pub fn should_exclude(&self, path: &Path, root: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);

        // Mirrors the directory-level pruning for callers that evaluate a
        // path without walking: the final component participates too, so a
        // file named like a pruned directory is excluded.
        for component in relative.components() {
            if let Some(name) = component.as_os_str().to_str()
                && self.prune_dirs.contains(name)
            {
                return true;
            }
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && self.skip_names.contains(name)
        {
            return true;
        }

        if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
            if self.skip_extensions.contains(extension) {
                return true;
            }
            if extension == ARCHIVE_EXTENSION {
                return true;
            }
        }

        false
    }
}
