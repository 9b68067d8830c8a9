//! Directory traversal with prune-set filtering.
//!
//! Pruned directories are rejected before descent, so their contents are
//! never visited and never show up as individually evaluated files.

use crate::policy::ExclusionPolicy;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Walks a directory tree, yielding files outside pruned subtrees.
///
/// Directories themselves are consumed by the walk and never yielded; the
/// archive format needs no directory entries. Symlinks are not followed.
///
/// # Examples
///
/// ```no_run
/// use projpack_core::ExclusionPolicy;
/// use projpack_core::walker::FilteredWalker;
/// use std::path::Path;
///
/// let policy = ExclusionPolicy::default();
/// let walker = FilteredWalker::new(Path::new("./project"), &policy);
///
/// for file in walker.walk() {
///     println!("candidate: {}", file?.display());
/// }
/// # Ok::<(), walkdir::Error>(())
/// ```
pub struct FilteredWalker<'a> {
    root: &'a Path,
    policy: &'a ExclusionPolicy,
}

impl<'a> FilteredWalker<'a> {
    /// Creates a walker for the given root directory.
    #[must_use]
    pub fn new(root: &'a Path, policy: &'a ExclusionPolicy) -> Self {
        Self { root, policy }
    }

    /// Returns an iterator over candidate files.
    ///
    /// Files are yielded in whatever order the filesystem enumerates them;
    /// the order carries no meaning. Errors (an unreadable directory, a
    /// vanished entry) are yielded in place so the caller can record them
    /// without aborting the walk.
    pub fn walk(&self) -> impl Iterator<Item = walkdir::Result<PathBuf>> + '_ {
        WalkDir::new(self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| self.descend(entry))
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_dir() => None,
                Ok(entry) => Some(Ok(entry.into_path())),
                Err(e) => Some(Err(e)),
            })
    }

    /// Decides whether the walk enters an entry. The root itself is always
    /// entered, even if its own name is in the prune set.
    fn descend(&self, entry: &walkdir::DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        entry
            .file_name()
            .to_str()
            .is_none_or(|name| !self.policy.prunes_directory(name))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn walk_names(root: &Path, policy: &ExclusionPolicy) -> Vec<String> {
        let walker = FilteredWalker::new(root, policy);
        let mut names: Vec<String> = walker
            .walk()
            .map(|entry| {
                entry
                    .unwrap()
                    .strip_prefix(root)
                    .unwrap()
                    .to_str()
                    .unwrap()
                    .to_string()
            })
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_walk_yields_files_only() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::write(root.join("file1.txt"), "one").unwrap();
        fs::create_dir(root.join("subdir")).unwrap();
        fs::write(root.join("subdir/file2.txt"), "two").unwrap();

        let policy = ExclusionPolicy::default();
        let names = walk_names(root, &policy);

        assert_eq!(names, vec!["file1.txt", "subdir/file2.txt"]);
    }

    #[test]
    fn test_walk_never_enters_pruned_dirs() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::write(root.join("keep.rs"), "code").unwrap();
        fs::create_dir_all(root.join("target/debug")).unwrap();
        fs::write(root.join("target/debug/app"), "binary").unwrap();
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join(".git/config"), "git").unwrap();

        let policy = ExclusionPolicy::default();
        let names = walk_names(root, &policy);

        assert_eq!(names, vec!["keep.rs"]);
    }

    #[test]
    fn test_walk_prunes_nested_dirs() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir_all(root.join("a/b/node_modules/pkg")).unwrap();
        fs::write(root.join("a/b/node_modules/pkg/index.js"), "js").unwrap();
        fs::write(root.join("a/b/app.js"), "js").unwrap();

        let policy = ExclusionPolicy::default();
        let names = walk_names(root, &policy);

        assert_eq!(names, vec!["a/b/app.js"]);
    }

    #[test]
    fn test_walk_keeps_non_pruned_hidden_dirs() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join(".github")).unwrap();
        fs::write(root.join(".github/ci.yml"), "yaml").unwrap();
        fs::write(root.join(".gitignore"), "target/").unwrap();

        let policy = ExclusionPolicy::default();
        let names = walk_names(root, &policy);

        assert_eq!(names, vec![".github/ci.yml", ".gitignore"]);
    }

    #[test]
    fn test_walk_yields_skip_candidates_for_evaluation() {
        // Name- and extension-excluded files are still walked; the archiver
        // decides, so skips are counted per file.
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::write(root.join(".DS_Store"), "cruft").unwrap();
        fs::write(root.join("cache.pyc"), "bytecode").unwrap();

        let policy = ExclusionPolicy::default();
        let names = walk_names(root, &policy);

        assert_eq!(names, vec![".DS_Store", "cache.pyc"]);
    }

    #[test]
    fn test_walk_enters_root_named_like_pruned_dir() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("target");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("inside.txt"), "still packaged").unwrap();

        let policy = ExclusionPolicy::default();
        let names = walk_names(&root, &policy);

        assert_eq!(names, vec!["inside.txt"]);
    }

    #[test]
    fn test_walk_empty_directory() {
        let temp = TempDir::new().unwrap();
        let policy = ExclusionPolicy::default();
        let names = walk_names(temp.path(), &policy);
        assert!(names.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_does_not_follow_symlinked_dirs() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("real")).unwrap();
        fs::write(root.join("real/data.txt"), "data").unwrap();
        std::os::unix::fs::symlink(root.join("real"), root.join("alias")).unwrap();

        let policy = ExclusionPolicy::default();
        let names = walk_names(root, &policy);

        // The symlink is yielded as a file candidate, not traversed.
        assert_eq!(names, vec!["alias", "real/data.txt"]);
    }
}
