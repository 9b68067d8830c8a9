//! Archive creation: the traversal → filter → writer pass.

use crate::error::ArchiveError;
use crate::error::Result;
use crate::policy::ExclusionPolicy;
use crate::report::ArchiveReport;
use crate::report::FileOutcome;
use crate::report::NoopProgress;
use crate::report::ProgressCallback;
use crate::task::ArchiveTask;
use crate::walker::FilteredWalker;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Reusable copy buffer size.
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Packages the task's root directory into a deflate-compressed archive.
///
/// Walks the tree depth-first, consults the policy per file, and appends
/// included files under their root-relative paths. Per-file failures are
/// recorded in the report and never abort the run; only a failure to
/// create or finalize the archive itself propagates.
///
/// # Examples
///
/// ```no_run
/// use projpack_core::ArchiveTask;
/// use projpack_core::ExclusionPolicy;
/// use projpack_core::create_archive;
///
/// let task = ArchiveTask::new(".", None)?;
/// let report = create_archive(&task, &ExclusionPolicy::default())?;
/// println!(
///     "packed {} of {} files into {}",
///     report.files_added,
///     report.total_files(),
///     report.archive_path.display()
/// );
/// # Ok::<(), projpack_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// Returns an error if the output archive cannot be created or finalized.
pub fn create_archive(task: &ArchiveTask, policy: &ExclusionPolicy) -> Result<ArchiveReport> {
    let mut progress = NoopProgress;
    create_archive_with_progress(task, policy, &mut progress)
}

/// Packages the task's root directory, reporting each file outcome.
///
/// Identical to [`create_archive`] but invokes the callback once per
/// evaluated file and once on completion.
///
/// # Errors
///
/// Returns an error if the output archive cannot be created or finalized.
pub fn create_archive_with_progress(
    task: &ArchiveTask,
    policy: &ExclusionPolicy,
    progress: &mut dyn ProgressCallback,
) -> Result<ArchiveReport> {
    let start = Instant::now();

    let file = File::create(&task.output).map_err(|source| ArchiveError::OutputUnavailable {
        path: task.output.clone(),
        source,
    })?;
    let mut zip = ZipWriter::new(file);
    let options = file_options(task.compression_level);

    // The output exists now; its canonical form is what the walker will
    // yield if the archive lands inside the root.
    let output_path = task
        .output
        .canonicalize()
        .unwrap_or_else(|_| task.output.clone());

    let mut report = ArchiveReport::new(output_path.clone());
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

    let walker = FilteredWalker::new(&task.root, policy);
    for candidate in walker.walk() {
        let path = match candidate {
            Ok(path) => path,
            Err(e) => {
                let path = e
                    .path()
                    .map_or_else(|| task.root.clone(), Path::to_path_buf);
                let reason = e.to_string();
                progress.on_file_failed(&path, &reason);
                report.record(&path, FileOutcome::Failed { reason });
                continue;
            }
        };

        // The in-progress archive must never pack itself, whatever its
        // extension.
        if path == output_path {
            progress.on_file_skipped(&path);
            report.record(&path, FileOutcome::Skipped);
            continue;
        }

        if policy.should_exclude(&path, &task.root) {
            progress.on_file_skipped(&path);
            report.record(&path, FileOutcome::Skipped);
            continue;
        }

        match add_file(&mut zip, &path, &task.root, options, &mut buffer) {
            Ok(bytes) => {
                progress.on_file_added(&path, bytes);
                report.record(&path, FileOutcome::Added { bytes });
            }
            Err(e) => {
                let reason = e.to_string();
                progress.on_file_failed(&path, &reason);
                report.record(&path, FileOutcome::Failed { reason });
            }
        }
    }

    zip.finish()
        .map_err(|e| std::io::Error::other(format!("failed to finish archive: {e}")))?;

    report.archive_size = fs::metadata(&output_path)?.len();
    report.duration = start.elapsed();
    progress.on_complete();

    Ok(report)
}

/// Appends one file to the archive, returning the bytes copied.
///
/// A failure after the entry header was started aborts the partial entry
/// so the container stays consistent for the files that follow.
fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    path: &Path,
    root: &Path,
    options: SimpleFileOptions,
    buffer: &mut [u8],
) -> Result<u64> {
    let name = entry_name(path, root)?;
    let mut file = File::open(path)?;
    let metadata = file.metadata()?;

    let file_options = {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            options.unix_permissions(metadata.permissions().mode())
        }
        #[cfg(not(unix))]
        {
            let _ = &metadata;
            options
        }
    };

    zip.start_file(name.as_str(), file_options)
        .map_err(|e| std::io::Error::other(format!("failed to start entry {name}: {e}")))?;

    let mut bytes_written = 0u64;
    loop {
        let bytes_read = match file.read(buffer) {
            Ok(n) => n,
            Err(e) => {
                let _ = zip.abort_file();
                return Err(e.into());
            }
        };
        if bytes_read == 0 {
            break;
        }
        if let Err(e) = zip.write_all(&buffer[..bytes_read]) {
            let _ = zip.abort_file();
            return Err(e.into());
        }
        bytes_written += bytes_read as u64;
    }

    Ok(bytes_written)
}

/// Computes the root-relative entry name with forward-slash separators.
fn entry_name(path: &Path, root: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| ArchiveError::OutsideRoot {
            path: path.to_path_buf(),
        })?;

    let name = relative.to_str().ok_or_else(|| ArchiveError::NonUtf8Path {
        path: path.to_path_buf(),
    })?;

    #[cfg(windows)]
    let name = name.replace('\\', "/");

    #[cfg(not(windows))]
    let name = name.to_string();

    Ok(name)
}

fn file_options(compression_level: Option<u8>) -> SimpleFileOptions {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    match compression_level {
        Some(level) => options.compression_level(Some(i64::from(level))),
        None => options,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::report::FileFailure;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn entry_names(archive: &Path) -> Vec<String> {
        let file = File::open(archive).unwrap();
        let mut zip = zip::ZipArchive::new(file).unwrap();
        let mut names: Vec<String> = (0..zip.len())
            .map(|i| zip.by_index(i).unwrap().name().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_create_archive_basic_tree() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("main.rs"), "fn main() {}").unwrap();
        fs::create_dir(root.join("src")).unwrap();
        fs::write(root.join("src/lib.rs"), "pub fn lib() {}").unwrap();

        let task = ArchiveTask::new(root, None).unwrap();
        let report = create_archive(&task, &ExclusionPolicy::default()).unwrap();

        assert_eq!(report.files_added, 2);
        assert_eq!(report.files_skipped, 0);
        assert_eq!(report.files_failed, 0);
        assert!(report.bytes_written > 0);
        assert!(report.archive_size > 0);
        assert_eq!(
            entry_names(&report.archive_path),
            vec!["main.rs", "src/lib.rs"]
        );
    }

    #[test]
    fn test_create_archive_applies_policy() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("keep.txt"), "keep").unwrap();
        fs::write(root.join(".DS_Store"), "cruft").unwrap();
        fs::write(root.join("mod.pyc"), "bytecode").unwrap();

        let task = ArchiveTask::new(root, None).unwrap();
        let report = create_archive(&task, &ExclusionPolicy::default()).unwrap();

        assert_eq!(report.files_added, 1);
        assert_eq!(report.files_skipped, 2);
        assert_eq!(report.total_files(), 3);
        assert_eq!(entry_names(&report.archive_path), vec!["keep.txt"]);
    }

    #[test]
    fn test_create_archive_empty_directory() {
        let temp = TempDir::new().unwrap();
        let task = ArchiveTask::new(temp.path(), None).unwrap();
        let report = create_archive(&task, &ExclusionPolicy::default()).unwrap();

        assert_eq!(report.total_files(), 0);
        assert!(report.archive_size > 0);
        assert!(entry_names(&report.archive_path).is_empty());
    }

    #[test]
    fn test_create_archive_excludes_itself() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("data.txt"), "data").unwrap();

        // Output lands inside the root; identity check keeps it out even
        // before the extension rule would.
        let task = ArchiveTask::new(root, Some("bundle")).unwrap();
        let report = create_archive(&task, &ExclusionPolicy::default()).unwrap();

        assert_eq!(entry_names(&report.archive_path), vec!["data.txt"]);
    }

    #[test]
    fn test_create_archive_output_unavailable_is_structural() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("file.txt"), "x").unwrap();

        let task = ArchiveTask::with_output(
            temp.path(),
            PathBuf::from("/nonexistent/dir/out.zip"),
        )
        .unwrap();
        let result = create_archive(&task, &ExclusionPolicy::default());

        assert!(matches!(
            result.unwrap_err(),
            ArchiveError::OutputUnavailable { .. }
        ));
    }

    #[test]
    fn test_progress_callback_sees_every_outcome() {
        #[derive(Default)]
        struct Recording {
            added: Vec<PathBuf>,
            skipped: Vec<PathBuf>,
            failed: Vec<FileFailure>,
            completed: bool,
        }

        impl ProgressCallback for Recording {
            fn on_file_added(&mut self, path: &Path, _bytes: u64) {
                self.added.push(path.to_path_buf());
            }

            fn on_file_skipped(&mut self, path: &Path) {
                self.skipped.push(path.to_path_buf());
            }

            fn on_file_failed(&mut self, path: &Path, reason: &str) {
                self.failed.push(FileFailure {
                    path: path.to_path_buf(),
                    reason: reason.to_string(),
                });
            }

            fn on_complete(&mut self) {
                self.completed = true;
            }
        }

        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join("b.pyc"), "b").unwrap();

        let task = ArchiveTask::new(root, None).unwrap();
        let mut progress = Recording::default();
        let report =
            create_archive_with_progress(&task, &ExclusionPolicy::default(), &mut progress)
                .unwrap();

        assert_eq!(progress.added.len(), report.files_added);
        assert_eq!(progress.skipped.len(), report.files_skipped);
        assert_eq!(progress.failed.len(), report.files_failed);
        assert!(progress.completed);
    }

    #[test]
    fn test_entry_name_relative_forward_slashes() {
        let root = Path::new("/home/user/project");
        let name = entry_name(Path::new("/home/user/project/src/main.rs"), root).unwrap();
        assert_eq!(name, "src/main.rs");
    }

    #[test]
    fn test_entry_name_outside_root() {
        let root = Path::new("/home/user/project");
        let result = entry_name(Path::new("/home/other/file.txt"), root);
        assert!(matches!(
            result.unwrap_err(),
            ArchiveError::OutsideRoot { .. }
        ));
    }

    #[test]
    fn test_create_archive_compression_level() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("repetitive.txt"), "a".repeat(10_000)).unwrap();

        let task = ArchiveTask::new(root, None)
            .unwrap()
            .with_compression_level(9);
        let report = create_archive(&task, &ExclusionPolicy::default()).unwrap();

        assert_eq!(report.files_added, 1);
        assert_eq!(report.bytes_written, 10_000);
        // Deflate collapses the repeated byte run well below the input.
        assert!(report.archive_size < 1_000);
    }
}
