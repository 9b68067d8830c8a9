//! Pack command implementation.

use crate::cli::Cli;
use crate::error::add_pack_context;
use crate::error::convert_archive_error;
use crate::output::OutputFormatter;
use crate::progress::PackProgress;
use anyhow::Result;
use projpack_core::ArchiveTask;
use projpack_core::ExclusionPolicy;
use projpack_core::ProgressCallback;
use projpack_core::create_archive_with_progress;
use std::path::Path;
use std::path::PathBuf;

pub fn execute(args: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let dir = args
        .dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let policy = build_policy(args);

    let mut task = ArchiveTask::new(&dir, args.output.as_deref())
        .map_err(|e| convert_archive_error(e, &dir))?;
    task.compression_level = args.compression_level;

    // A bar replaces the per-file lines only on an interactive terminal;
    // JSON mode never draws one.
    let report = if args.progress && !args.json && PackProgress::should_show() {
        let mut progress = PackProgress::new();
        add_pack_context(
            create_archive_with_progress(&task, &policy, &mut progress),
            &dir,
        )?
    } else {
        let mut lines = EntryLines {
            formatter,
            root: task.root.clone(),
        };
        add_pack_context(
            create_archive_with_progress(&task, &policy, &mut lines),
            &dir,
        )?
    };

    formatter.format_report(&report)?;

    Ok(())
}

fn build_policy(args: &Cli) -> ExclusionPolicy {
    let mut policy = ExclusionPolicy::default();
    for name in &args.exclude_dir {
        policy = policy.prune_dir(name);
    }
    for name in &args.skip_name {
        policy = policy.skip_name(name);
    }
    for ext in &args.skip_ext {
        policy = policy.skip_extension(ext.trim_start_matches('.'));
    }
    policy
}

/// Bridges core progress events to per-file console lines, displaying
/// paths relative to the project root.
struct EntryLines<'a> {
    formatter: &'a dyn OutputFormatter,
    root: PathBuf,
}

impl EntryLines<'_> {
    fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

impl ProgressCallback for EntryLines<'_> {
    fn on_file_added(&mut self, path: &Path, _bytes: u64) {
        self.formatter.format_file_added(self.relative(path));
    }

    fn on_file_skipped(&mut self, path: &Path) {
        self.formatter.format_file_skipped(self.relative(path));
    }

    fn on_file_failed(&mut self, path: &Path, reason: &str) {
        self.formatter.format_file_failed(self.relative(path), reason);
    }

    fn on_complete(&mut self) {}
}
