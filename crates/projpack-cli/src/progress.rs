//! Progress bar implementation for CLI operations.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use projpack_core::ProgressCallback;
use std::path::Path;
use std::time::Duration;

/// CLI progress spinner implementing `ProgressCallback`.
///
/// Shows a running file count and accumulated data size while packaging.
/// Automatically cleans up on drop.
pub struct PackProgress {
    bar: ProgressBar,
    bytes_written: u64,
}

impl PackProgress {
    /// Creates a new packaging progress spinner.
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} Packing {pos} files ({msg})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_message("0 B");

        Self {
            bar,
            bytes_written: 0,
        }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }
}

impl Default for PackProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PackProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for PackProgress {
    fn on_file_added(&mut self, _path: &Path, bytes: u64) {
        self.bytes_written += bytes;
        self.bar.set_message(humanize_bytes(self.bytes_written));
        self.bar.inc(1);
    }

    fn on_file_skipped(&mut self, _path: &Path) {
        self.bar.inc(1);
    }

    fn on_file_failed(&mut self, _path: &Path, _reason: &str) {
        self.bar.inc(1);
    }

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Converts bytes to human-readable format (KB, MB, GB).
fn humanize_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
