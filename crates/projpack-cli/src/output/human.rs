//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use projpack_core::ArchiveReport;
use std::path::Path;

const SUMMARY_RULE: &str =
    "============================================================";

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    /// Archive size in megabytes, two decimal places.
    fn format_size_mb(bytes: u64) -> String {
        format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_file_added(&self, path: &Path) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "  {}  {}",
                style("[ADD]").green(),
                path.display()
            ));
        } else {
            let _ = self.term.write_line(&format!("  [ADD]  {}", path.display()));
        }
    }

    fn format_file_skipped(&self, path: &Path) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "  {} {}",
                style("[SKIP]").dim(),
                path.display()
            ));
        } else {
            let _ = self.term.write_line(&format!("  [SKIP] {}", path.display()));
        }
    }

    fn format_file_failed(&self, path: &Path, reason: &str) {
        // Always show per-file errors, even in quiet mode
        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "  {} Failed to add {}: {reason}",
                style("[ERROR]").red().bold(),
                path.display()
            ));
        } else {
            let _ = self.term.write_line(&format!(
                "  [ERROR] Failed to add {}: {reason}",
                path.display()
            ));
        }
    }

    fn format_report(&self, report: &ArchiveReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let _ = self.term.write_line("");
        let _ = self.term.write_line(SUMMARY_RULE);
        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} Archive created successfully!",
                style("✓").green().bold()
            ));
        } else {
            let _ = self.term.write_line("Archive created successfully!");
        }
        let _ = self
            .term
            .write_line(&format!("Location: {}", report.archive_path.display()));
        let _ = self
            .term
            .write_line(&format!("Size: {}", Self::format_size_mb(report.archive_size)));
        let _ = self.term.write_line(&format!(
            "Files added: {} / {} total",
            report.files_added,
            report.total_files()
        ));

        if report.files_failed > 0 {
            let _ = self
                .term
                .write_line(&format!("Files failed: {}", report.files_failed));
        }

        if self.verbose {
            let _ = self.term.write_line(&format!(
                "Bytes written (uncompressed): {}",
                report.bytes_written
            ));
            let _ = self
                .term
                .write_line(&format!("Duration: {:?}", report.duration));
        }

        let _ = self.term.write_line(SUMMARY_RULE);

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {error:?}", style("[ERROR]").red().bold()));
        } else {
            let _ = self.term.write_line(&format!("[ERROR] {error:?}"));
        }
    }
}
