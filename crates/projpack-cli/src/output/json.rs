//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use projpack_core::ArchiveReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_file_added(&self, _path: &Path) {
        // Per-file lines are omitted; the final report carries the counts.
    }

    fn format_file_skipped(&self, _path: &Path) {}

    fn format_file_failed(&self, _path: &Path, _reason: &str) {
        // Failures are listed in the final report.
    }

    fn format_report(&self, report: &ArchiveReport) -> Result<()> {
        #[derive(Serialize)]
        struct FailureOutput {
            path: String,
            reason: String,
        }

        #[derive(Serialize)]
        struct PackOutput {
            archive_path: String,
            archive_size_bytes: u64,
            files_added: usize,
            files_skipped: usize,
            files_failed: usize,
            total_files: usize,
            bytes_written: u64,
            duration_ms: u128,
            failures: Vec<FailureOutput>,
        }

        let data = PackOutput {
            archive_path: report.archive_path.display().to_string(),
            archive_size_bytes: report.archive_size,
            files_added: report.files_added,
            files_skipped: report.files_skipped,
            files_failed: report.files_failed,
            total_files: report.total_files(),
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
            failures: report
                .failures
                .iter()
                .map(|f| FailureOutput {
                    path: f.path.display().to_string(),
                    reason: f.reason.clone(),
                })
                .collect(),
        };

        let output = JsonOutput::success("pack", data);
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("pack", format!("{error:?}"));
        let _ = Self::output(&output);
    }
}
