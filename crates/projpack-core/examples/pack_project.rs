//! Packages the current directory into `project_archive.zip`.
//!
//! Run with: `cargo run --example pack_project`

use projpack_core::ArchiveTask;
use projpack_core::ExclusionPolicy;
use projpack_core::create_archive;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let task = ArchiveTask::new(".", None)?;
    let policy = ExclusionPolicy::default();

    let report = create_archive(&task, &policy)?;

    println!("Archive: {}", report.archive_path.display());
    println!("Size: {:.2} MB", report.size_mb());
    println!(
        "Files added: {} / {} total",
        report.files_added,
        report.total_files()
    );
    for failure in &report.failures {
        eprintln!("failed: {}: {}", failure.path.display(), failure.reason);
    }

    Ok(())
}
