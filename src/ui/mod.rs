//! Terminal output for command results
//!
//! Reports are printed to stdout with `console` styling; paths are shown relative to
//! the project root.

use console::Style;
use std::path::Path;

use crate::common::path_key::relative_to;
use crate::error::BundlerError;
use crate::report::{
    FileFailure, GenerateMode, GenerateReport, PurgeOutcome, TreeBackupReport, UnbundleReport,
};

fn shown(root: &Path, path: &Path) -> String {
    let relative = relative_to(root, path);
    if relative.is_empty() {
        ".".to_string()
    } else {
        relative
    }
}

fn success(message: &str) {
    println!("{} {}", Style::new().green().bold().apply_to("✔"), message);
}

fn print_failures(label: &str, failures: &[FileFailure]) {
    if failures.is_empty() {
        return;
    }
    println!("  {}", Style::new().bold().red().apply_to(label));
    for failure in failures {
        println!(
            "    - {} {}",
            Style::new().cyan().apply_to(&failure.path),
            Style::new().dim().apply_to(&failure.error)
        );
    }
}

fn print_skipped(label: &str, skipped: &[BundlerError]) {
    if skipped.is_empty() {
        return;
    }
    println!("  {}", Style::new().bold().yellow().apply_to(label));
    for error in skipped {
        println!("    - {}", Style::new().dim().apply_to(error));
    }
}

/// Summary of `generate` / `update`
pub fn print_generate_report(root: &Path, report: &GenerateReport) {
    if let Some(ref reason) = report.fallback_reason {
        println!(
            "{} {}",
            Style::new().yellow().bold().apply_to("!"),
            Style::new().yellow().apply_to(format!(
                "Existing bundle could not be merged, regenerated it ({reason})"
            ))
        );
    }

    let verb = match report.mode {
        GenerateMode::Overwrite => "Generated",
        GenerateMode::Incremental => "Updated",
    };
    success(&format!(
        "{} {} with {} entr{}",
        verb,
        Style::new().bold().apply_to(shown(root, &report.bundle_path)),
        report.total_entries,
        if report.total_entries == 1 { "y" } else { "ies" }
    ));
    println!(
        "  {} tracked file(s) found, {} not readable",
        report.discovered,
        report.failed.len()
    );

    if report.mode == GenerateMode::Incremental {
        println!(
            "  {} added, {} updated, {} unchanged",
            report.added, report.updated, report.unchanged
        );
    }
    if let Some(ref backup) = report.backup {
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Previous bundle saved to:"),
            shown(root, backup)
        );
    }

    print_failures("Not bundled:", &report.failed);
    print_skipped("Kept incomplete, fix before writing back:", &report.incomplete);
}

/// Summary of a completed write-back
pub fn print_unbundle_report(root: &Path, report: &UnbundleReport) {
    success(&format!(
        "Wrote {} file(s) back ({} new)",
        report.written_count(),
        report.created_count()
    ));

    for written in &report.written {
        let note = match written.backup {
            Some(ref backup) => format!("backup: {}", shown(root, backup)),
            None => "new".to_string(),
        };
        println!(
            "    - {} {}",
            Style::new().cyan().apply_to(shown(root, &written.path)),
            Style::new().dim().apply_to(format!("({note})"))
        );
    }

    print_skipped("Skipped entries:", &report.skipped);
    print_failures("Failed:", &report.failed);
}

/// Summary of a full-tree backup
pub fn print_tree_backup(root: &Path, report: &TreeBackupReport) {
    success(&format!(
        "Backed up {} file(s) to {}",
        report.copied,
        Style::new().bold().apply_to(shown(root, &report.directory))
    ));
    print_failures("Not copied:", &report.failed);
}

/// Result of a purge request
pub fn print_purge(root: &Path, outcome: &PurgeOutcome) {
    match outcome {
        PurgeOutcome::Purged { path } => {
            success(&format!("Deleted backup store {}", shown(root, path)));
        }
        PurgeOutcome::NothingToPurge => println!("No backups to delete."),
        PurgeOutcome::Cancelled => print_cancelled(),
    }
}

pub fn print_cancelled() {
    println!("{}", Style::new().dim().apply_to("Cancelled, nothing changed."));
}

/// "Nothing to do" outcomes, shown as information rather than failure
pub fn print_notice(error: &BundlerError) {
    println!(
        "{} {}",
        Style::new().cyan().bold().apply_to("i"),
        error
    );
}

/// Errors inside the interactive menu, which keeps running afterwards
pub fn print_error(error: &BundlerError) {
    println!(
        "{} {}",
        Style::new().red().bold().apply_to("Error:"),
        error
    );
}
