// src/reporting.rs
//! Console and JSON output for validation reports.

use crate::types::ValidationReport;
use anyhow::Result;
use colored::Colorize;

/// Prints the human-readable report: a success banner, or a failure banner
/// followed by one line per violation in discovery order.
pub fn print_report(report: &ValidationReport) {
    if report.passed() {
        println!("{}", "✅ All migrations are valid!".green().bold());
        return;
    }

    println!(
        "{}",
        format!(
            "❌ Migration validation failed ({} {}):",
            report.violation_count(),
            pluralize("violation", report.violation_count())
        )
        .red()
        .bold()
    );
    for violation in &report.violations {
        println!("  {violation}");
    }
}

/// Prints the report as one JSON document on stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(report: &ValidationReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
