//! Report rendering and persistence for class statistics.
//!
//! Rendering is a pure function of [`ClassStats`]; the same input always
//! produces byte-identical text. Persistence supports truncate (default) and
//! append modes, plus a JSON dump.

use anyhow::Result;
use tracing::{debug, info};

use crate::stats::{ClassStats, LETTERS};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Renders the fixed-section text report.
///
/// Sections, in order: title and rule, basic statistics, subject counts
/// (lexicographic, `(none)` when empty), letter-grade distribution in fixed
/// A–F order. The formatter does no aggregation of its own.
pub fn render_report(stats: &ClassStats) -> String {
    let mut out = String::new();

    out.push_str("COMPREHENSIVE STUDENT ANALYSIS REPORT\n");
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");

    out.push_str("BASIC STATISTICS\n");
    out.push_str(&"-".repeat(20));
    out.push('\n');
    out.push_str(&format!("Total students: {}\n", stats.total_students));
    out.push_str(&format!("Average grade: {:.1}\n", stats.average_grade));
    out.push_str(&format!("Highest grade: {}\n", stats.highest_grade));
    out.push_str(&format!("Lowest grade: {}\n", stats.lowest_grade));
    out.push_str(&format!("Grade range: {}\n\n", stats.grade_range));

    out.push_str("SUBJECT COUNTS\n");
    out.push_str(&"-".repeat(20));
    out.push('\n');
    if stats.subject_counts.is_empty() {
        out.push_str("(none)\n");
    } else {
        // BTreeMap iteration is already lexicographic
        for (subject, count) in &stats.subject_counts {
            out.push_str(&format!("{}: {}\n", capitalize(subject), count));
        }
    }
    out.push('\n');

    out.push_str("GRADE DISTRIBUTION (Letter Grades)\n");
    out.push_str(&"-".repeat(35));
    out.push('\n');
    for letter in LETTERS {
        let count = stats.grade_distribution.get(&letter).copied().unwrap_or(0);
        let pct = stats
            .grade_distribution_pct
            .get(&letter)
            .copied()
            .unwrap_or(0.0);
        out.push_str(&format!("{}: {} ({:.1}%)\n", letter.label(), count, pct));
    }

    out
}

/// Uppercases the first character of a subject for display.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Writes the report to `path`, truncating any previous content and creating
/// parent directories as needed. Truncate keeps repeated runs idempotent.
pub fn write_report(path: &str, report: &str) -> Result<()> {
    debug!(path, bytes = report.len(), "Writing report");
    ensure_parent_dir(path)?;
    std::fs::write(path, report)?;
    Ok(())
}

/// Appends the report after any existing content at `path`, creating the file
/// and parent directories as needed.
pub fn append_report(path: &str, report: &str) -> Result<()> {
    debug!(path, bytes = report.len(), "Appending report");
    ensure_parent_dir(path)?;

    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    file.write_all(report.as_bytes())?;
    Ok(())
}

fn ensure_parent_dir(path: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Logs class statistics as pretty-printed JSON.
pub fn print_json(stats: &ClassStats) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(stats)?);
    Ok(())
}

/// Prints the completion message after a successful save.
pub fn notify_saved(path: &str) {
    println!("Report saved to {}", path);
}
