//! CSV parser for student record files.
//!
//! Ingestion is best-effort: structurally broken rows are dropped, never
//! surfaced as errors. The counted variant reports how many rows were dropped.

use anyhow::Result;
use csv::{ReaderBuilder, Trim};
use serde::Serialize;
use tracing::debug;

/// A student's age. Rows whose age field is not an integer keep the raw
/// string instead of being dropped; only the grade field is load-bearing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Age {
    Years(i64),
    Raw(String),
}

impl Age {
    fn from_field(field: &str) -> Self {
        match field.parse::<i64>() {
            Ok(years) => Age::Years(years),
            Err(_) => Age::Raw(field.to_string()),
        }
    }
}

/// One validated student row. `subject` is stored lowercased; `grade` is
/// always a parsed integer. Records are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub name: String,
    pub age: Age,
    pub grade: i64,
    pub subject: String,
}

/// Parses comma-separated student records from raw text.
///
/// The first line is treated as a header and discarded regardless of its
/// content. Blank lines, rows with fewer than four fields, and rows whose
/// grade is not a base-10 integer are skipped silently. Trailing empty fields
/// from dangling commas are stripped, and columns past the fourth are ignored.
pub fn parse_records(text: &str) -> Result<Vec<StudentRecord>> {
    let (records, _skipped) = parse_records_counted(text)?;
    Ok(records)
}

/// Like [`parse_records`], but also returns the number of rows that were
/// dropped as malformed. Blank lines do not count as dropped rows.
pub fn parse_records_counted(text: &str) -> Result<(Vec<StudentRecord>, usize)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                debug!(error = %e, "Skipping unreadable row");
                skipped += 1;
                continue;
            }
        };

        let mut fields: Vec<&str> = row.iter().collect();

        // Dangling commas leave empty trailing fields
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }

        if fields.is_empty() {
            continue; // whitespace-only line, not a malformed row
        }

        if fields.len() < 4 {
            debug!(fields = fields.len(), "Skipping row with too few columns");
            skipped += 1;
            continue;
        }

        let grade = match fields[2].parse::<i64>() {
            Ok(grade) => grade,
            Err(_) => {
                debug!(grade = fields[2], "Skipping row with non-integer grade");
                skipped += 1;
                continue;
            }
        };

        records.push(StudentRecord {
            name: fields[0].to_string(),
            age: Age::from_field(fields[1]),
            grade,
            subject: fields[3].to_lowercase(),
        });
    }

    Ok((records, skipped))
}
