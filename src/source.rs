//! Input loading for student record files.
//!
//! Dispatches on file extension; only comma-separated `.csv` sources are
//! supported. Row-level tolerance lives in the parser — failures here
//! (bad extension, unreadable path) are fatal to the run.

use anyhow::{Context, Result, bail};
use std::ffi::OsStr;
use std::path::Path;
use tracing::debug;

/// Reads raw UTF-8 text from a `.csv` file.
///
/// # Errors
///
/// Returns a descriptive error when the extension is not `csv` or the file
/// cannot be read.
pub fn load_source(path: &str) -> Result<String> {
    let ext = Path::new(path)
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or("");

    if !ext.eq_ignore_ascii_case("csv") {
        bail!("Unsupported file type for {path:?} (expected .csv)");
    }

    debug!(path, "Reading input file");
    std::fs::read_to_string(path).with_context(|| format!("Failed to read input file {path:?}"))
}
