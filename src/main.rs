//! CLI entry point for the student statistics tool.
//!
//! Loads a CSV of student records, computes class statistics, and writes a
//! text report.

use anyhow::Result;
use clap::Parser;
use std::ffi::OsStr;
use std::path::Path;
use student_stats::{
    output::{append_report, notify_saved, render_report, write_report},
    parser::parse_records_counted,
    source::load_source,
    stats::ClassStats,
};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "student_stats")]
#[command(about = "A tool to analyze student record CSVs", long_about = None)]
struct Cli {
    /// Path to the student records CSV
    #[arg(value_name = "FILE", default_value = "data/students.csv")]
    input: String,

    /// File to write the report to
    #[arg(short, long, default_value = "output/analysis_report.txt")]
    output: String,

    /// Append the report after existing content instead of overwriting
    #[arg(long, default_value_t = false)]
    append: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/student_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("student_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let text = load_source(&cli.input)?;
    let (records, skipped) = parse_records_counted(&text)?;
    if skipped > 0 {
        info!(skipped, "Dropped malformed rows");
    }

    let stats = ClassStats::from_records(&records);
    info!(
        total_students = stats.total_students,
        average_grade = stats.average_grade,
        "Statistics computed"
    );

    let report = render_report(&stats);
    if cli.append {
        append_report(&cli.output, &report)?;
    } else {
        write_report(&cli.output, &report)?;
    }
    notify_saved(&cli.output);

    Ok(())
}
