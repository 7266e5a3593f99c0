//! Text summary builder for CLI output.
//!
//! Formats the per-file report block; printing stays in the CLI layer.

use crate::model::FileReport;

/// Pre-formatted lines for text output.
pub struct TextSummary {
    pub lines: Vec<String>,
}

/// Build the report block for one file: a blank separator line, the file
/// name, then the four integer statistics in nanoseconds.
pub fn build_file_summary(report: &FileReport) -> TextSummary {
    let lines = vec![
        String::new(),
        report.file.clone(),
        format!("Mean (ns): {}", report.stats.mean_ns),
        format!("Median (ns): {}", report.stats.median_ns),
        format!("P95 (ns): {}", report.stats.p95_ns),
        format!("P99 (ns): {}", report.stats.p99_ns),
    ];
    TextSummary { lines }
}
