use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::stats::SummaryStats;

/// Analysis configuration assembled from CLI arguments.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Name of the CSV column holding nanosecond latencies.
    pub column: String,
    /// Input files, analyzed strictly in order.
    pub inputs: Vec<PathBuf>,
}

/// Per-file analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub file: String,
    pub rows: usize,
    pub stats: SummaryStats,
}
