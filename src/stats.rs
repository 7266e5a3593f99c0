use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Summary statistics of a latency sample, in integer nanoseconds.
///
/// All four values are truncated toward zero from the underlying f64
/// computation, matching how the benchmark's numbers are reported elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub mean_ns: i64,
    pub median_ns: i64,
    pub p95_ns: i64,
    pub p99_ns: i64,
}

/// Percentile by linear interpolation between order statistics at rank
/// `p * (n - 1)`. `sorted` must be ascending and non-empty.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

impl SummaryStats {
    /// Compute mean/median/p95/p99 over a latency sample. The input is not
    /// mutated; sorting happens on a copy.
    pub fn from_samples(samples: &[f64]) -> Result<Self, ReportError> {
        if samples.is_empty() {
            return Err(ReportError::EmptySample);
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        Ok(Self {
            mean_ns: mean as i64,
            median_ns: percentile(&sorted, 0.50) as i64,
            p95_ns: percentile(&sorted, 0.95) as i64,
            p99_ns: percentile(&sorted, 0.99) as i64,
        })
    }
}
