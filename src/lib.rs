//! Offline analysis of benchmark latency measurements.
//!
//! Reads CSV files with a `latency_ns` column (one value per benchmarked
//! operation), reports mean/median/p95/p99 per file, and can render the
//! empirical CDF of each sample as an interactive chart.

pub mod cdf;
pub mod cli;
pub mod error;
pub mod loader;
pub mod model;
pub mod stats;
pub mod text_summary;
#[cfg(feature = "tui")]
pub mod tui;
