use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::loader;
use crate::model::{FileReport, ReportConfig};
use crate::stats::SummaryStats;
use crate::text_summary;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "latency-report",
    version,
    about = "Summary statistics and CDF plots for benchmark latency CSVs"
)]
pub struct Cli {
    /// CSV files to analyze (header row with a nanosecond latency column)
    #[arg(default_values_os_t = [
        PathBuf::from("set_latency.csv"),
        PathBuf::from("get_latency.csv"),
    ])]
    pub inputs: Vec<PathBuf>,

    /// Name of the latency column
    #[arg(long, default_value = "latency_ns")]
    pub column: String,

    /// Print per-file reports as pretty JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Open an interactive CDF viewer after reporting
    #[arg(long)]
    pub plot: bool,
}

/// Build a `ReportConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> ReportConfig {
    ReportConfig {
        column: args.column.clone(),
        inputs: args.inputs.clone(),
    }
}

/// Load one file and compute its summary statistics. Returns the raw samples
/// alongside the report so the CDF viewer can reuse them.
pub fn analyze_file(path: &Path, column: &str) -> Result<(FileReport, Vec<f64>)> {
    let samples = loader::load_samples(path, column)?;
    let stats =
        SummaryStats::from_samples(&samples).with_context(|| path.display().to_string())?;
    let report = FileReport {
        file: path.display().to_string(),
        rows: samples.len(),
        stats,
    };
    Ok((report, samples))
}

/// Analyze each input in order. A failure on one file is reported to stderr
/// and the remaining files still run; the final error only reflects the count.
pub fn run(args: Cli) -> Result<()> {
    let cfg = build_config(&args);
    let mut succeeded: Vec<(FileReport, Vec<f64>)> = Vec::new();
    let mut failures = 0usize;

    for path in &cfg.inputs {
        match analyze_file(path, &cfg.column) {
            Ok((report, samples)) => {
                if !args.json {
                    for line in text_summary::build_file_summary(&report).lines {
                        println!("{line}");
                    }
                }
                succeeded.push((report, samples));
            }
            Err(e) => {
                failures += 1;
                eprintln!("{e:#}");
            }
        }
    }

    if args.json {
        let reports: Vec<&FileReport> = succeeded.iter().map(|(r, _)| r).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    if args.plot && !succeeded.is_empty() {
        plot_cdfs(&succeeded)?;
    }

    if failures > 0 {
        anyhow::bail!(
            "failed to analyze {failures} of {} input file(s)",
            cfg.inputs.len()
        );
    }
    Ok(())
}

#[cfg(feature = "tui")]
fn plot_cdfs(loaded: &[(FileReport, Vec<f64>)]) -> Result<()> {
    use crate::cdf::EmpiricalCdf;
    use crate::tui::CdfView;

    let mut views = Vec::with_capacity(loaded.len());
    for (report, samples) in loaded {
        let cdf = EmpiricalCdf::from_samples(samples).with_context(|| report.file.clone())?;
        views.push(CdfView {
            report: report.clone(),
            cdf,
        });
    }
    crate::tui::run(&views)
}

#[cfg(not(feature = "tui"))]
fn plot_cdfs(_loaded: &[(FileReport, Vec<f64>)]) -> Result<()> {
    anyhow::bail!("this build has no plotting backend; rebuild with the `tui` feature")
}
