use thiserror::Error;

/// Failure modes for a single file's analysis.
///
/// Each input file is analyzed independently; a failed file is reported and
/// never stops the remaining inputs from being processed.
#[derive(Debug, Error)]
pub enum ReportError {
    /// File missing or unreadable, or the expected latency column is absent.
    #[error("{file}: {reason}")]
    DataFormat { file: String, reason: String },

    /// Zero data rows: nothing to average or interpolate against.
    #[error("empty sample: no data rows to analyze")]
    EmptySample,

    /// Non-numeric cell in the latency column.
    #[error("{file}: data row {row}: invalid latency value {value:?}")]
    Parse {
        file: String,
        row: usize,
        value: String,
    },
}
