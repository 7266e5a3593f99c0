use std::path::Path;

use crate::error::ReportError;

/// Read the named latency column from a CSV file with a header row.
///
/// Values come back in row order; there is no validation beyond column
/// presence and numeric parsing. Rows with the wrong field count surface as
/// `DataFormat`, non-numeric cells as `Parse` with a 1-based data row number.
pub fn load_samples(path: &Path, column: &str) -> Result<Vec<f64>, ReportError> {
    let file = path.display().to_string();
    let mut rdr = csv::Reader::from_path(path).map_err(|e| ReportError::DataFormat {
        file: file.clone(),
        reason: e.to_string(),
    })?;

    let headers = rdr
        .headers()
        .map_err(|e| ReportError::DataFormat {
            file: file.clone(),
            reason: e.to_string(),
        })?
        .clone();
    let idx = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| ReportError::DataFormat {
            file: file.clone(),
            reason: format!("missing required column {column:?}"),
        })?;

    let mut samples = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| ReportError::DataFormat {
            file: file.clone(),
            reason: e.to_string(),
        })?;
        let cell = record.get(idx).unwrap_or("");
        let ns: f64 = cell.trim().parse().map_err(|_| ReportError::Parse {
            file: file.clone(),
            row: i + 1,
            value: cell.to_string(),
        })?;
        samples.push(ns);
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn loads_column_in_row_order() {
        let f = write_csv("latency_ns\n300\n100\n200\n");
        let samples = load_samples(f.path(), "latency_ns").unwrap();
        assert_eq!(samples, vec![300.0, 100.0, 200.0]);
    }

    #[test]
    fn picks_the_named_column_among_others() {
        let f = write_csv("op,latency_ns\nset,1500\nset,2500.5\n");
        let samples = load_samples(f.path(), "latency_ns").unwrap();
        assert_eq!(samples, vec![1500.0, 2500.5]);
    }

    #[test]
    fn header_only_file_yields_empty_sample() {
        let f = write_csv("latency_ns\n");
        let samples = load_samples(f.path(), "latency_ns").unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn missing_column_names_the_file() {
        let f = write_csv("duration_ms\n12\n");
        let err = load_samples(f.path(), "latency_ns").unwrap_err();
        match err {
            ReportError::DataFormat { ref file, ref reason } => {
                assert_eq!(file, &f.path().display().to_string());
                assert!(reason.contains("latency_ns"));
            }
            other => panic!("expected DataFormat, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_a_data_format_error() {
        let err = load_samples(Path::new("no_such_file.csv"), "latency_ns").unwrap_err();
        assert!(matches!(err, ReportError::DataFormat { .. }));
    }

    #[test]
    fn non_numeric_cell_reports_the_row() {
        let f = write_csv("latency_ns\n100\nfast\n300\n");
        let err = load_samples(f.path(), "latency_ns").unwrap_err();
        match err {
            ReportError::Parse { row, ref value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(value, "fast");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }
}
