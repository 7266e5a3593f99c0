use crate::error::ReportError;

/// Empirical CDF of a latency sample.
///
/// Sorted latency values in microseconds, each paired with the fraction of
/// samples strictly below it: point `i` (0-indexed) carries `i / n`, so the
/// y-sequence is the staircase `0, 1/n, ..., (n-1)/n`. Purely a value; the
/// rendering backend only consumes [`points`](Self::points).
#[derive(Debug, Clone)]
pub struct EmpiricalCdf {
    points: Vec<(f64, f64)>,
}

impl EmpiricalCdf {
    /// Build the CDF from a sample in nanoseconds. The input is not mutated.
    pub fn from_samples(samples: &[f64]) -> Result<Self, ReportError> {
        if samples.is_empty() {
            return Err(ReportError::EmptySample);
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let n = sorted.len() as f64;
        let points = sorted
            .iter()
            .enumerate()
            .map(|(i, ns)| (ns / 1000.0, i as f64 / n))
            .collect();
        Ok(Self { points })
    }

    /// `(latency_us, fraction)` pairs, x ascending.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Smallest and largest latency in microseconds.
    pub fn x_bounds(&self) -> (f64, f64) {
        // Non-empty by construction.
        (self.points[0].0, self.points[self.points.len() - 1].0)
    }
}
