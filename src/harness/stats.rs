//! Descriptive statistics over per-trial timings.

use serde::Serialize;

/// Mean, median and sample standard deviation of one timing sequence, in
/// floating-point seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle value (midpoint of the middle two for even counts).
    pub median: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std_dev: f64,
}

impl Stats {
    /// Summarize a sample sequence.
    pub fn from_samples(samples: &[f64]) -> Self {
        Self {
            mean: mean(samples),
            median: median(samples),
            std_dev: std_dev(samples),
        }
    }
}

/// Arithmetic mean. 0.0 for an empty sequence.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Median: middle element, or the midpoint of the middle two for even counts.
/// 0.0 for an empty sequence.
pub fn median(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Sample standard deviation (n - 1 denominator). 0.0 below two samples.
pub fn std_dev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let m = mean(samples);
    let variance =
        samples.iter().map(|s| (s - m) * (s - m)).sum::<f64>() / (samples.len() - 1) as f64;
    variance.sqrt()
}
