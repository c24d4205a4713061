use std::time::Duration;

use itertools::Itertools;
use serde::Serialize;

pub fn millis(duration: &Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

/// Summary statistics of timing samples.
///
/// Quartiles use the median-of-halves rule: Q1 is the median of the lower `n / 2` samples, Q3
/// the median of the samples after the first `(n + 1) / 2`. With a single sample both halves
/// are empty and Q1 = Q3 = that sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
}

impl Summary {
    pub fn of(samples: &[f64]) -> Option<Self> {
        let sorted = samples
            .iter()
            .cloned()
            .sorted_by(|a, b| a.total_cmp(b))
            .collect::<Vec<_>>();
        let n = sorted.len();
        let median = median(&sorted)?;

        let lower = &sorted[..n / 2];
        let upper = &sorted[(n + 1) / 2..];

        Some(Self {
            count: n,
            min: sorted[0],
            max: sorted[n - 1],
            mean: sorted.iter().sum::<f64>() / n as f64,
            median,
            q1: self::median(lower).unwrap_or(median),
            q3: self::median(upper).unwrap_or(median),
        })
    }

    pub fn of_durations(samples: &[Duration]) -> Option<Self> {
        Self::of(&samples.iter().map(millis).collect::<Vec<_>>())
    }
}

/// Median of an already sorted slice.
pub fn median(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        None
    } else if n % 2 == 0 {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Some(sorted[n / 2])
    }
}
