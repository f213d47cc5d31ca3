//! Quartile computation on the R-7 definition.
//!
//! Quantiles use linear interpolation on the rank `(n - 1) * p`, the
//! default definition in R and most spreadsheet software, so figures in
//! generated reports match what an analyst reproduces by hand.

use serde::{Deserialize, Serialize};

use super::finite_values;

/// Quartile cut points of a sample.
///
/// Invariant: `q1 <= median <= q3` whenever computed from a non-empty
/// sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    /// 25th percentile.
    pub q1: f64,
    /// 50th percentile.
    pub median: f64,
    /// 75th percentile.
    pub q3: f64,
}

impl Quartiles {
    /// Interquartile range (Q3 - Q1).
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// All-zero sentinel returned for empty samples.
    pub(crate) fn zero() -> Self {
        Self {
            q1: 0.0,
            median: 0.0,
            q3: 0.0,
        }
    }
}

/// Compute a single quantile from pre-sorted data.
///
/// Uses the R-7 definition: linear interpolation on rank `(n - 1) * p`.
///
/// # Arguments
///
/// * `sorted` - Slice sorted in ascending order (not verified)
/// * `p` - Quantile probability in [0, 1]
///
/// # Returns
///
/// The quantile value at probability `p`; 0.0 for an empty slice.
///
/// # Panics
///
/// Panics if `p` is outside [0, 1].
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(
        (0.0..=1.0).contains(&p),
        "quantile probability must be in [0, 1]"
    );

    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return sorted[0];
    }

    let h = (n - 1) as f64 * p;
    let h_floor = h.floor() as usize;
    let h_frac = h - h.floor();

    if h_floor >= n - 1 {
        return sorted[n - 1];
    }
    if h_frac == 0.0 {
        return sorted[h_floor];
    }

    // Linear interpolation between adjacent order statistics
    sorted[h_floor] + h_frac * (sorted[h_floor + 1] - sorted[h_floor])
}

/// Compute Q1/median/Q3 of a sample.
///
/// Non-finite values are dropped first. An empty (or fully non-finite)
/// sample returns the all-zero sentinel rather than panicking, so
/// degenerate cohorts degrade to "0" displays downstream; a singleton
/// sample collapses all three quartiles onto its value.
pub fn quartiles(sample: &[f64]) -> Quartiles {
    let mut values = finite_values(sample);
    if values.is_empty() {
        return Quartiles::zero();
    }
    values.sort_unstable_by(|a, b| a.total_cmp(b));

    Quartiles {
        q1: quantile_sorted(&values, 0.25),
        median: quantile_sorted(&values, 0.5),
        q3: quantile_sorted(&values, 0.75),
    }
}
