//! Central tendency, dispersion, and shape measures.
//!
//! All dispersion figures use the population divisor `n`: evaluation
//! cohorts are complete observed groups, not samples drawn from a larger
//! population.

use serde::{Deserialize, Serialize};

use super::finite_values;

/// Full descriptive summary of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveSummary {
    /// Number of finite observations.
    pub n: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
    /// Third standardized moment.
    pub skewness: f64,
    /// Excess kurtosis (normal data scores near 0).
    pub kurtosis: f64,
}

impl DescriptiveSummary {
    /// All-zero sentinel returned for empty samples.
    pub(crate) fn empty() -> Self {
        Self {
            n: 0,
            mean: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            skewness: 0.0,
            kurtosis: 0.0,
        }
    }
}

/// Arithmetic mean. An empty (or fully non-finite) sample returns 0.
pub fn mean(sample: &[f64]) -> f64 {
    mean_raw(&finite_values(sample))
}

/// Population standard deviation (divisor `n`). Empty samples return 0.
pub fn std_dev(sample: &[f64]) -> f64 {
    std_dev_raw(&finite_values(sample))
}

/// Third standardized moment.
///
/// Positive values mean a longer right tail. Zero deviation returns 0,
/// never NaN.
pub fn skewness(sample: &[f64]) -> f64 {
    standardized_moment(&finite_values(sample), 3)
}

/// Excess kurtosis (fourth standardized moment minus 3).
///
/// Normal data scores near 0; heavier tails score positive. Zero
/// deviation returns 0, never NaN.
pub fn kurtosis(sample: &[f64]) -> f64 {
    let values = finite_values(sample);
    if std_dev_raw(&values) == 0.0 {
        return 0.0;
    }
    standardized_moment(&values, 4) - 3.0
}

/// Compute the full descriptive summary in one pass over the filtered
/// sample.
pub fn summarize(sample: &[f64]) -> DescriptiveSummary {
    let values = finite_values(sample);
    if values.is_empty() {
        return DescriptiveSummary::empty();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in &values {
        min = min.min(v);
        max = max.max(v);
    }

    let sd = std_dev_raw(&values);
    let kurtosis = if sd == 0.0 {
        0.0
    } else {
        standardized_moment(&values, 4) - 3.0
    };

    DescriptiveSummary {
        n: values.len(),
        mean: mean_raw(&values),
        std_dev: sd,
        min,
        max,
        skewness: standardized_moment(&values, 3),
        kurtosis,
    }
}

fn mean_raw(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn std_dev_raw(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean_raw(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Mean of `((x - mean) / sd)^order`; 0 when the deviation is 0.
fn standardized_moment(values: &[f64], order: i32) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean_raw(values);
    let sd = std_dev_raw(values);
    if sd == 0.0 {
        return 0.0;
    }
    values.iter().map(|v| ((v - m) / sd).powi(order)).sum::<f64>() / values.len() as f64
}
