//! IQR outlier detection and box-plot summaries.
//!
//! A value is flagged when it falls outside the Tukey fences
//! `[Q1 - k*IQR, Q3 + k*IQR]`. Flagged values carry a z-score so reports
//! can rank them by severity.

use serde::{Deserialize, Serialize};

use crate::config::Config;

use super::descriptive::{mean, std_dev};
use super::finite_values;
use super::quantile::{quantile_sorted, quartiles, Quartiles};

/// A flagged observation with its severity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outlier {
    /// The observed value.
    pub value: f64,
    /// Standard score `(value - mean) / std_dev` (0 when deviation is 0).
    pub z_score: f64,
}

/// Outlier detection result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    /// Finite observations inspected.
    pub total_values: usize,
    /// Values below the lower fence (count is never truncated).
    pub low_count: usize,
    /// Values above the upper fence (count is never truncated).
    pub high_count: usize,
    /// Lower fence `Q1 - k*IQR`.
    pub lower_fence: f64,
    /// Upper fence `Q3 + k*IQR`.
    pub upper_fence: f64,
    /// Interquartile range the fences derive from.
    pub iqr: f64,
    /// Low outliers ranked by |z| descending, truncated for display.
    pub low: Vec<Outlier>,
    /// High outliers ranked by |z| descending, truncated for display.
    pub high: Vec<Outlier>,
}

impl OutlierReport {
    /// Fraction of inspected values flagged on either side (0 to 1).
    pub fn outlier_fraction(&self) -> f64 {
        if self.total_values == 0 {
            return 0.0;
        }
        (self.low_count + self.high_count) as f64 / self.total_values as f64
    }

    /// Sentinel for empty samples: zero counts, zero-width fences.
    pub(crate) fn empty() -> Self {
        Self {
            total_values: 0,
            low_count: 0,
            high_count: 0,
            lower_fence: 0.0,
            upper_fence: 0.0,
            iqr: 0.0,
            low: Vec::new(),
            high: Vec::new(),
        }
    }
}

/// Five-number summary for box-plot rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotSummary {
    /// Smallest observation.
    pub min: f64,
    /// 25th percentile.
    pub q1: f64,
    /// 50th percentile.
    pub median: f64,
    /// 75th percentile.
    pub q3: f64,
    /// Largest observation.
    pub max: f64,
    /// Arithmetic mean, drawn as a marker alongside the median.
    pub mean: f64,
    /// Values outside the Tukey fences, ascending.
    pub outliers: Vec<f64>,
}

impl BoxPlotSummary {
    /// Whether the whisker range has positive width.
    ///
    /// Renderers must skip the bar for degenerate ranges instead of
    /// scaling against the zero width.
    pub fn has_positive_range(&self) -> bool {
        self.max > self.min
    }
}

/// Detect outliers with the default 1.5×IQR fences and display cap.
pub fn detect_outliers(sample: &[f64]) -> OutlierReport {
    detect_outliers_with(sample, &Config::default())
}

/// Detect outliers using the fence multiplier and display cap from
/// `config`.
///
/// Degenerate samples (empty, singleton, zero spread) yield zero flagged
/// values and zero-width fences; the result never contains NaN.
pub fn detect_outliers_with(sample: &[f64], config: &Config) -> OutlierReport {
    let values = finite_values(sample);
    if values.is_empty() {
        return OutlierReport::empty();
    }

    let q = quartiles(&values);
    let (lower_fence, upper_fence) = fences(&q, config.iqr_multiplier);
    let m = mean(&values);
    let sd = std_dev(&values);
    let z = |v: f64| if sd == 0.0 { 0.0 } else { (v - m) / sd };

    let mut low: Vec<Outlier> = Vec::new();
    let mut high: Vec<Outlier> = Vec::new();
    for &v in &values {
        if v < lower_fence {
            low.push(Outlier { value: v, z_score: z(v) });
        } else if v > upper_fence {
            high.push(Outlier { value: v, z_score: z(v) });
        }
    }

    let low_count = low.len();
    let high_count = high.len();

    // Rank by severity for display, keep only the top of each side
    let by_severity =
        |a: &Outlier, b: &Outlier| b.z_score.abs().total_cmp(&a.z_score.abs());
    low.sort_by(by_severity);
    high.sort_by(by_severity);
    low.truncate(config.max_reported_outliers);
    high.truncate(config.max_reported_outliers);

    OutlierReport {
        total_values: values.len(),
        low_count,
        high_count,
        lower_fence,
        upper_fence,
        iqr: q.iqr(),
        low,
        high,
    }
}

/// Five-number summary plus fence-excluded values, with default fences.
pub fn box_plot_summary(sample: &[f64]) -> BoxPlotSummary {
    box_plot_summary_with(sample, &Config::default())
}

/// Five-number summary using the fence multiplier from `config`.
///
/// An empty sample returns the all-zero summary, for which
/// [`BoxPlotSummary::has_positive_range`] is false.
pub fn box_plot_summary_with(sample: &[f64], config: &Config) -> BoxPlotSummary {
    let mut values = finite_values(sample);
    if values.is_empty() {
        return BoxPlotSummary {
            min: 0.0,
            q1: 0.0,
            median: 0.0,
            q3: 0.0,
            max: 0.0,
            mean: 0.0,
            outliers: Vec::new(),
        };
    }
    values.sort_unstable_by(|a, b| a.total_cmp(b));

    let q = Quartiles {
        q1: quantile_sorted(&values, 0.25),
        median: quantile_sorted(&values, 0.5),
        q3: quantile_sorted(&values, 0.75),
    };
    let (lower_fence, upper_fence) = fences(&q, config.iqr_multiplier);
    let outliers: Vec<f64> = values
        .iter()
        .copied()
        .filter(|&v| v < lower_fence || v > upper_fence)
        .collect();

    BoxPlotSummary {
        min: values[0],
        q1: q.q1,
        median: q.median,
        q3: q.q3,
        max: values[values.len() - 1],
        mean: mean(&values),
        outliers,
    }
}

fn fences(q: &Quartiles, multiplier: f64) -> (f64, f64) {
    let iqr = q.iqr();
    (q.q1 - multiplier * iqr, q.q3 + multiplier * iqr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_exactly_the_injected_extremes() {
        // Tight cluster with one far-high and one far-low value
        let mut sample = vec![50.0, 51.0, 52.0, 49.0, 48.0, 50.5, 51.5, 49.5];
        sample.push(120.0);
        sample.push(-20.0);

        let report = detect_outliers(&sample);
        assert_eq!(report.low_count, 1);
        assert_eq!(report.high_count, 1);
        assert_eq!(report.low[0].value, -20.0);
        assert_eq!(report.high[0].value, 120.0);
        assert!(report.low[0].z_score < 0.0);
        assert!(report.high[0].z_score > 0.0);
    }

    #[test]
    fn test_clean_sample_has_no_outliers() {
        let sample: Vec<f64> = (0..50).map(|i| 60.0 + (i % 10) as f64).collect();
        let report = detect_outliers(&sample);
        assert_eq!(report.low_count, 0);
        assert_eq!(report.high_count, 0);
        assert_eq!(report.outlier_fraction(), 0.0);
    }

    #[test]
    fn test_empty_sample_sentinel() {
        let report = detect_outliers(&[]);
        assert_eq!(report.total_values, 0);
        assert_eq!(report.low_count, 0);
        assert_eq!(report.high_count, 0);
        assert_eq!(report.outlier_fraction(), 0.0);
        assert!(report.lower_fence == 0.0 && report.upper_fence == 0.0);
    }

    #[test]
    fn test_display_cap_preserves_counts() {
        // 12 extreme highs over a tight cluster, cap at 3
        let mut sample: Vec<f64> = (0..100).map(|i| 50.0 + (i % 5) as f64 / 10.0).collect();
        for i in 0..12 {
            sample.push(200.0 + i as f64);
        }
        let config = Config {
            max_reported_outliers: 3,
            ..Config::default()
        };
        let report = detect_outliers_with(&sample, &config);
        assert_eq!(report.high_count, 12);
        assert_eq!(report.high.len(), 3);
        // Ranked by severity: the largest value leads
        assert_eq!(report.high[0].value, 211.0);
    }

    #[test]
    fn test_constant_sample_zero_z_scores() {
        let mut sample = vec![50.0; 30];
        sample.push(50.0);
        let report = detect_outliers(&sample);
        assert_eq!(report.low_count + report.high_count, 0);
        assert_eq!(report.iqr, 0.0);
    }

    #[test]
    fn test_box_plot_summary_ordering() {
        let sample = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let b = box_plot_summary(&sample);
        assert!(b.min <= b.q1);
        assert!(b.q1 <= b.median);
        assert!(b.median <= b.q3);
        assert!(b.q3 <= b.max);
        assert!(b.has_positive_range());
    }

    #[test]
    fn test_box_plot_degenerate_range() {
        let b = box_plot_summary(&[7.0]);
        assert_eq!(b.min, 7.0);
        assert_eq!(b.max, 7.0);
        assert!(!b.has_positive_range());

        let empty = box_plot_summary(&[]);
        assert!(!empty.has_positive_range());
    }
}
