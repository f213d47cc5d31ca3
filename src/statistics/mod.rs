//! Descriptive statistics over evaluation score samples.
//!
//! This module reduces a numeric sample to the figures the report and
//! chart layers consume:
//! - Quartiles on the R-7 definition
//! - Central tendency, dispersion, and shape moments
//! - IQR outlier detection with z-score ranking
//!
//! Every public function re-filters non-finite values before computing,
//! and degenerate inputs (empty or singleton samples, zero deviation)
//! return documented sentinels instead of NaN or panics.

mod descriptive;
mod outliers;
mod quantile;

pub use descriptive::{kurtosis, mean, skewness, std_dev, summarize, DescriptiveSummary};
pub use outliers::{
    box_plot_summary, box_plot_summary_with, detect_outliers, detect_outliers_with,
    BoxPlotSummary, Outlier, OutlierReport,
};
pub use quantile::{quantile_sorted, quartiles, Quartiles};

/// Drop non-finite values from a sample.
///
/// NaN and infinities never participate in any computation, even when
/// upstream validation missed them.
pub(crate) fn finite_values(sample: &[f64]) -> Vec<f64> {
    sample.iter().copied().filter(|v| v.is_finite()).collect()
}
