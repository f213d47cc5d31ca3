//! Configuration for cohort analysis.

use crate::constants::{DEFAULT_IQR_MULTIPLIER, DEFAULT_MAX_REPORTED_OUTLIERS};

/// Configuration options for [`CohortAnalyzer`](crate::CohortAnalyzer).
#[derive(Debug, Clone)]
pub struct Config {
    /// Tukey fence multiplier for IQR outlier detection (default: 1.5).
    ///
    /// A value is flagged when it falls outside
    /// `[Q1 - k*IQR, Q3 + k*IQR]` with `k` this multiplier.
    pub iqr_multiplier: f64,

    /// Maximum outliers reported per side, ranked by |z| (default: 10).
    ///
    /// Counts are never truncated; only the value lists shown in reports
    /// are capped.
    pub max_reported_outliers: usize,

    /// Include member name lists in 9-box drill-downs (default: true).
    pub include_members: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
            max_reported_outliers: DEFAULT_MAX_REPORTED_OUTLIERS,
            include_members: true,
        }
    }
}
