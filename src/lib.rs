//! # talent-analytics
//!
//! Analytics core for an HR performance-evaluation platform.
//!
//! Three composable engines, all pure and synchronous:
//! - **Descriptive statistics** ([`statistics`]): quartiles on the R-7
//!   definition, population moments, IQR outlier detection with z-score
//!   ranking
//! - **Correlation & regression** ([`analysis`]): Pearson r, OLS trend
//!   fitting, and the fixed-band qualitative interpretation report text
//!   is built from
//! - **9-box** ([`ninebox`]): talent classification on the performance ×
//!   potential grid, with a static metadata table per cell
//!
//! [`CohortAnalyzer`] runs all three over a cohort and assembles a
//! [`CohortReport`]; the [`output`] module renders it for terminals or
//! serializes it to JSON.
//!
//! ## Quick start
//!
//! ```
//! use talent_analytics::{analyze, Evaluation};
//!
//! let cohort = vec![
//!     Evaluation::new("Ana", 88.0, 92.0),
//!     Evaluation::new("Luis", 55.0, 71.0),
//!     Evaluation::partial("Sofía", Some(70.0), None),
//! ];
//!
//! let report = analyze(&cohort);
//! assert_eq!(report.nine_box.total, 3);
//! assert_eq!(report.nine_box.unclassified_count, 1);
//! println!("{}", talent_analytics::output::terminal::format_report(&report));
//! ```
//!
//! ## Degenerate inputs
//!
//! The engines never log, never retry, and never return NaN: empty or
//! singleton samples, zero variance, and missing axis scores all degrade
//! to documented sentinels (zeros, empty lists, the `unclassified`
//! bucket) so report sections render "0%" instead of crashing.
//! Length-mismatched paired series are the one exception: that is an
//! integration bug and panics.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod analyzer;
mod config;
mod constants;
mod result;
mod types;

// Functional modules
pub mod analysis;
pub mod ninebox;
pub mod output;
pub mod statistics;

// Re-exports for the public API
pub use analyzer::CohortAnalyzer;
pub use config::Config;
pub use constants::{
    DEFAULT_IQR_MULTIPLIER, DEFAULT_MAX_REPORTED_OUTLIERS, LEVEL_ALTO_MIN, LEVEL_MEDIO_MIN,
};
pub use result::{BandCount, CohortReport, CorrelationPanel, DimensionReport};
pub use types::{DistributionBand, Evaluation, Level};

// Re-exports for the common call sites
pub use analysis::{
    interpret_correlation, linear_regression, pearson_correlation, CorrelationInterpretation,
    Direction, RegressionFit, Strength,
};
pub use ninebox::{
    aggregate, classify, CellCount, CellMetadata, Classification, NineBoxDistribution,
    NineBoxPosition,
};
pub use statistics::{
    box_plot_summary, detect_outliers, quartiles, summarize, BoxPlotSummary, DescriptiveSummary,
    Outlier, OutlierReport, Quartiles,
};

/// Analyze a cohort with the default configuration.
///
/// Convenience wrapper over [`CohortAnalyzer::analyze`]:
///
/// ```
/// use talent_analytics::{analyze, Evaluation};
///
/// let report = analyze(&[Evaluation::new("Ana", 88.0, 92.0)]);
/// assert_eq!(report.population, 1);
/// ```
pub fn analyze(cohort: &[Evaluation]) -> CohortReport {
    CohortAnalyzer::new().analyze(cohort)
}
