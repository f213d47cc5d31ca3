//! Cohort report types and related structures.

use serde::{Deserialize, Serialize};

use crate::analysis::{CorrelationInterpretation, RegressionFit};
use crate::ninebox::NineBoxDistribution;
use crate::statistics::{BoxPlotSummary, DescriptiveSummary, OutlierReport, Quartiles};
use crate::types::DistributionBand;

/// Count of members in one distribution band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandCount {
    /// The band.
    pub band: DistributionBand,
    /// Members whose score falls in the band.
    pub count: usize,
    /// Share of evaluated members on this axis (0-100).
    pub percentage: f64,
}

/// Full statistical profile of a single axis (performance or potential).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionReport {
    /// Axis name shown in report headings.
    pub dimension: String,
    /// Members with a finite score on this axis.
    pub evaluated: usize,
    /// Central tendency, dispersion, and shape measures.
    pub summary: DescriptiveSummary,
    /// Quartile cut points.
    pub quartiles: Quartiles,
    /// Five-number summary for box-plot rendering.
    pub box_plot: BoxPlotSummary,
    /// Five-band distribution, best band first.
    pub distribution: Vec<BandCount>,
    /// IQR outlier detection result.
    pub outliers: OutlierReport,
}

/// Linear-relationship panel between performance and potential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationPanel {
    /// Pearson coefficient in [-1, 1].
    pub r: f64,
    /// Qualitative strength/direction reading of `r`.
    pub interpretation: CorrelationInterpretation,
    /// OLS trend line for scatter overlays.
    pub fit: RegressionFit,
    /// Valid (performance, potential) pairs behind the panel.
    pub pairs: usize,
}

/// Complete analytics report over one evaluation cohort.
///
/// Assembled by [`CohortAnalyzer`](crate::CohortAnalyzer); every numeric
/// field is exact (display rounding is the presentation layer's job).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortReport {
    /// Cohort size, members with missing axes included.
    pub population: usize,
    /// Performance-axis profile.
    pub desempeno: DimensionReport,
    /// Potential-axis profile.
    pub potencial: DimensionReport,
    /// Performance-potential relationship.
    pub correlation: CorrelationPanel,
    /// 9-box grid distribution.
    pub nine_box: NineBoxDistribution,
}
