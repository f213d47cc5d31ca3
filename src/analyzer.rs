//! Main `CohortAnalyzer` entry point.

use crate::analysis::{interpret_correlation, linear_regression, pearson_correlation};
use crate::config::Config;
use crate::ninebox;
use crate::result::{BandCount, CohortReport, CorrelationPanel, DimensionReport};
use crate::statistics::{box_plot_summary_with, detect_outliers_with, quartiles, summarize};
use crate::types::{DistributionBand, Evaluation};

/// Main entry point for cohort analysis.
///
/// Runs the descriptive, correlation, and 9-box engines over a cohort and
/// assembles a [`CohortReport`]. Builder-style setters configure the
/// analysis:
///
/// ```
/// use talent_analytics::{CohortAnalyzer, Evaluation};
///
/// let cohort = vec![
///     Evaluation::new("Ana", 88.0, 92.0),
///     Evaluation::new("Luis", 55.0, 71.0),
/// ];
///
/// let report = CohortAnalyzer::new()
///     .iqr_multiplier(3.0)
///     .analyze(&cohort);
///
/// assert_eq!(report.population, 2);
/// ```
///
/// Analysis is pure and deterministic: the same cohort always produces
/// the same report, and concurrent calls need no coordination.
#[derive(Debug, Clone, Default)]
pub struct CohortAnalyzer {
    config: Config,
}

impl CohortAnalyzer {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the Tukey fence multiplier used for outlier detection.
    pub fn iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.config.iqr_multiplier = multiplier;
        self
    }

    /// Set the per-side cap on outliers reported for display.
    pub fn max_reported_outliers(mut self, cap: usize) -> Self {
        self.config.max_reported_outliers = cap;
        self
    }

    /// Include or omit member name lists in 9-box drill-downs.
    pub fn include_members(mut self, include: bool) -> Self {
        self.config.include_members = include;
        self
    }

    /// Run the full analysis over a cohort.
    pub fn analyze(&self, cohort: &[Evaluation]) -> CohortReport {
        let desempeno_values: Vec<f64> =
            cohort.iter().filter_map(Evaluation::finite_desempeno).collect();
        let potencial_values: Vec<f64> =
            cohort.iter().filter_map(Evaluation::finite_potencial).collect();

        // Correlation pairs only members evaluated on both axes
        let (xs, ys): (Vec<f64>, Vec<f64>) = cohort
            .iter()
            .filter_map(|m| Some((m.finite_desempeno()?, m.finite_potencial()?)))
            .unzip();

        #[cfg(feature = "parallel")]
        let (desempeno, potencial) = rayon::join(
            || self.dimension_report("Desempeño", &desempeno_values),
            || self.dimension_report("Potencial", &potencial_values),
        );
        #[cfg(not(feature = "parallel"))]
        let (desempeno, potencial) = (
            self.dimension_report("Desempeño", &desempeno_values),
            self.dimension_report("Potencial", &potencial_values),
        );

        let r = pearson_correlation(&xs, &ys);
        let correlation = CorrelationPanel {
            r,
            interpretation: interpret_correlation(r),
            fit: linear_regression(&xs, &ys),
            pairs: xs.len(),
        };

        CohortReport {
            population: cohort.len(),
            desempeno,
            potencial,
            correlation,
            nine_box: ninebox::aggregate_with(cohort, &self.config),
        }
    }

    fn dimension_report(&self, dimension: &str, values: &[f64]) -> DimensionReport {
        let evaluated = values.len();
        let mut counts = [0usize; DistributionBand::ALL.len()];
        for &v in values {
            let band = DistributionBand::from_pct(v);
            let idx = DistributionBand::ALL
                .iter()
                .position(|&b| b == band)
                .expect("band is one of ALL");
            counts[idx] += 1;
        }
        let distribution = DistributionBand::ALL
            .iter()
            .zip(counts)
            .map(|(&band, count)| BandCount {
                band,
                count,
                percentage: if evaluated == 0 {
                    0.0
                } else {
                    100.0 * count as f64 / evaluated as f64
                },
            })
            .collect();

        DimensionReport {
            dimension: dimension.to_string(),
            evaluated,
            summary: summarize(values),
            quartiles: quartiles(values),
            box_plot: box_plot_summary_with(values, &self.config),
            distribution,
            outliers: detect_outliers_with(values, &self.config),
        }
    }
}
