//! Bivariate analysis of paired evaluation scores.
//!
//! Quantifies the linear relationship between two paired series:
//!
//! 1. **Pearson correlation**: coefficient in [-1, 1]
//! 2. **Interpretation**: fixed strength/direction bands feeding report
//!    narrative
//! 3. **Simple linear regression**: OLS slope, intercept, and R² for
//!    trend overlays

mod correlation;
mod regression;

pub use correlation::{
    interpret_correlation, pearson_correlation, CorrelationInterpretation, Direction, Strength,
};
pub use regression::{linear_regression, RegressionFit};
