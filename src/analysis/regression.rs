//! Ordinary least squares over paired evaluation scores.

use serde::{Deserialize, Serialize};

use super::correlation::finite_pairs;

/// Fitted simple linear regression `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionFit {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
    /// Coefficient of determination in [0, 1].
    pub r_squared: f64,
    /// Valid pairs the fit is based on.
    pub n: usize,
}

/// Fit `y = slope * x + intercept` by ordinary least squares.
///
/// Pairs with a non-finite coordinate are dropped. Degenerate inputs
/// return a defined fit instead of NaN:
///
/// - fewer than two valid pairs: slope 0, intercept = the single `y` (or
///   0 with no pairs), R² 0
/// - zero variance in `x`: horizontal line at the mean of `y`
/// - zero variance in `y` (SS_total = 0): R² is 1 when the residuals are
///   also zero, else 0, so UI percentages stay defined
///
/// # Panics
///
/// Panics if the series have different lengths.
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> RegressionFit {
    assert_eq!(
        xs.len(),
        ys.len(),
        "paired series must have equal lengths"
    );

    let pairs = finite_pairs(xs, ys);
    let n = pairs.len();
    if n < 2 {
        let intercept = pairs.first().map_or(0.0, |&(_, y)| y);
        return RegressionFit {
            slope: 0.0,
            intercept,
            r_squared: 0.0,
            n,
        };
    }

    let nf = n as f64;
    let mut sx = 0.0;
    let mut sy = 0.0;
    let mut sxy = 0.0;
    let mut sx2 = 0.0;
    for &(x, y) in &pairs {
        sx += x;
        sy += y;
        sxy += x * y;
        sx2 += x * x;
    }

    let denom = nf * sx2 - sx * sx;
    let (slope, intercept) = if denom <= 0.0 {
        // Zero x-variance: horizontal line through the mean
        (0.0, sy / nf)
    } else {
        let slope = (nf * sxy - sx * sy) / denom;
        (slope, (sy - slope * sx) / nf)
    };

    let mean_y = sy / nf;
    let mut ss_tot = 0.0;
    let mut ss_res = 0.0;
    for &(x, y) in &pairs {
        ss_tot += (y - mean_y).powi(2);
        ss_res += (y - (slope * x + intercept)).powi(2);
    }

    let r_squared = if ss_tot <= 0.0 {
        if ss_res < 1e-12 { 1.0 } else { 0.0 }
    } else {
        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    };

    RegressionFit {
        slope,
        intercept,
        r_squared,
        n,
    }
}
