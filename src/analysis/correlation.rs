//! Pearson correlation and its qualitative interpretation.
//!
//! Report wording depends on exact band boundaries: lower bounds are
//! inclusive, upper bounds exclusive, and the top band is closed at 1, so
//! r = 0.6 must read "fuerte" and r = 0.59999 "moderada".

use serde::{Deserialize, Serialize};

use crate::constants::{
    STRENGTH_DEBIL_MIN, STRENGTH_FUERTE_MIN, STRENGTH_MODERADA_MIN, STRENGTH_MUY_FUERTE_MIN,
};

/// Qualitative strength band of |r|.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    /// |r| < 0.2.
    MuyDebil,
    /// 0.2 <= |r| < 0.4.
    Debil,
    /// 0.4 <= |r| < 0.6.
    Moderada,
    /// 0.6 <= |r| < 0.8.
    Fuerte,
    /// |r| >= 0.8.
    MuyFuerte,
}

impl Strength {
    /// Band a coefficient by |r|.
    pub fn from_r(r: f64) -> Self {
        let abs = r.abs();
        if abs >= STRENGTH_MUY_FUERTE_MIN {
            Strength::MuyFuerte
        } else if abs >= STRENGTH_FUERTE_MIN {
            Strength::Fuerte
        } else if abs >= STRENGTH_MODERADA_MIN {
            Strength::Moderada
        } else if abs >= STRENGTH_DEBIL_MIN {
            Strength::Debil
        } else {
            Strength::MuyDebil
        }
    }

    /// Display label for report text.
    pub fn label(self) -> &'static str {
        match self {
            Strength::MuyDebil => "muy débil",
            Strength::Debil => "débil",
            Strength::Moderada => "moderada",
            Strength::Fuerte => "fuerte",
            Strength::MuyFuerte => "muy fuerte",
        }
    }
}

/// Sign of the linear relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// r > 0.
    Positiva,
    /// r < 0.
    Negativa,
    /// r = 0.
    Nula,
}

impl Direction {
    /// Direction from the sign of `r`.
    pub fn from_r(r: f64) -> Self {
        if r > 0.0 {
            Direction::Positiva
        } else if r < 0.0 {
            Direction::Negativa
        } else {
            Direction::Nula
        }
    }

    /// Display label for report text.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Positiva => "positiva",
            Direction::Negativa => "negativa",
            Direction::Nula => "nula",
        }
    }
}

/// Qualitative reading of a correlation coefficient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrelationInterpretation {
    /// Strength band of |r|.
    pub strength: Strength,
    /// Sign of the relationship.
    pub direction: Direction,
    /// Narrative sentence assembled from the fixed template.
    pub description: String,
}

/// Compute the Pearson correlation coefficient of two paired series.
///
/// Uses the summed-quantities formula
/// `r = (n*Sxy - Sx*Sy) / sqrt((n*Sx2 - Sx^2) * (n*Sy2 - Sy^2))`.
///
/// Pairs where either coordinate is non-finite are dropped. With fewer
/// than two valid pairs, or zero variance in either series, returns 0.0;
/// callers never receive NaN. The result is clamped to [-1, 1] against
/// floating-point drift.
///
/// # Panics
///
/// Panics if the series have different lengths; length-mismatched paired
/// series are an integration bug, not a data-quality issue.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> f64 {
    assert_eq!(
        xs.len(),
        ys.len(),
        "paired series must have equal lengths"
    );

    let pairs = finite_pairs(xs, ys);
    let n = pairs.len();
    if n < 2 {
        return 0.0;
    }

    let nf = n as f64;
    let mut sx = 0.0;
    let mut sy = 0.0;
    let mut sxy = 0.0;
    let mut sx2 = 0.0;
    let mut sy2 = 0.0;
    for &(x, y) in &pairs {
        sx += x;
        sy += y;
        sxy += x * y;
        sx2 += x * x;
        sy2 += y * y;
    }

    let var_x = nf * sx2 - sx * sx;
    let var_y = nf * sy2 - sy * sy;
    if var_x <= 0.0 || var_y <= 0.0 {
        return 0.0;
    }

    ((nf * sxy - sx * sy) / (var_x * var_y).sqrt()).clamp(-1.0, 1.0)
}

/// Interpret `r` against the fixed strength/direction bands.
///
/// The description is assembled from a template, never free text, so
/// generated report sections stay stable across runs.
pub fn interpret_correlation(r: f64) -> CorrelationInterpretation {
    let strength = Strength::from_r(r);
    let direction = Direction::from_r(r);
    let description = match direction {
        Direction::Nula => "Sin relación lineal apreciable entre las variables".to_string(),
        _ => format!(
            "Correlación {} y {} entre las variables",
            strength.label(),
            direction.label()
        ),
    };

    CorrelationInterpretation {
        strength,
        direction,
        description,
    }
}

/// Keep only pairs where both coordinates are finite.
pub(crate) fn finite_pairs(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter()
        .zip(ys.iter())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| (x, y))
        .collect()
}
