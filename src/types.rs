//! Shared domain types.

use serde::{Deserialize, Serialize};

use crate::constants::{
    BAND_EXCELENTE_MIN, BAND_MUY_BUENO_MIN, BAND_NECESITA_MEJORAR_MIN, BAND_SATISFACTORIO_MIN,
    LEVEL_ALTO_MIN, LEVEL_MEDIO_MIN,
};

/// Three-way level bucket used on both 9-box axes. Ordered `Bajo < Medio
/// < Alto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Below 60.
    Bajo,
    /// 60 to 74 ("Oportunidad").
    Medio,
    /// 75 and above ("Fortaleza").
    Alto,
}

impl Level {
    /// Bucket a percentage.
    ///
    /// Out-of-range input is clamped to [0, 100] before bucketing, never
    /// rejected.
    pub fn from_pct(pct: f64) -> Self {
        let pct = pct.clamp(0.0, 100.0);
        if pct >= LEVEL_ALTO_MIN {
            Level::Alto
        } else if pct >= LEVEL_MEDIO_MIN {
            Level::Medio
        } else {
            Level::Bajo
        }
    }

    /// Lowercase key used in composite 9-box keys.
    pub fn key(self) -> &'static str {
        match self {
            Level::Bajo => "bajo",
            Level::Medio => "medio",
            Level::Alto => "alto",
        }
    }
}

/// Five-band score categorization used for histograms and distribution
/// tables.
///
/// Adjacent to, but distinct from, the 3-level 9-box cuts: a score of 72
/// is `satisfactorio` here and `medio` on a 9-box axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionBand {
    /// 90 and above.
    Excelente,
    /// 80 to 89.
    MuyBueno,
    /// 70 to 79.
    Satisfactorio,
    /// 60 to 69.
    NecesitaMejorar,
    /// Below 60.
    Insatisfactorio,
}

impl DistributionBand {
    /// All bands, best first.
    pub const ALL: [DistributionBand; 5] = [
        DistributionBand::Excelente,
        DistributionBand::MuyBueno,
        DistributionBand::Satisfactorio,
        DistributionBand::NecesitaMejorar,
        DistributionBand::Insatisfactorio,
    ];

    /// Bucket a percentage, clamping out-of-range input to [0, 100].
    pub fn from_pct(pct: f64) -> Self {
        let pct = pct.clamp(0.0, 100.0);
        if pct >= BAND_EXCELENTE_MIN {
            DistributionBand::Excelente
        } else if pct >= BAND_MUY_BUENO_MIN {
            DistributionBand::MuyBueno
        } else if pct >= BAND_SATISFACTORIO_MIN {
            DistributionBand::Satisfactorio
        } else if pct >= BAND_NECESITA_MEJORAR_MIN {
            DistributionBand::NecesitaMejorar
        } else {
            DistributionBand::Insatisfactorio
        }
    }

    /// Display label for report tables.
    pub fn label(self) -> &'static str {
        match self {
            DistributionBand::Excelente => "Excelente",
            DistributionBand::MuyBueno => "Muy bueno",
            DistributionBand::Satisfactorio => "Satisfactorio",
            DistributionBand::NecesitaMejorar => "Necesita mejorar",
            DistributionBand::Insatisfactorio => "Insatisfactorio",
        }
    }
}

/// A single member of an evaluation cohort.
///
/// Axis scores are percentages in [0, 100]. A missing axis leaves the
/// member out of quartile/correlation computations and places them in the
/// distinct `unclassified` 9-box bucket; it is never coerced to 0, which
/// would silently misclassify the member as `bajo-bajo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// Display name for drill-down lists.
    pub name: String,
    /// Performance percentage, if evaluated.
    pub desempeno: Option<f64>,
    /// Potential percentage, if evaluated.
    pub potencial: Option<f64>,
}

impl Evaluation {
    /// Member with both axes evaluated.
    pub fn new(name: impl Into<String>, desempeno: f64, potencial: f64) -> Self {
        Self {
            name: name.into(),
            desempeno: Some(desempeno),
            potencial: Some(potencial),
        }
    }

    /// Member with possibly missing axes.
    pub fn partial(
        name: impl Into<String>,
        desempeno: Option<f64>,
        potencial: Option<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            desempeno,
            potencial,
        }
    }

    /// Both axes present and finite.
    pub fn is_classifiable(&self) -> bool {
        self.finite_desempeno().is_some() && self.finite_potencial().is_some()
    }

    /// Performance score if present and finite.
    pub fn finite_desempeno(&self) -> Option<f64> {
        self.desempeno.filter(|v| v.is_finite())
    }

    /// Potential score if present and finite.
    pub fn finite_potencial(&self) -> Option<f64> {
        self.potencial.filter(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_cut_points() {
        assert_eq!(Level::from_pct(59.9), Level::Bajo);
        assert_eq!(Level::from_pct(60.0), Level::Medio);
        assert_eq!(Level::from_pct(74.9), Level::Medio);
        assert_eq!(Level::from_pct(75.0), Level::Alto);
        assert_eq!(Level::from_pct(100.0), Level::Alto);
    }

    #[test]
    fn test_level_clamps_out_of_range() {
        assert_eq!(Level::from_pct(-20.0), Level::Bajo);
        assert_eq!(Level::from_pct(250.0), Level::Alto);
    }

    #[test]
    fn test_distribution_band_boundaries() {
        assert_eq!(DistributionBand::from_pct(90.0), DistributionBand::Excelente);
        assert_eq!(DistributionBand::from_pct(89.9), DistributionBand::MuyBueno);
        assert_eq!(DistributionBand::from_pct(80.0), DistributionBand::MuyBueno);
        assert_eq!(DistributionBand::from_pct(79.9), DistributionBand::Satisfactorio);
        assert_eq!(DistributionBand::from_pct(69.0), DistributionBand::NecesitaMejorar);
        assert_eq!(DistributionBand::from_pct(59.9), DistributionBand::Insatisfactorio);
    }

    #[test]
    fn test_evaluation_classifiable() {
        assert!(Evaluation::new("a", 80.0, 70.0).is_classifiable());
        assert!(!Evaluation::partial("b", Some(80.0), None).is_classifiable());
        assert!(!Evaluation::partial("c", Some(f64::NAN), Some(50.0)).is_classifiable());
    }
}
