//! 9-box talent classification.
//!
//! Maps (performance, potential) percentage pairs onto a 3×3 grid and
//! aggregates a cohort into per-cell counts with drill-down lists.
//!
//! The composite key orders **performance first**: `alto-medio` is high
//! performance, medium potential. This ordering is canonical everywhere a
//! cell is named — `key()`, serialized form, and the metadata table.

mod metadata;

pub use metadata::{
    ActionPriority, CellMetadata, RecommendedAction, RetentionPriority, TalentTier,
};

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::Config;
use crate::types::{Evaluation, Level};

/// One of the nine grid cells, performance level first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NineBoxPosition {
    /// Low performance, low potential: "Riesgo".
    #[serde(rename = "bajo-bajo")]
    BajoBajo,
    /// Low performance, medium potential: "Dilema".
    #[serde(rename = "bajo-medio")]
    BajoMedio,
    /// Low performance, high potential: "Enigma".
    #[serde(rename = "bajo-alto")]
    BajoAlto,
    /// Medium performance, low potential: "Profesional confiable".
    #[serde(rename = "medio-bajo")]
    MedioBajo,
    /// Medium performance, medium potential: "Jugador clave".
    #[serde(rename = "medio-medio")]
    MedioMedio,
    /// Medium performance, high potential: "Futura estrella".
    #[serde(rename = "medio-alto")]
    MedioAlto,
    /// High performance, low potential: "Especialista".
    #[serde(rename = "alto-bajo")]
    AltoBajo,
    /// High performance, medium potential: "Alto desempeño".
    #[serde(rename = "alto-medio")]
    AltoMedio,
    /// High performance, high potential: "Estrella".
    #[serde(rename = "alto-alto")]
    AltoAlto,
}

impl NineBoxPosition {
    /// All nine cells, performance major and potential minor, ascending.
    pub const ALL: [NineBoxPosition; 9] = [
        NineBoxPosition::BajoBajo,
        NineBoxPosition::BajoMedio,
        NineBoxPosition::BajoAlto,
        NineBoxPosition::MedioBajo,
        NineBoxPosition::MedioMedio,
        NineBoxPosition::MedioAlto,
        NineBoxPosition::AltoBajo,
        NineBoxPosition::AltoMedio,
        NineBoxPosition::AltoAlto,
    ];

    /// Composite key, performance first (e.g. `"alto-medio"`).
    pub fn key(self) -> &'static str {
        match self {
            NineBoxPosition::BajoBajo => "bajo-bajo",
            NineBoxPosition::BajoMedio => "bajo-medio",
            NineBoxPosition::BajoAlto => "bajo-alto",
            NineBoxPosition::MedioBajo => "medio-bajo",
            NineBoxPosition::MedioMedio => "medio-medio",
            NineBoxPosition::MedioAlto => "medio-alto",
            NineBoxPosition::AltoBajo => "alto-bajo",
            NineBoxPosition::AltoMedio => "alto-medio",
            NineBoxPosition::AltoAlto => "alto-alto",
        }
    }

    /// Performance level of the cell.
    pub fn desempeno(self) -> Level {
        match self {
            NineBoxPosition::BajoBajo | NineBoxPosition::BajoMedio | NineBoxPosition::BajoAlto => {
                Level::Bajo
            }
            NineBoxPosition::MedioBajo
            | NineBoxPosition::MedioMedio
            | NineBoxPosition::MedioAlto => Level::Medio,
            NineBoxPosition::AltoBajo | NineBoxPosition::AltoMedio | NineBoxPosition::AltoAlto => {
                Level::Alto
            }
        }
    }

    /// Potential level of the cell.
    pub fn potencial(self) -> Level {
        match self {
            NineBoxPosition::BajoBajo | NineBoxPosition::MedioBajo | NineBoxPosition::AltoBajo => {
                Level::Bajo
            }
            NineBoxPosition::BajoMedio
            | NineBoxPosition::MedioMedio
            | NineBoxPosition::AltoMedio => Level::Medio,
            NineBoxPosition::BajoAlto | NineBoxPosition::MedioAlto | NineBoxPosition::AltoAlto => {
                Level::Alto
            }
        }
    }

    /// Static descriptive metadata for the cell.
    pub fn metadata(self) -> &'static CellMetadata {
        metadata::for_position(self)
    }

    fn from_levels(desempeno: Level, potencial: Level) -> Self {
        match (desempeno, potencial) {
            (Level::Bajo, Level::Bajo) => NineBoxPosition::BajoBajo,
            (Level::Bajo, Level::Medio) => NineBoxPosition::BajoMedio,
            (Level::Bajo, Level::Alto) => NineBoxPosition::BajoAlto,
            (Level::Medio, Level::Bajo) => NineBoxPosition::MedioBajo,
            (Level::Medio, Level::Medio) => NineBoxPosition::MedioMedio,
            (Level::Medio, Level::Alto) => NineBoxPosition::MedioAlto,
            (Level::Alto, Level::Bajo) => NineBoxPosition::AltoBajo,
            (Level::Alto, Level::Medio) => NineBoxPosition::AltoMedio,
            (Level::Alto, Level::Alto) => NineBoxPosition::AltoAlto,
        }
    }
}

/// Classify a (performance, potential) pair onto the grid.
///
/// Out-of-range percentages are clamped to [0, 100] before bucketing,
/// never rejected. For members with possibly missing axes use
/// [`Classification::of`], which never coerces a missing score to a
/// number.
pub fn classify(desempeno_pct: f64, potencial_pct: f64) -> NineBoxPosition {
    debug_assert!(
        desempeno_pct.is_finite() && potencial_pct.is_finite(),
        "classify requires finite percentages"
    );
    NineBoxPosition::from_levels(Level::from_pct(desempeno_pct), Level::from_pct(potencial_pct))
}

/// Classification outcome for a cohort member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Both axes present; the member occupies a grid cell.
    Position(NineBoxPosition),
    /// Performance or potential missing (or non-finite).
    ///
    /// Never coerced to a default score, which would silently misclassify
    /// the member as `bajo-bajo`.
    Unclassified,
}

impl Classification {
    /// Classify a member, surfacing missing axes as `Unclassified`.
    pub fn of(member: &Evaluation) -> Self {
        match (member.finite_desempeno(), member.finite_potencial()) {
            (Some(d), Some(p)) => Classification::Position(classify(d, p)),
            _ => Classification::Unclassified,
        }
    }
}

/// Aggregated cohort counts for one grid cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellCount {
    /// The grid cell.
    pub position: NineBoxPosition,
    /// Members in this cell.
    pub count: usize,
    /// Share of the whole cohort (0-100), unclassified included in the
    /// denominator.
    pub percentage: f64,
    /// Member names for drill-down (empty when disabled in config).
    pub members: Vec<String>,
}

/// 9-box distribution across a cohort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NineBoxDistribution {
    /// Cohort size, unclassified members included.
    pub total: usize,
    /// One entry per grid cell, in [`NineBoxPosition::ALL`] order.
    pub cells: Vec<CellCount>,
    /// Members missing either axis.
    pub unclassified_count: usize,
    /// Share of the cohort that is unclassified (0-100).
    pub unclassified_pct: f64,
    /// Names of unclassified members (empty when disabled in config).
    pub unclassified_members: Vec<String>,
}

impl NineBoxDistribution {
    /// Counts for a specific cell.
    pub fn cell(&self, position: NineBoxPosition) -> &CellCount {
        // ALL order is the construction order
        &self.cells[NineBoxPosition::ALL
            .iter()
            .position(|&p| p == position)
            .expect("all nine cells are present")]
    }

    /// Members placed on the grid (total minus unclassified).
    pub fn classified_count(&self) -> usize {
        self.total - self.unclassified_count
    }
}

/// Group a cohort by grid cell with the default configuration.
pub fn aggregate(cohort: &[Evaluation]) -> NineBoxDistribution {
    aggregate_with(cohort, &Config::default())
}

/// Group a cohort by grid cell.
///
/// Members missing either axis land in the distinct unclassified bucket,
/// never silently dropped: cell counts plus the unclassified count always
/// sum to the cohort size.
pub fn aggregate_with(cohort: &[Evaluation], config: &Config) -> NineBoxDistribution {
    #[cfg(feature = "parallel")]
    let classified: Vec<Classification> =
        cohort.par_iter().map(Classification::of).collect();
    #[cfg(not(feature = "parallel"))]
    let classified: Vec<Classification> = cohort.iter().map(Classification::of).collect();

    let total = cohort.len();
    let pct = |count: usize| {
        if total == 0 {
            0.0
        } else {
            100.0 * count as f64 / total as f64
        }
    };

    let mut cells: Vec<CellCount> = NineBoxPosition::ALL
        .iter()
        .map(|&position| CellCount {
            position,
            count: 0,
            percentage: 0.0,
            members: Vec::new(),
        })
        .collect();
    let mut unclassified_count = 0;
    let mut unclassified_members = Vec::new();

    for (member, classification) in cohort.iter().zip(classified) {
        match classification {
            Classification::Position(position) => {
                let cell = &mut cells[NineBoxPosition::ALL
                    .iter()
                    .position(|&p| p == position)
                    .expect("all nine cells are present")];
                cell.count += 1;
                if config.include_members {
                    cell.members.push(member.name.clone());
                }
            }
            Classification::Unclassified => {
                unclassified_count += 1;
                if config.include_members {
                    unclassified_members.push(member.name.clone());
                }
            }
        }
    }

    for cell in &mut cells {
        cell.percentage = pct(cell.count);
    }

    NineBoxDistribution {
        total,
        cells,
        unclassified_count,
        unclassified_pct: pct(unclassified_count),
        unclassified_members,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_corners_and_center() {
        assert_eq!(classify(90.0, 85.0), NineBoxPosition::AltoAlto);
        assert_eq!(classify(30.0, 20.0), NineBoxPosition::BajoBajo);
        assert_eq!(classify(65.0, 70.0), NineBoxPosition::MedioMedio);
        // Performance-first key: low performance, high potential
        assert_eq!(classify(40.0, 90.0), NineBoxPosition::BajoAlto);
        assert_eq!(classify(40.0, 90.0).key(), "bajo-alto");
    }

    #[test]
    fn test_classify_cut_points() {
        assert_eq!(classify(59.9, 50.0).desempeno(), Level::Bajo);
        assert_eq!(classify(60.0, 50.0).desempeno(), Level::Medio);
        assert_eq!(classify(74.9, 50.0).desempeno(), Level::Medio);
        assert_eq!(classify(75.0, 50.0).desempeno(), Level::Alto);
        assert_eq!(classify(50.0, 60.0).potencial(), Level::Medio);
        assert_eq!(classify(50.0, 75.0).potencial(), Level::Alto);
    }

    #[test]
    fn test_classify_clamps() {
        assert_eq!(classify(130.0, -5.0), NineBoxPosition::AltoBajo);
    }

    #[test]
    fn test_classify_deterministic_and_monotonic() {
        assert_eq!(classify(66.0, 71.0), classify(66.0, 71.0));

        // Increasing performance with potential fixed never lowers the
        // performance bucket
        let mut last = classify(0.0, 50.0).desempeno();
        for step in 0..=100 {
            let level = classify(step as f64, 50.0).desempeno();
            assert!(level >= last);
            last = level;
        }
    }

    #[test]
    fn test_key_and_levels_agree() {
        for position in NineBoxPosition::ALL {
            let expected = format!("{}-{}", position.desempeno().key(), position.potencial().key());
            assert_eq!(position.key(), expected);
        }
    }

    #[test]
    fn test_missing_axis_is_unclassified() {
        let no_potencial = Evaluation::partial("a", Some(80.0), None);
        assert_eq!(Classification::of(&no_potencial), Classification::Unclassified);

        let nan_axis = Evaluation::partial("b", Some(f64::NAN), Some(70.0));
        assert_eq!(Classification::of(&nan_axis), Classification::Unclassified);

        let complete = Evaluation::new("c", 80.0, 70.0);
        assert_eq!(
            Classification::of(&complete),
            Classification::Position(NineBoxPosition::AltoMedio)
        );
    }

    #[test]
    fn test_aggregate_conserves_total() {
        let cohort = vec![
            Evaluation::new("ana", 90.0, 88.0),
            Evaluation::new("luis", 55.0, 40.0),
            Evaluation::new("sofia", 70.0, 65.0),
            Evaluation::partial("mar", Some(82.0), None),
            Evaluation::partial("jon", None, None),
        ];

        let distribution = aggregate(&cohort);
        let cell_sum: usize = distribution.cells.iter().map(|c| c.count).sum();
        assert_eq!(cell_sum + distribution.unclassified_count, cohort.len());
        assert_eq!(distribution.total, 5);
        assert_eq!(distribution.unclassified_count, 2);
        assert_eq!(distribution.classified_count(), 3);

        assert_eq!(distribution.cell(NineBoxPosition::AltoAlto).count, 1);
        assert_eq!(
            distribution.cell(NineBoxPosition::AltoAlto).members,
            vec!["ana".to_string()]
        );
    }

    #[test]
    fn test_aggregate_percentages_use_whole_cohort() {
        let cohort = vec![
            Evaluation::new("a", 90.0, 88.0),
            Evaluation::partial("b", None, Some(50.0)),
        ];
        let distribution = aggregate(&cohort);
        assert!((distribution.cell(NineBoxPosition::AltoAlto).percentage - 50.0).abs() < 1e-12);
        assert!((distribution.unclassified_pct - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_aggregate_empty_cohort() {
        let distribution = aggregate(&[]);
        assert_eq!(distribution.total, 0);
        assert_eq!(distribution.unclassified_count, 0);
        assert_eq!(distribution.unclassified_pct, 0.0);
        assert!(distribution.cells.iter().all(|c| c.count == 0 && c.percentage == 0.0));
    }

    #[test]
    fn test_member_lists_can_be_disabled() {
        let cohort = vec![Evaluation::new("ana", 90.0, 88.0)];
        let config = Config {
            include_members: false,
            ..Config::default()
        };
        let distribution = aggregate_with(&cohort, &config);
        assert_eq!(distribution.cell(NineBoxPosition::AltoAlto).count, 1);
        assert!(distribution.cell(NineBoxPosition::AltoAlto).members.is_empty());
    }
}
