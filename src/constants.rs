//! Shared cut points and defaults.
//!
//! Every threshold that report wording depends on lives here so that each
//! call site buckets identically. The 3-level axis cuts follow the
//! "Oportunidad 60-74 / Fortaleza >=75" legend; the 5-band distribution
//! cuts are the adjacent histogram categorization and are NOT the 9-box
//! cuts.

/// Lower bound (inclusive) of the `medio` level on both 9-box axes.
pub const LEVEL_MEDIO_MIN: f64 = 60.0;

/// Lower bound (inclusive) of the `alto` level on both 9-box axes.
pub const LEVEL_ALTO_MIN: f64 = 75.0;

/// |r| lower bound (inclusive) of the `debil` correlation band.
pub const STRENGTH_DEBIL_MIN: f64 = 0.2;

/// |r| lower bound (inclusive) of the `moderada` correlation band.
pub const STRENGTH_MODERADA_MIN: f64 = 0.4;

/// |r| lower bound (inclusive) of the `fuerte` correlation band.
pub const STRENGTH_FUERTE_MIN: f64 = 0.6;

/// |r| lower bound (inclusive) of the `muy_fuerte` correlation band.
pub const STRENGTH_MUY_FUERTE_MIN: f64 = 0.8;

/// Lower bound (inclusive) of the `excelente` distribution band.
pub const BAND_EXCELENTE_MIN: f64 = 90.0;

/// Lower bound (inclusive) of the `muy_bueno` distribution band.
pub const BAND_MUY_BUENO_MIN: f64 = 80.0;

/// Lower bound (inclusive) of the `satisfactorio` distribution band.
pub const BAND_SATISFACTORIO_MIN: f64 = 70.0;

/// Lower bound (inclusive) of the `necesita_mejorar` distribution band.
pub const BAND_NECESITA_MEJORAR_MIN: f64 = 60.0;

/// Default Tukey fence multiplier for IQR outlier detection.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Default cap on reported outliers per side, ranked by |z|.
pub const DEFAULT_MAX_REPORTED_OUTLIERS: usize = 10;
