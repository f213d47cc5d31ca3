//! End-to-end properties of the cohort report over synthetic cohorts.
//!
//! Cohorts are generated with a seeded RNG so every run checks the same
//! populations.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use talent_analytics::{analyze, CohortAnalyzer, Evaluation};

/// Build a cohort of `n` members; roughly one in ten is missing an axis.
fn synthetic_cohort(seed: u64, n: usize) -> Vec<Evaluation> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let desempeno = if rng.random_bool(0.1) {
                None
            } else {
                Some(rng.random_range(20.0..100.0))
            };
            let potencial = if rng.random_bool(0.1) {
                None
            } else {
                Some(rng.random_range(20.0..100.0))
            };
            Evaluation::partial(format!("m{i}"), desempeno, potencial)
        })
        .collect()
}

#[test]
fn nine_box_counts_conserve_population() {
    for seed in 0..20 {
        let cohort = synthetic_cohort(seed, 200);
        let report = analyze(&cohort);

        let cell_sum: usize = report.nine_box.cells.iter().map(|c| c.count).sum();
        assert_eq!(
            cell_sum + report.nine_box.unclassified_count,
            cohort.len(),
            "seed {seed}: members lost or duplicated in aggregation"
        );
    }
}

#[test]
fn quartiles_are_monotonic_across_cohorts() {
    for seed in 0..20 {
        let cohort = synthetic_cohort(seed, 150);
        let report = analyze(&cohort);

        for dim in [&report.desempeno, &report.potencial] {
            assert!(dim.quartiles.q1 <= dim.quartiles.median, "seed {seed}");
            assert!(dim.quartiles.median <= dim.quartiles.q3, "seed {seed}");
            assert!(dim.box_plot.min <= dim.quartiles.q1, "seed {seed}");
            assert!(dim.quartiles.q3 <= dim.box_plot.max, "seed {seed}");
        }
    }
}

#[test]
fn report_is_deterministic() {
    let cohort = synthetic_cohort(7, 100);
    let first = analyze(&cohort);
    let second = analyze(&cohort);

    assert_eq!(first.correlation.r, second.correlation.r);
    assert_eq!(first.desempeno.summary.mean, second.desempeno.summary.mean);
    for (a, b) in first.nine_box.cells.iter().zip(&second.nine_box.cells) {
        assert_eq!(a.count, b.count);
    }
}

#[test]
fn report_contains_no_nan_anywhere() {
    // Includes the empty cohort and a cohort that is entirely unclassified
    let cohorts = vec![
        Vec::new(),
        vec![Evaluation::partial("solo", None, None)],
        vec![Evaluation::new("uno", 70.0, 70.0)],
        synthetic_cohort(3, 50),
    ];

    for cohort in cohorts {
        let report = analyze(&cohort);
        // Serialization smoke check alongside the field-level scan
        talent_analytics::output::json::to_json(&report).unwrap();
        for dim in [&report.desempeno, &report.potencial] {
            assert!(dim.summary.mean.is_finite());
            assert!(dim.summary.std_dev.is_finite());
            assert!(dim.summary.skewness.is_finite());
            assert!(dim.summary.kurtosis.is_finite());
            assert!(dim.quartiles.q1.is_finite());
            assert!(dim.outliers.lower_fence.is_finite());
            assert!(dim.outliers.upper_fence.is_finite());
        }
        assert!(report.correlation.r.is_finite());
        assert!(report.correlation.fit.slope.is_finite());
        assert!(report.correlation.fit.r_squared.is_finite());
    }
}

#[test]
fn correlated_cohort_reads_as_strong() {
    // Potential tracks performance closely: r must land in the top bands
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
    let cohort: Vec<Evaluation> = (0..120)
        .map(|i| {
            let d: f64 = rng.random_range(30.0..95.0);
            let p = (d + rng.random_range(-4.0..4.0)).clamp(0.0, 100.0);
            Evaluation::partial(format!("m{i}"), Some(d), Some(p))
        })
        .collect();

    let report = analyze(&cohort);
    assert!(report.correlation.r > 0.8, "r = {}", report.correlation.r);
    assert_eq!(
        report.correlation.interpretation.strength,
        talent_analytics::Strength::MuyFuerte
    );
    assert_eq!(
        report.correlation.interpretation.direction,
        talent_analytics::Direction::Positiva
    );
    // The fitted trend tracks the identity line
    assert!((report.correlation.fit.slope - 1.0).abs() < 0.15);
}

#[test]
fn injected_extremes_surface_in_the_report() {
    let mut cohort: Vec<Evaluation> = (0..60)
        .map(|i| Evaluation::new(format!("m{i}"), 70.0 + (i % 7) as f64, 65.0))
        .collect();
    cohort.push(Evaluation::new("alto", 100.0, 65.0));
    cohort.push(Evaluation::new("bajo", 5.0, 65.0));

    let report = CohortAnalyzer::new().analyze(&cohort);
    assert_eq!(report.desempeno.outliers.low_count, 1);
    assert_eq!(report.desempeno.outliers.high_count, 1);
    assert_eq!(report.desempeno.outliers.low[0].value, 5.0);
    assert_eq!(report.desempeno.outliers.high[0].value, 100.0);
}
