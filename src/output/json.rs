//! JSON serialization for cohort reports.

use crate::result::CohortReport;

/// Serialize a CohortReport to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// CohortReport).
pub fn to_json(report: &CohortReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a CohortReport to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// CohortReport).
pub fn to_json_pretty(report: &CohortReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::CohortAnalyzer;
    use crate::types::Evaluation;

    fn make_report() -> CohortReport {
        let cohort = vec![
            Evaluation::new("ana", 92.0, 90.0),
            Evaluation::new("luis", 58.0, 72.0),
            Evaluation::partial("mar", None, Some(65.0)),
        ];
        CohortAnalyzer::new().analyze(&cohort)
    }

    #[test]
    fn test_to_json() {
        let report = make_report();
        let json = to_json(&report).unwrap();
        assert!(json.contains("\"population\":3"));
        assert!(json.contains("\"alto-alto\""));
        assert!(json.contains("\"unclassified_count\":1"));
    }

    #[test]
    fn test_to_json_pretty() {
        let report = make_report();
        let json = to_json_pretty(&report).unwrap();
        assert!(json.contains('\n')); // Pretty print has newlines
        assert!(json.contains("nine_box"));
    }

    #[test]
    fn test_round_trip() {
        let report = make_report();
        let json = to_json(&report).unwrap();
        let back: CohortReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.population, report.population);
        assert_eq!(back.correlation.r, report.correlation.r);
        assert_eq!(back.nine_box.unclassified_count, report.nine_box.unclassified_count);
    }
}
