//! Coverage rate check.

use rust_decimal::Decimal;
use serde_json::json;

use crate::models::{Finding, Severity, Snapshot};

use super::codes;

/// Coverage rate below which staffing is critical, in percent.
pub const CRITICAL_COVERAGE_THRESHOLD: u32 = 85;

/// Coverage rate from which staffing is satisfactory, in percent.
pub const RECOMMENDED_COVERAGE_THRESHOLD: u32 = 95;

/// Checks the weekly coverage rate. Always emits exactly one finding.
///
/// # Examples
///
/// ```
/// use pharmacy_compliance::models::Snapshot;
/// use pharmacy_compliance::rules::check_coverage_rate;
/// use rust_decimal::Decimal;
///
/// let snapshot = Snapshot {
///     pharmacy: Default::default(),
///     roster: vec![],
///     schedule: Default::default(),
///     absences: vec![],
///     coverage_rate: Decimal::from(94),
/// };
///
/// let findings = check_coverage_rate(&snapshot);
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].code, "COUVERTURE_INSUFFISANTE");
/// ```
pub fn check_coverage_rate(snapshot: &Snapshot) -> Vec<Finding> {
    let rate = snapshot.coverage_rate.normalize();

    let finding = if rate < Decimal::from(CRITICAL_COVERAGE_THRESHOLD) {
        Finding::violation(
            codes::COUVERTURE_CRITIQUE,
            format!(
                "Taux de couverture critique : {}% (seuil minimum : {}%)",
                rate, CRITICAL_COVERAGE_THRESHOLD
            ),
            Severity::Red,
            json!({
                "taux": rate.to_string(),
                "seuil": CRITICAL_COVERAGE_THRESHOLD,
            }),
        )
    } else if rate < Decimal::from(RECOMMENDED_COVERAGE_THRESHOLD) {
        Finding::violation(
            codes::COUVERTURE_INSUFFISANTE,
            format!(
                "Taux de couverture insuffisant : {}% (recommandé : ≥ {}%)",
                rate, RECOMMENDED_COVERAGE_THRESHOLD
            ),
            Severity::Orange,
            json!({
                "taux": rate.to_string(),
                "seuil_recommande": RECOMMENDED_COVERAGE_THRESHOLD,
            }),
        )
    } else {
        Finding::ok(
            codes::COUVERTURE_OK,
            format!("Taux de couverture satisfaisant : {}%", rate),
            json!({
                "taux": rate.to_string(),
            }),
        )
    };

    vec![finding]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::snapshot_with;
    use std::str::FromStr;

    fn finding_for_rate(rate: &str) -> Finding {
        let mut snapshot = snapshot_with(vec![]);
        snapshot.coverage_rate = Decimal::from_str(rate).unwrap();
        let mut findings = check_coverage_rate(&snapshot);
        assert_eq!(findings.len(), 1);
        findings.remove(0)
    }

    #[test]
    fn test_below_85_is_critical() {
        let finding = finding_for_rate("84.9");
        assert_eq!(finding.code, "COUVERTURE_CRITIQUE");
        assert_eq!(finding.severity, Severity::Red);
        assert_eq!(finding.details["seuil"], 85);
        assert_eq!(finding.details["taux"], "84.9");
    }

    #[test]
    fn test_exactly_85_is_orange() {
        let finding = finding_for_rate("85");
        assert_eq!(finding.code, "COUVERTURE_INSUFFISANTE");
        assert_eq!(finding.severity, Severity::Orange);
    }

    #[test]
    fn test_94_is_orange() {
        let finding = finding_for_rate("94");
        assert_eq!(finding.code, "COUVERTURE_INSUFFISANTE");
        assert_eq!(finding.details["seuil_recommande"], 95);
        assert_eq!(
            finding.message,
            "Taux de couverture insuffisant : 94% (recommandé : ≥ 95%)"
        );
    }

    #[test]
    fn test_exactly_95_is_green() {
        let finding = finding_for_rate("95.0");
        assert_eq!(finding.code, "COUVERTURE_OK");
        assert_eq!(finding.severity, Severity::Green);
        assert_eq!(finding.message, "Taux de couverture satisfaisant : 95%");
    }
}
