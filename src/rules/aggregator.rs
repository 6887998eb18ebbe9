//! Report aggregation.
//!
//! Runs every rule check in a fixed order and folds the findings into a
//! [`ComplianceReport`].

use std::time::Instant;

use tracing::{debug, info};

use crate::models::{ComplianceReport, Finding, Snapshot};

use super::{
    check_absence_coverage, check_availability, check_coverage_rate, check_leave_balance,
    check_pde_presence, check_weekly_hours,
};

/// A rule check: reads a snapshot, emits findings.
pub type RuleCheck = fn(&Snapshot) -> Vec<Finding>;

/// Every rule check with its name, in evaluation order.
pub const RULE_CHECKS: [(&str, RuleCheck); 6] = [
    ("pde_presence", check_pde_presence),
    ("weekly_hours", check_weekly_hours),
    ("absence_coverage", check_absence_coverage),
    ("leave_balance", check_leave_balance),
    ("availability", check_availability),
    ("coverage_rate", check_coverage_rate),
];

/// Runs every rule check and concatenates the findings in evaluation order.
pub fn run_all_checks(snapshot: &Snapshot) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (name, check) in RULE_CHECKS {
        let produced = check(snapshot);
        debug!(check = name, findings = produced.len(), "Rule check completed");
        findings.extend(produced);
    }
    findings
}

/// Evaluates a snapshot against every rule and builds the compliance report.
///
/// Never fails: an evaluation that produces no finding scores 100.
///
/// # Examples
///
/// ```
/// use pharmacy_compliance::models::Snapshot;
/// use pharmacy_compliance::rules::evaluate_all;
/// use rust_decimal::Decimal;
///
/// let snapshot = Snapshot {
///     pharmacy: Default::default(),
///     roster: vec![],
///     schedule: Default::default(),
///     absences: vec![],
///     coverage_rate: Decimal::from(97),
/// };
///
/// let report = evaluate_all(&snapshot);
/// assert_eq!(report.totals.checks, 1);
/// assert_eq!(report.score, 100);
/// ```
pub fn evaluate_all(snapshot: &Snapshot) -> ComplianceReport {
    let start_time = Instant::now();
    let findings = run_all_checks(snapshot);
    let report = ComplianceReport::from_findings(snapshot.pharmacy.name.clone(), findings);

    info!(
        report_id = %report.report_id,
        pharmacy = %report.pharmacy,
        score = report.score,
        checks = report.totals.checks,
        critical = report.totals.critical,
        minor = report.totals.minor,
        duration_us = start_time.elapsed().as_micros() as u64,
        "Compliance evaluation completed"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, ShiftPeriod};
    use crate::rules::test_support::{employee, snapshot_with};
    use rust_decimal::Decimal;

    #[test]
    fn test_checks_run_in_fixed_order() {
        let mut snapshot = snapshot_with(vec![employee("A", true)]);
        snapshot.schedule.assign(Day::Monday, ShiftPeriod::Morning, "A");

        let codes: Vec<String> = run_all_checks(&snapshot)
            .into_iter()
            .map(|f| f.code)
            .collect();

        assert_eq!(
            codes,
            vec!["PDE_PRESENT", "SOUS_PLANIFIE", "CONGES_OK", "COUVERTURE_OK"]
        );
    }

    #[test]
    fn test_report_partitions_and_scores() {
        let mut snapshot = snapshot_with(vec![employee("A", true), employee("B", false)]);
        snapshot.schedule.assign(Day::Monday, ShiftPeriod::Morning, "B");
        snapshot.coverage_rate = Decimal::from(90);

        let report = evaluate_all(&snapshot);

        // PDE_ABSENT, 2x SOUS_PLANIFIE, 2x CONGES_OK, COUVERTURE_INSUFFISANTE
        assert_eq!(report.totals.checks, 6);
        assert_eq!(report.totals.critical, 1);
        assert_eq!(report.totals.minor, 3);
        assert_eq!(report.totals.conformant, 2);
        assert_eq!(report.score, 33);
        assert_eq!(report.critical_violations[0].code, "PDE_ABSENT");
    }

    #[test]
    fn test_empty_snapshot_with_good_coverage_is_perfect() {
        let report = evaluate_all(&snapshot_with(vec![]));
        assert_eq!(report.score, 100);
        assert!(report.is_fully_compliant());
    }

    #[test]
    fn test_evaluation_is_idempotent_apart_from_timestamps() {
        let mut snapshot = snapshot_with(vec![employee("A", true), employee("B", false)]);
        snapshot.schedule.assign(Day::Monday, ShiftPeriod::Morning, "B");

        let first = evaluate_all(&snapshot);
        let second = evaluate_all(&snapshot);

        assert_eq!(first.score, second.score);
        assert_eq!(first.all_findings.len(), second.all_findings.len());
        for (a, b) in first.all_findings.iter().zip(&second.all_findings) {
            assert_eq!(a.code, b.code);
            assert_eq!(a.message, b.message);
            assert_eq!(a.severity, b.severity);
            assert_eq!(a.details, b.details);
        }
    }
}
