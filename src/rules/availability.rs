//! Declared availability check.
//!
//! Only violations are emitted here; a day where everyone works inside their
//! declared availability produces no finding at all.

use serde_json::json;

use crate::models::{Finding, Severity, Snapshot};

use super::codes;

/// Flags employees scheduled on a day outside their declared availability.
///
/// Each employee is considered once per day, whichever shifts they work.
/// Names missing from the roster are skipped.
pub fn check_availability(snapshot: &Snapshot) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (day, _) in snapshot.schedule.days() {
        for name in snapshot.schedule.names_on(day) {
            let Some(employee) = snapshot.employee(name) else {
                continue;
            };
            if employee.is_available_on(day) {
                continue;
            }

            findings.push(Finding::violation(
                codes::HORS_DISPONIBILITE,
                format!("{} planifié(e) le {} mais non disponible ce jour", name, day),
                Severity::Orange,
                json!({
                    "employe": name,
                    "jour": day,
                    "disponibilites": employee.availability,
                }),
            ));
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, ShiftPeriod};
    use crate::rules::test_support::{employee, snapshot_with};

    #[test]
    fn test_scheduled_outside_availability() {
        let mut karim = employee("Karim Benali", false);
        karim.availability = vec![Day::Tuesday, Day::Wednesday];
        let mut snapshot = snapshot_with(vec![karim]);
        snapshot.schedule.assign(Day::Monday, ShiftPeriod::Afternoon, "Karim Benali");

        let findings = check_availability(&snapshot);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, "HORS_DISPONIBILITE");
        assert_eq!(findings[0].severity, Severity::Orange);
        assert_eq!(findings[0].details["jour"], "lundi");
        assert_eq!(findings[0].details["disponibilites"], json!(["mardi", "mercredi"]));
        assert_eq!(
            findings[0].message,
            "Karim Benali planifié(e) le lundi mais non disponible ce jour"
        );
    }

    #[test]
    fn test_both_shifts_yield_one_violation_per_day() {
        let mut karim = employee("Karim Benali", false);
        karim.availability = vec![Day::Tuesday];
        let mut snapshot = snapshot_with(vec![karim]);
        snapshot.schedule.assign(Day::Monday, ShiftPeriod::Morning, "Karim Benali");
        snapshot.schedule.assign(Day::Monday, ShiftPeriod::Afternoon, "Karim Benali");
        snapshot.schedule.assign(Day::Thursday, ShiftPeriod::Morning, "Karim Benali");

        let findings = check_availability(&snapshot);

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].details["jour"], "lundi");
        assert_eq!(findings[1].details["jour"], "jeudi");
    }

    #[test]
    fn test_available_employees_produce_no_findings() {
        let mut snapshot = snapshot_with(vec![employee("A", true)]);
        snapshot.schedule.assign(Day::Monday, ShiftPeriod::Morning, "A");

        assert!(check_availability(&snapshot).is_empty());
    }

    #[test]
    fn test_unknown_names_are_skipped() {
        let mut snapshot = snapshot_with(vec![employee("A", true)]);
        snapshot.schedule.assign(Day::Sunday, ShiftPeriod::Morning, "Ghost");

        assert!(check_availability(&snapshot).is_empty());
    }
}
