//! PDE presence check.
//!
//! Public health law requires a state-certified pharmacist (PDE) on the
//! premises during every opening period. This check walks every scheduled
//! (day, shift) cell and emits exactly one finding per cell.

use std::collections::HashSet;

use serde_json::json;

use crate::models::{Finding, Severity, Snapshot};

use super::codes;

/// Checks that every scheduled shift has at least one qualified employee.
///
/// Emits a red `PDE_ABSENT` violation listing the team present when no
/// qualified employee is assigned, otherwise a green `PDE_PRESENT` listing
/// the qualified employees on the shift.
///
/// # Examples
///
/// ```
/// use pharmacy_compliance::models::{Day, Employee, ScheduleWeek, ShiftPeriod, Snapshot};
/// use pharmacy_compliance::rules::check_pde_presence;
/// use rust_decimal::Decimal;
///
/// let mut schedule = ScheduleWeek::new();
/// schedule.assign(Day::Monday, ShiftPeriod::Morning, "B");
///
/// let snapshot = Snapshot {
///     pharmacy: Default::default(),
///     roster: vec![Employee {
///         name: "A".to_string(),
///         role: "PDE".to_string(),
///         qualified: true,
///         contracted_hours: Decimal::from(35),
///         remaining_leave_days: 10,
///         availability: vec![Day::Monday],
///     }],
///     schedule,
///     absences: vec![],
///     coverage_rate: Decimal::from(100),
/// };
///
/// let findings = check_pde_presence(&snapshot);
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].code, "PDE_ABSENT");
/// assert_eq!(findings[0].details["equipe_presente"], serde_json::json!(["B"]));
/// ```
pub fn check_pde_presence(snapshot: &Snapshot) -> Vec<Finding> {
    let qualified: HashSet<&str> = snapshot
        .roster
        .iter()
        .filter(|e| e.is_qualified())
        .map(|e| e.name.as_str())
        .collect();

    snapshot
        .schedule
        .cells()
        .map(|(day, shift, team)| {
            let present: Vec<&str> = team
                .iter()
                .map(String::as_str)
                .filter(|name| qualified.contains(name))
                .collect();

            if present.is_empty() {
                Finding::violation(
                    codes::PDE_ABSENT,
                    format!(
                        "Aucun pharmacien diplômé (PDE) présent le {} — {}",
                        day,
                        shift.label()
                    ),
                    Severity::Red,
                    json!({
                        "jour": day,
                        "shift": shift,
                        "equipe_presente": team,
                    }),
                )
            } else {
                Finding::ok(
                    codes::PDE_PRESENT,
                    format!(
                        "PDE présent le {} — {} : {}",
                        day,
                        shift.label(),
                        present.join(", ")
                    ),
                    json!({
                        "jour": day,
                        "shift": shift,
                        "pde": present,
                    }),
                )
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, FindingKind, ShiftPeriod};
    use crate::rules::test_support::{employee, snapshot_with};

    #[test]
    fn test_pde_absent_when_only_unqualified_staff() {
        let mut snapshot = snapshot_with(vec![employee("A", true), employee("B", false)]);
        snapshot.schedule.assign(Day::Monday, ShiftPeriod::Morning, "B");

        let findings = check_pde_presence(&snapshot);

        assert_eq!(findings.len(), 1);
        let finding = &findings[0];
        assert_eq!(finding.kind, FindingKind::Violation);
        assert_eq!(finding.code, "PDE_ABSENT");
        assert_eq!(finding.severity, Severity::Red);
        assert_eq!(finding.details["jour"], "lundi");
        assert_eq!(finding.details["shift"], "morning");
        assert_eq!(finding.details["equipe_presente"], json!(["B"]));
        assert_eq!(
            finding.message,
            "Aucun pharmacien diplômé (PDE) présent le lundi — matin"
        );
    }

    #[test]
    fn test_pde_present_lists_qualified_staff() {
        let mut snapshot = snapshot_with(vec![
            employee("A", true),
            employee("B", false),
            employee("C", true),
        ]);
        for name in ["C", "B", "A"] {
            snapshot.schedule.assign(Day::Tuesday, ShiftPeriod::Afternoon, name);
        }

        let findings = check_pde_presence(&snapshot);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, "PDE_PRESENT");
        assert_eq!(findings[0].severity, Severity::Green);
        assert_eq!(findings[0].details["pde"], json!(["C", "A"]));
        assert_eq!(findings[0].message, "PDE présent le mardi — apres midi : C, A");
    }

    #[test]
    fn test_one_finding_per_cell() {
        let mut snapshot = snapshot_with(vec![employee("A", true), employee("B", false)]);
        for day in Day::OPENING_DAYS {
            snapshot.schedule.assign(day, ShiftPeriod::Morning, "A");
            snapshot.schedule.assign(day, ShiftPeriod::Afternoon, "B");
        }

        let findings = check_pde_presence(&snapshot);

        assert_eq!(findings.len(), 12);
        assert_eq!(findings.iter().filter(|f| f.code == "PDE_PRESENT").count(), 6);
        assert_eq!(findings.iter().filter(|f| f.code == "PDE_ABSENT").count(), 6);
    }

    #[test]
    fn test_empty_cell_is_a_violation() {
        let mut snapshot = snapshot_with(vec![employee("A", true)]);
        snapshot.schedule.ensure_cell(Day::Saturday, ShiftPeriod::Afternoon);

        let findings = check_pde_presence(&snapshot);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, "PDE_ABSENT");
        assert_eq!(findings[0].details["equipe_presente"], json!([]));
    }

    #[test]
    fn test_unknown_names_are_reported_verbatim() {
        let mut snapshot = snapshot_with(vec![employee("A", true)]);
        snapshot.schedule.assign(Day::Friday, ShiftPeriod::Morning, "Intérimaire");

        let findings = check_pde_presence(&snapshot);

        assert_eq!(findings[0].code, "PDE_ABSENT");
        assert_eq!(findings[0].details["equipe_presente"], json!(["Intérimaire"]));
    }

    #[test]
    fn test_empty_schedule_yields_nothing() {
        let snapshot = snapshot_with(vec![employee("A", true)]);
        assert!(check_pde_presence(&snapshot).is_empty());
    }
}
