//! Weekly hours check.
//!
//! Planned hours are derived from the schedule: every shift an employee
//! works counts for [`SHIFT_DURATION_HOURS`]. The roster drives the loop, so
//! an employee who never appears in the schedule still gets a finding.

use rust_decimal::Decimal;
use serde_json::json;

use crate::models::{Finding, SHIFT_DURATION_HOURS, Severity, Snapshot};

use super::codes;

/// Legal weekly working time, in hours (IDCC 1996).
pub const LEGAL_WEEKLY_HOURS: u32 = 35;

/// Share of the contracted hours below which an employee is under-scheduled.
pub const UNDER_SCHEDULED_RATIO: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

/// Checks planned weekly hours against the legal maximum and the contract.
///
/// For each roster employee:
/// - planned hours above [`LEGAL_WEEKLY_HOURS`] → red `DEPASSEMENT_HEURES`
/// - planned hours below [`UNDER_SCHEDULED_RATIO`] × contract → orange `SOUS_PLANIFIE`
/// - otherwise → green `HEURES_OK`
///
/// # Examples
///
/// ```
/// use pharmacy_compliance::rules::{LEGAL_WEEKLY_HOURS, UNDER_SCHEDULED_RATIO};
/// use rust_decimal::Decimal;
///
/// assert_eq!(LEGAL_WEEKLY_HOURS, 35);
/// assert_eq!(UNDER_SCHEDULED_RATIO * Decimal::from(35), Decimal::from(28));
/// ```
pub fn check_weekly_hours(snapshot: &Snapshot) -> Vec<Finding> {
    snapshot
        .roster
        .iter()
        .map(|employee| {
            let shifts = snapshot.schedule.shift_count_for(&employee.name) as u32;
            let planned_hours = shifts * SHIFT_DURATION_HOURS;
            let contracted = employee.contracted_hours.normalize();

            if planned_hours > LEGAL_WEEKLY_HOURS {
                Finding::violation(
                    codes::DEPASSEMENT_HEURES,
                    format!(
                        "{} dépasse la durée légale : {}h planifiées (max {}h)",
                        employee.name, planned_hours, LEGAL_WEEKLY_HOURS
                    ),
                    Severity::Red,
                    json!({
                        "employe": employee.name,
                        "heures_planifiees": planned_hours,
                        "limite": LEGAL_WEEKLY_HOURS,
                    }),
                )
            } else if Decimal::from(planned_hours) < contracted * UNDER_SCHEDULED_RATIO {
                Finding::violation(
                    codes::SOUS_PLANIFIE,
                    format!(
                        "{} est sous-planifié : {}h sur {}h contractuelles",
                        employee.name, planned_hours, contracted
                    ),
                    Severity::Orange,
                    json!({
                        "employe": employee.name,
                        "heures_planifiees": planned_hours,
                        "heures_contrat": contracted.to_string(),
                    }),
                )
            } else {
                Finding::ok(
                    codes::HEURES_OK,
                    format!("{} : {}h planifiées — conforme", employee.name, planned_hours),
                    json!({
                        "employe": employee.name,
                        "heures_planifiees": planned_hours,
                    }),
                )
            }
        })
        .collect()
}
