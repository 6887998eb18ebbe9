//! Schedule edits and weekly schedule generation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{Day, Employee, SHIFT_DURATION_HOURS, ScheduleWeek, ShiftPeriod};
use crate::store::PharmacyStore;

/// Unqualified staff added to a regular shift.
const PREPARERS_PER_SHIFT: usize = 2;
/// Unqualified staff added to a Wednesday shift.
const WEDNESDAY_PREPARERS_PER_SHIFT: usize = 1;

/// Edit applied to one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentAction {
    /// Put the employee on the shift.
    #[serde(alias = "ajouter")]
    Add,
    /// Take the employee off the shift.
    #[serde(alias = "retirer")]
    Remove,
}

/// A shift for which no pharmacist could be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UncoveredShift {
    /// Day of the shift.
    pub day: Day,
    /// The shift.
    pub shift: ShiftPeriod,
}

/// A proposed week produced by [`generate_schedule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSchedule {
    /// The proposed week.
    pub schedule: ScheduleWeek,
    /// Number of shifts given to each roster employee.
    pub shift_counts: BTreeMap<String, u32>,
    /// Shifts left without a pharmacist.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uncovered: Vec<UncoveredShift>,
}

/// Adds an employee to a shift or removes them from it.
///
/// Returns the updated team of the shift.
pub fn modify_schedule(
    store: &mut PharmacyStore,
    config: &ConfigLoader,
    employee: &str,
    day: Day,
    shift: ShiftPeriod,
    action: AssignmentAction,
) -> EngineResult<Vec<String>> {
    let employee = config.find_employee(employee)?;
    let name = employee.name.clone();
    let team = store.schedule.team(day, shift);

    match action {
        AssignmentAction::Add => {
            if team.contains(&name) {
                return Err(EngineError::AlreadyScheduled {
                    employee: name,
                    day: day.to_string(),
                    shift: shift.label().to_string(),
                });
            }
            if !employee.is_available_on(day) {
                return Err(EngineError::EmployeeUnavailable {
                    employee: name,
                    day: day.to_string(),
                });
            }
            store.schedule.assign(day, shift, name.clone());
        }
        AssignmentAction::Remove => {
            if !team.contains(&name) {
                return Err(EngineError::NotScheduled {
                    employee: name,
                    day: day.to_string(),
                    shift: shift.label().to_string(),
                });
            }
            if employee.is_qualified() {
                let other_pharmacist = team.iter().any(|member| {
                    *member != name
                        && config.get_employee(member).is_ok_and(Employee::is_qualified)
                });
                if !other_pharmacist {
                    return Err(EngineError::WouldLeaveShiftWithoutPde {
                        employee: name,
                        day: day.to_string(),
                        shift: shift.label().to_string(),
                    });
                }
            }
            store.schedule.unassign(day, shift, &name);
        }
    }

    store.log_action(
        "modify_schedule",
        json!({
            "action": action,
            "employe": name,
            "jour": day,
            "shift": shift,
        }),
    );
    info!(employee = %name, day = %day, shift = %shift, action = ?action, "Schedule modified");

    Ok(store.schedule.team(day, shift).to_vec())
}

/// Builds a week (Monday to Saturday, both shifts) from the roster.
///
/// Each shift first receives the available pharmacist with the fewest
/// shifts so far, then up to two preparers (one on Wednesday), again
/// fewest shifts first. Nobody exceeds their contracted hours. A shift with
/// no pharmacist available is left empty and reported in
/// [`GeneratedSchedule::uncovered`].
pub fn generate_schedule(roster: &[Employee]) -> GeneratedSchedule {
    let mut schedule = ScheduleWeek::new();
    let mut counts: Vec<u32> = vec![0; roster.len()];
    let caps: Vec<u32> = roster.iter().map(max_shifts).collect();
    let mut uncovered = Vec::new();

    for day in Day::OPENING_DAYS {
        for shift in ShiftPeriod::ALL {
            schedule.ensure_cell(day, shift);

            let open = |i: usize, counts: &[u32]| {
                roster[i].is_available_on(day) && counts[i] < caps[i]
            };

            // First minimum in roster order.
            let mut pharmacist: Option<usize> = None;
            for i in (0..roster.len()).filter(|&i| roster[i].is_qualified()) {
                if open(i, &counts) && pharmacist.is_none_or(|best| counts[i] < counts[best]) {
                    pharmacist = Some(i);
                }
            }

            let Some(pharmacist) = pharmacist else {
                debug!(day = %day, shift = %shift, "No pharmacist available");
                uncovered.push(UncoveredShift { day, shift });
                continue;
            };
            schedule.assign(day, shift, roster[pharmacist].name.clone());
            counts[pharmacist] += 1;

            let mut preparers: Vec<usize> = (0..roster.len())
                .filter(|&i| !roster[i].is_qualified() && open(i, &counts))
                .collect();
            preparers.sort_by_key(|&i| counts[i]);

            let wanted = if day == Day::Wednesday {
                WEDNESDAY_PREPARERS_PER_SHIFT
            } else {
                PREPARERS_PER_SHIFT
            };
            for i in preparers.into_iter().take(wanted) {
                schedule.assign(day, shift, roster[i].name.clone());
                counts[i] += 1;
            }
        }
    }

    if !uncovered.is_empty() {
        warn!(shifts = uncovered.len(), "Generated schedule leaves shifts without a pharmacist");
    }

    GeneratedSchedule {
        schedule,
        shift_counts: roster
            .iter()
            .zip(counts)
            .map(|(e, count)| (e.name.clone(), count))
            .collect(),
        uncovered,
    }
}

/// Replaces the store's week with a generated one.
pub fn apply_generated_schedule(store: &mut PharmacyStore, generated: &GeneratedSchedule) {
    store.replace_schedule(generated.schedule.clone());
    store.log_action(
        "generate_schedule",
        json!({
            "remplace": true,
            "shifts_par_employe": generated.shift_counts,
        }),
    );
    info!(uncovered = generated.uncovered.len(), "Generated schedule applied");
}

/// Whole shifts that fit in the contracted hours.
fn max_shifts(employee: &Employee) -> u32 {
    (employee.contracted_hours / Decimal::from(SHIFT_DURATION_HOURS))
        .floor()
        .to_u32()
        .unwrap_or(0)
}
