//! Replacement ranking.
//!
//! When an absence is approved the workflow asks for the best substitute on
//! the day of the absence. Candidates are filtered on availability and
//! qualification, then scored; ties keep roster order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Day, Snapshot};

/// Score bonus for a qualified candidate.
pub const QUALIFIED_BONUS: u32 = 10;
/// Score bonus for a candidate with a comfortable leave balance.
pub const LEAVE_RESERVE_BONUS: u32 = 5;
/// Balance above which [`LEAVE_RESERVE_BONUS`] applies.
pub const LEAVE_RESERVE_DAYS: u32 = 5;
/// Score bonus for a candidate available on many days.
pub const WIDE_AVAILABILITY_BONUS: u32 = 3;
/// Number of declared days from which [`WIDE_AVAILABILITY_BONUS`] applies.
pub const WIDE_AVAILABILITY_DAYS: usize = 5;

/// A ranked substitute for an absent employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementCandidate {
    /// Candidate name.
    pub name: String,
    /// Candidate role label.
    pub role: String,
    /// Priority score; higher is better.
    pub score: u32,
    /// Remaining paid-leave days of the candidate.
    pub remaining_leave_days: u32,
    /// Declared availability of the candidate.
    pub availability: Vec<Day>,
}

/// Ranks the employees who could replace `absent` on `day`, best first.
///
/// A candidate must be someone other than the absent employee, not already
/// scheduled on `day`, available on `day`, and qualified whenever the absent
/// employee is. Scores add [`QUALIFIED_BONUS`], [`LEAVE_RESERVE_BONUS`] and
/// [`WIDE_AVAILABILITY_BONUS`] when they apply.
///
/// Returns an empty list when `absent` is not in the roster.
///
/// # Examples
///
/// ```
/// use pharmacy_compliance::models::{Day, Employee, Snapshot};
/// use pharmacy_compliance::rules::suggest_replacements;
/// use rust_decimal::Decimal;
///
/// let staff = |name: &str, qualified: bool| Employee {
///     name: name.to_string(),
///     role: "Staff".to_string(),
///     qualified,
///     contracted_hours: Decimal::from(35),
///     remaining_leave_days: 10,
///     availability: vec![Day::Monday],
/// };
///
/// let snapshot = Snapshot {
///     pharmacy: Default::default(),
///     roster: vec![staff("Absent", true), staff("Helper", false), staff("Backup", true)],
///     schedule: Default::default(),
///     absences: vec![],
///     coverage_rate: Decimal::from(100),
/// };
///
/// let candidates = suggest_replacements(&snapshot, "Absent", Day::Monday);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].name, "Backup");
/// assert_eq!(candidates[0].score, 15);
/// ```
pub fn suggest_replacements(
    snapshot: &Snapshot,
    absent: &str,
    day: Day,
) -> Vec<ReplacementCandidate> {
    let Some(absent_employee) = snapshot.employee(absent) else {
        debug!(employee = %absent, "Absent employee not in roster, no replacement suggested");
        return Vec::new();
    };
    let needs_qualified = absent_employee.is_qualified();
    let already_scheduled: HashSet<&str> = snapshot.schedule.names_on(day).into_iter().collect();

    let mut candidates: Vec<ReplacementCandidate> = snapshot
        .roster
        .iter()
        .filter(|e| e.name != absent)
        .filter(|e| !already_scheduled.contains(e.name.as_str()))
        .filter(|e| e.is_available_on(day))
        .filter(|e| !needs_qualified || e.is_qualified())
        .map(|e| {
            let mut score = 0;
            if e.is_qualified() {
                score += QUALIFIED_BONUS;
            }
            if e.remaining_leave_days > LEAVE_RESERVE_DAYS {
                score += LEAVE_RESERVE_BONUS;
            }
            if e.availability.len() >= WIDE_AVAILABILITY_DAYS {
                score += WIDE_AVAILABILITY_BONUS;
            }

            ReplacementCandidate {
                name: e.name.clone(),
                role: e.role.clone(),
                score,
                remaining_leave_days: e.remaining_leave_days,
                availability: e.availability.clone(),
            }
        })
        .collect();

    // Stable: equal scores keep roster order.
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        employee = %absent,
        day = %day,
        candidates = candidates.len(),
        "Ranked replacement candidates"
    );

    candidates
}
