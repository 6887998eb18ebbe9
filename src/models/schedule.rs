//! Weekly schedule model.
//!
//! A [`ScheduleWeek`] maps each day to its shifts and each shift to the
//! names of the employees assigned to it. Names are kept verbatim, so a
//! schedule may reference people that are not in the roster.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Day, ShiftPeriod};

/// Assignments of one day, keyed by shift.
pub type DaySchedule = BTreeMap<ShiftPeriod, Vec<String>>;

/// The schedule of one week: day → shift → assigned employee names.
///
/// # Example
///
/// ```
/// use pharmacy_compliance::models::{Day, ScheduleWeek, ShiftPeriod};
///
/// let mut week = ScheduleWeek::new();
/// week.assign(Day::Monday, ShiftPeriod::Morning, "Sophie Martin");
/// week.assign(Day::Monday, ShiftPeriod::Afternoon, "Sophie Martin");
///
/// assert_eq!(week.shift_count_for("Sophie Martin"), 2);
/// assert_eq!(week.names_on(Day::Monday), vec!["Sophie Martin"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleWeek(BTreeMap<Day, DaySchedule>);

impl ScheduleWeek {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no day is scheduled.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the scheduled days in weekday order.
    pub fn days(&self) -> impl Iterator<Item = (Day, &DaySchedule)> {
        self.0.iter().map(|(day, shifts)| (*day, shifts))
    }

    /// Iterates over every (day, shift) cell with its assigned names.
    pub fn cells(&self) -> impl Iterator<Item = (Day, ShiftPeriod, &[String])> {
        self.0.iter().flat_map(|(day, shifts)| {
            shifts
                .iter()
                .map(move |(shift, names)| (*day, *shift, names.as_slice()))
        })
    }

    /// Returns the team assigned to a cell (empty if the cell does not exist).
    pub fn team(&self, day: Day, shift: ShiftPeriod) -> &[String] {
        self.0
            .get(&day)
            .and_then(|shifts| shifts.get(&shift))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns every name assigned on `day` across both shifts.
    ///
    /// Names are listed once each, in order of first appearance
    /// (morning before afternoon).
    pub fn names_on(&self, day: Day) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        if let Some(shifts) = self.0.get(&day) {
            for name in shifts.values().flatten() {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Counts the cells of the week in which `name` is assigned.
    pub fn shift_count_for(&self, name: &str) -> usize {
        self.cells()
            .filter(|(_, _, names)| names.iter().any(|n| n == name))
            .count()
    }

    /// Adds `name` to a cell, creating the day and shift if needed.
    pub fn assign(&mut self, day: Day, shift: ShiftPeriod, name: impl Into<String>) {
        self.0
            .entry(day)
            .or_default()
            .entry(shift)
            .or_default()
            .push(name.into());
    }

    /// Removes `name` from a cell. Returns false if it was not assigned there.
    pub fn unassign(&mut self, day: Day, shift: ShiftPeriod, name: &str) -> bool {
        let Some(team) = self.0.get_mut(&day).and_then(|shifts| shifts.get_mut(&shift)) else {
            return false;
        };
        match team.iter().position(|n| n == name) {
            Some(index) => {
                team.remove(index);
                true
            }
            None => false,
        }
    }

    /// Makes sure a cell exists, leaving it empty if it was not scheduled.
    pub fn ensure_cell(&mut self, day: Day, shift: ShiftPeriod) {
        self.0.entry(day).or_default().entry(shift).or_default();
    }
}

impl FromIterator<(Day, DaySchedule)> for ScheduleWeek {
    fn from_iter<I: IntoIterator<Item = (Day, DaySchedule)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
