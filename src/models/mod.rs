//! Core data models for the pharmacy compliance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod absence;
mod day;
mod employee;
mod finding;
mod report;
mod schedule;
mod snapshot;

pub use absence::{Absence, AbsenceStatus, AbsenceType};
pub use day::{Day, SHIFT_DURATION_HOURS, ShiftPeriod};
pub use employee::Employee;
pub use finding::{Finding, FindingKind, Severity};
pub use report::{ComplianceReport, ReportTotals};
pub use schedule::{DaySchedule, ScheduleWeek};
pub use snapshot::{Pharmacy, Snapshot};
