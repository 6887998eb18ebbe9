//! Operations that change the pharmacy's state.
//!
//! The rule checks only read a snapshot. The functions in this module are
//! the write side: they validate a request against the roster and the
//! current [`PharmacyStore`](crate::store::PharmacyStore), apply it, notify
//! the people concerned and append to the action log. Persisting the store
//! afterwards is up to the caller.

mod absences;
mod schedule;

pub use absences::{
    ApprovalOutcome, approve_absence, create_absence, list_absences, reject_absence,
};
pub use schedule::{
    AssignmentAction, GeneratedSchedule, UncoveredShift, apply_generated_schedule,
    generate_schedule, modify_schedule,
};
