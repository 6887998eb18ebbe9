//! Error types for the pharmacy compliance engine.
//!
//! The rule checks, the aggregator and the replacement ranker are total
//! functions and never fail. Everything around them (seed configuration,
//! the persisted store and the absence/schedule workflows) reports failures
//! through the [`EngineError`] type defined here.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::AbsenceStatus;

/// The main error type for the pharmacy compliance engine.
///
/// # Example
///
/// ```
/// use pharmacy_compliance::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     name: "Jean Valjean".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: Jean Valjean");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The store file could not be read or written.
    #[error("Store I/O error on '{path}': {message}")]
    StoreIo {
        /// The path of the store file.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// The store file exists but does not contain a valid store document.
    #[error("Store file '{path}' is corrupted: {message}")]
    StoreCorrupted {
        /// The path of the store file.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee with this name exists in the roster.
    #[error("Employee not found: {name}")]
    EmployeeNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A weekday name could not be parsed.
    #[error("Invalid day: {value}")]
    InvalidDay {
        /// The rejected value.
        value: String,
    },

    /// No absence is recorded for this employee on this date.
    #[error("No absence found for {employee} on {date}")]
    AbsenceNotFound {
        /// The employee name.
        employee: String,
        /// The absence date.
        date: NaiveDate,
    },

    /// An absence is already recorded for this employee on this date.
    #[error("An absence is already recorded for {employee} on {date} (status: {status})")]
    DuplicateAbsence {
        /// The employee name.
        employee: String,
        /// The absence date.
        date: NaiveDate,
        /// The status of the existing absence.
        status: AbsenceStatus,
    },

    /// The absence is not pending and cannot change status any more.
    #[error("Absence of {employee} on {date} is already {status}")]
    InvalidAbsenceTransition {
        /// The employee name.
        employee: String,
        /// The absence date.
        date: NaiveDate,
        /// The terminal status the absence is in.
        status: AbsenceStatus,
    },

    /// The employee has no paid-leave days left.
    #[error("{employee} has no paid-leave days left (balance: {balance})")]
    LeaveExhausted {
        /// The employee name.
        employee: String,
        /// The current balance.
        balance: u32,
    },

    /// The employee did not declare availability on that day.
    #[error("{employee} is not available on {day}")]
    EmployeeUnavailable {
        /// The employee name.
        employee: String,
        /// The requested day.
        day: String,
    },

    /// The employee is already on the requested shift.
    #[error("{employee} is already scheduled on {day} {shift}")]
    AlreadyScheduled {
        /// The employee name.
        employee: String,
        /// The day.
        day: String,
        /// The shift.
        shift: String,
    },

    /// The employee is not on the requested shift.
    #[error("{employee} is not scheduled on {day} {shift}")]
    NotScheduled {
        /// The employee name.
        employee: String,
        /// The day.
        day: String,
        /// The shift.
        shift: String,
    },

    /// Removing the employee would leave the shift without a pharmacist.
    #[error("Cannot remove {employee}: no other PDE on {day} {shift}")]
    WouldLeaveShiftWithoutPde {
        /// The employee name.
        employee: String,
        /// The day.
        day: String,
        /// The shift.
        shift: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
