//! Request types for the pharmacy compliance API.
//!
//! Days travel as plain strings so that an unknown weekday is reported as
//! `INVALID_DAY` rather than as a JSON error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AbsenceStatus, AbsenceType, ShiftPeriod};
use crate::workflow::AssignmentAction;

/// Request body for `POST /replacements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacementRequest {
    /// The absent employee.
    pub employee: String,
    /// Weekday of the absence (e.g., "lundi").
    pub day: String,
}

/// Request body for `POST /absences`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAbsenceRequest {
    /// The employee requesting the absence.
    pub employee: String,
    /// Date of the absence.
    pub date: NaiveDate,
    /// Kind of absence.
    #[serde(rename = "type")]
    pub absence_type: AbsenceType,
}

/// Request body for `POST /absences/approve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproveAbsenceRequest {
    /// The absent employee.
    pub employee: String,
    /// Date of the absence.
    pub date: NaiveDate,
}

/// Request body for `POST /absences/reject`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectAbsenceRequest {
    /// The absent employee.
    pub employee: String,
    /// Date of the absence.
    pub date: NaiveDate,
    /// Optional reason shown to the employee.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Query string of `GET /absences`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbsenceQuery {
    /// Only list absences with this status.
    pub status: Option<AbsenceStatus>,
}

/// Query string of `GET /notifications`.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationQuery {
    /// Recipient whose notifications are listed.
    pub employee: String,
}

/// Request body for `POST /notifications/read`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkReadRequest {
    /// Recipient whose notifications are marked read.
    pub employee: String,
}

/// Request body for `POST /schedule/assignments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// The employee to add or remove.
    pub employee: String,
    /// Weekday of the shift.
    pub day: String,
    /// The shift.
    pub shift: ShiftPeriod,
    /// Add or remove.
    pub action: AssignmentAction,
}

/// Request body for `POST /schedule/generate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateScheduleRequest {
    /// Replace the current week with the generated one.
    #[serde(default)]
    pub replace_existing: bool,
}
