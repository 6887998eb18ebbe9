//! Response types for the pharmacy compliance API.
//!
//! This module defines the response bodies, the error response structure
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Absence, Day, ShiftPeriod};
use crate::rules::ReplacementCandidate;
use crate::store::Notification;
use crate::workflow::GeneratedSchedule;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, code) = match &error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                return ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                };
            }
            EngineError::StoreIo { .. } | EngineError::StoreCorrupted { .. } => {
                return ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("STORE_ERROR", "Store error", message),
                };
            }
            EngineError::EmployeeNotFound { .. } => (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND"),
            EngineError::AbsenceNotFound { .. } => (StatusCode::NOT_FOUND, "ABSENCE_NOT_FOUND"),
            EngineError::InvalidDay { .. } => (StatusCode::BAD_REQUEST, "INVALID_DAY"),
            EngineError::DuplicateAbsence { .. } => (StatusCode::CONFLICT, "DUPLICATE_ABSENCE"),
            EngineError::InvalidAbsenceTransition { .. } => {
                (StatusCode::CONFLICT, "INVALID_TRANSITION")
            }
            EngineError::AlreadyScheduled { .. } => (StatusCode::CONFLICT, "ALREADY_SCHEDULED"),
            EngineError::NotScheduled { .. } => (StatusCode::CONFLICT, "NOT_SCHEDULED"),
            EngineError::WouldLeaveShiftWithoutPde { .. } => (StatusCode::CONFLICT, "PDE_REQUIRED"),
            EngineError::LeaveExhausted { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "LEAVE_EXHAUSTED")
            }
            EngineError::EmployeeUnavailable { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "EMPLOYEE_UNAVAILABLE")
            }
        };

        ApiErrorResponse {
            status,
            error: ApiError::new(code, message),
        }
    }
}

/// Response body of `POST /replacements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacementResponse {
    /// The absent employee, roster spelling.
    pub employee: String,
    /// The day considered.
    pub day: Day,
    /// Candidates, best first.
    pub candidates: Vec<ReplacementCandidate>,
}

/// Response body of `GET /absences`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsenceListResponse {
    /// Matching absences, in recording order.
    pub absences: Vec<Absence>,
    /// Number of matching absences.
    pub total: usize,
}

/// Response body of `GET /notifications`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationListResponse {
    /// Notifications visible to the employee.
    pub notifications: Vec<Notification>,
    /// Number of unread notifications.
    pub unread: usize,
}

/// Response body of `POST /notifications/read`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkReadResponse {
    /// Notifications newly marked as read.
    pub marked: usize,
    /// Notifications still unread afterwards.
    pub unread: usize,
}

/// Response body of `POST /schedule/assignments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentResponse {
    /// Day of the shift.
    pub day: Day,
    /// The shift.
    pub shift: ShiftPeriod,
    /// Team of the shift after the change.
    pub team: Vec<String>,
}

/// Response body of `POST /schedule/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateScheduleResponse {
    /// Whether the generated week replaced the current one.
    pub applied: bool,
    /// The generated week.
    #[serde(flatten)]
    pub generated: GeneratedSchedule,
}
