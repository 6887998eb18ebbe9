//! HTTP API module for the pharmacy compliance engine.
//!
//! This module exposes compliance reports, replacement suggestions and the
//! absence and schedule workflows as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AbsenceQuery, ApproveAbsenceRequest, AssignmentRequest, CreateAbsenceRequest,
    GenerateScheduleRequest, MarkReadRequest, NotificationQuery, RejectAbsenceRequest,
    ReplacementRequest,
};
pub use response::{
    AbsenceListResponse, ApiError, ApiErrorResponse, AssignmentResponse, GenerateScheduleResponse,
    MarkReadResponse, NotificationListResponse, ReplacementResponse,
};
pub use state::AppState;
