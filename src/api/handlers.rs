//! HTTP request handlers for the pharmacy compliance API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Day, Snapshot};
use crate::rules::{evaluate_all, render_summary, suggest_replacements};
use crate::workflow;

use super::request::{
    AbsenceQuery, ApproveAbsenceRequest, AssignmentRequest, CreateAbsenceRequest,
    GenerateScheduleRequest, MarkReadRequest, NotificationQuery, RejectAbsenceRequest,
    ReplacementRequest,
};
use super::response::{
    AbsenceListResponse, ApiError, ApiErrorResponse, AssignmentResponse, GenerateScheduleResponse,
    MarkReadResponse, NotificationListResponse, ReplacementResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/compliance",
            get(current_compliance_handler).post(snapshot_compliance_handler),
        )
        .route("/compliance/summary", get(summary_handler))
        .route("/replacements", post(replacements_handler))
        .route(
            "/absences",
            get(list_absences_handler).post(create_absence_handler),
        )
        .route("/absences/approve", post(approve_absence_handler))
        .route("/absences/reject", post(reject_absence_handler))
        .route("/notifications", get(notifications_handler))
        .route("/notifications/read", post(mark_read_handler))
        .route("/schedule", get(schedule_handler))
        .route("/schedule/assignments", post(assignment_handler))
        .route("/schedule/generate", post(generate_schedule_handler))
        .with_state(state)
}

/// Handler for GET /compliance.
///
/// Evaluates the current state of the store.
async fn current_compliance_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Evaluating current state");

    let snapshot = state.store().read().await.snapshot(state.config());
    evaluate(correlation_id, &snapshot)
}

/// Handler for POST /compliance.
///
/// Evaluates a snapshot supplied by the caller, leaving the store untouched.
async fn snapshot_compliance_handler(
    payload: Result<Json<Snapshot>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Evaluating supplied snapshot");

    let snapshot = match payload {
        Ok(Json(snapshot)) => snapshot,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    evaluate(correlation_id, &snapshot)
}

fn evaluate(correlation_id: Uuid, snapshot: &Snapshot) -> Response {
    let start_time = Instant::now();
    let report = evaluate_all(snapshot);
    info!(
        correlation_id = %correlation_id,
        report_id = %report.report_id,
        score = report.score,
        duration_us = start_time.elapsed().as_micros(),
        "Compliance evaluation completed"
    );
    json_response(StatusCode::OK, &report)
}

/// Handler for GET /compliance/summary.
async fn summary_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Rendering compliance summary");

    let snapshot = state.store().read().await.snapshot(state.config());
    let summary = render_summary(&evaluate_all(&snapshot));
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        summary,
    )
        .into_response()
}

/// Handler for POST /replacements.
///
/// Ranks the substitutes for an employee on a given day.
async fn replacements_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReplacementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing replacement request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let store = state.store().read().await;
    let result = request.day.parse::<Day>().and_then(|day| {
        let employee = state.config().find_employee(&request.employee)?.name.clone();
        let snapshot = store.snapshot(state.config());
        let candidates = suggest_replacements(&snapshot, &employee, day);
        Ok(ReplacementResponse {
            employee,
            day,
            candidates,
        })
    });
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for GET /absences.
async fn list_absences_handler(
    State(state): State<AppState>,
    query: Result<Query<AbsenceQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query string");
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(rejection.body_text()),
            }
            .into_response();
        }
    };

    let store = state.store().read().await;
    let absences: Vec<_> = workflow::list_absences(&store, query.status)
        .into_iter()
        .cloned()
        .collect();
    info!(correlation_id = %correlation_id, total = absences.len(), "Listed absences");

    json_response(
        StatusCode::OK,
        &AbsenceListResponse {
            total: absences.len(),
            absences,
        },
    )
}

/// Handler for POST /absences.
async fn create_absence_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateAbsenceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing absence request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = state
        .commit(|store, config| {
            workflow::create_absence(
                store,
                config,
                &request.employee,
                request.date,
                request.absence_type,
            )
        })
        .await;
    respond(correlation_id, StatusCode::CREATED, result)
}

/// Handler for POST /absences/approve.
async fn approve_absence_handler(
    State(state): State<AppState>,
    payload: Result<Json<ApproveAbsenceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing absence approval");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = state
        .commit(|store, config| {
            workflow::approve_absence(store, config, &request.employee, request.date)
        })
        .await;
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for POST /absences/reject.
async fn reject_absence_handler(
    State(state): State<AppState>,
    payload: Result<Json<RejectAbsenceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing absence rejection");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = state
        .commit(|store, config| {
            workflow::reject_absence(
                store,
                config,
                &request.employee,
                request.date,
                request.reason.as_deref(),
            )
        })
        .await;
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for GET /notifications.
async fn notifications_handler(
    State(state): State<AppState>,
    query: Result<Query<NotificationQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(rejection.body_text()),
            }
            .into_response();
        }
    };

    let store = state.store().read().await;
    let notifications: Vec<_> = store
        .notifications_for(&query.employee)
        .into_iter()
        .cloned()
        .collect();

    json_response(
        StatusCode::OK,
        &NotificationListResponse {
            unread: notifications.iter().filter(|n| !n.read).count(),
            notifications,
        },
    )
}

/// Handler for POST /notifications/read.
///
/// Marks every notification visible to the employee as read.
async fn mark_read_handler(
    State(state): State<AppState>,
    payload: Result<Json<MarkReadRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = state
        .commit(|store, _| {
            let marked = store.mark_read(&request.employee);
            let unread = store
                .notifications_for(&request.employee)
                .iter()
                .filter(|n| !n.read)
                .count();
            Ok(MarkReadResponse { marked, unread })
        })
        .await;
    info!(correlation_id = %correlation_id, employee = %request.employee, "Marked notifications read");
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for GET /schedule.
async fn schedule_handler(State(state): State<AppState>) -> Response {
    let store = state.store().read().await;
    json_response(StatusCode::OK, store.schedule())
}

/// Handler for POST /schedule/assignments.
async fn assignment_handler(
    State(state): State<AppState>,
    payload: Result<Json<AssignmentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule change");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result: EngineResult<AssignmentResponse> = match request.day.parse::<Day>() {
        Ok(day) => {
            state
                .commit(|store, config| {
                    let team = workflow::modify_schedule(
                        store,
                        config,
                        &request.employee,
                        day,
                        request.shift,
                        request.action,
                    )?;
                    Ok(AssignmentResponse {
                        day,
                        shift: request.shift,
                        team,
                    })
                })
                .await
        }
        Err(err) => Err(err),
    };
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for POST /schedule/generate.
///
/// Returns a proposed week; with `replace_existing` the proposal also
/// replaces the current one.
async fn generate_schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateScheduleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Generating schedule");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let generated = workflow::generate_schedule(state.config().roster());
    let result = if request.replace_existing {
        state
            .commit(|store, _| {
                workflow::apply_generated_schedule(store, &generated);
                Ok(())
            })
            .await
    } else {
        Ok(())
    };

    respond(
        correlation_id,
        StatusCode::OK,
        result.map(|()| GenerateScheduleResponse {
            applied: request.replace_existing,
            generated,
        }),
    )
}

/// Serializes `body` as a JSON response.
fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Turns a workflow result into a response, logging failures.
fn respond<T: Serialize>(correlation_id: Uuid, status: StatusCode, result: EngineResult<T>) -> Response {
    match result {
        Ok(body) => json_response(status, &body),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
