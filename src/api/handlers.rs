//! HTTP request handlers for the attendance report API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::RandomStatusSource;
use crate::error::ReportResult;
use crate::models::ReportRequest;

use super::request::{ExportRequest, MonthViewQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reports/attendance", post(export_handler))
        .route("/attendance/:year/:month", get(month_view_handler))
        .with_state(state)
}

fn status_source(state: &AppState, seed: Option<u64>) -> ReportResult<RandomStatusSource> {
    let bands = state.config().policy().status_probabilities;
    match seed {
        Some(seed) => RandomStatusSource::seeded(bands, seed),
        None => RandomStatusSource::from_entropy(bands),
    }
}

fn bad_request(error: ApiError) -> Response {
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}

/// Handler for POST /reports/attendance.
///
/// Builds a month or full-year report and returns it as a spreadsheet
/// download.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // serde's message names the offending field
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
            return bad_request(error);
        }
    };

    // Seeded requests reproduce the same statuses
    let report_request: ReportRequest = (&request).into();
    let result = status_source(&state, request.seed)
        .and_then(|mut source| state.pipeline().run(&report_request, &mut source));

    match result {
        Ok(artifact) => {
            info!(
                correlation_id = %correlation_id,
                filename = %artifact.filename,
                bytes = artifact.bytes.len(),
                "Export completed successfully"
            );
            // Browsers save the body under the report name
            let disposition = artifact.content_disposition();
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, artifact.content_type.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                artifact.bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Export failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /attendance/{year}/{month}.
///
/// Returns the month's calendar, statuses and counters as JSON without
/// producing a file.
async fn month_view_handler(
    State(state): State<AppState>,
    path: Result<Path<(i32, u32)>, PathRejection>,
    query: Result<Query<MonthViewQuery>, QueryRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();

    // Handle path and query extraction errors
    let (year, month) = match path {
        Ok(Path(period)) => period,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid path");
            return bad_request(ApiError::validation_error(rejection.body_text()));
        }
    };
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query");
            return bad_request(ApiError::validation_error(rejection.body_text()));
        }
    };
    info!(correlation_id = %correlation_id, year, month, "Processing month view request");

    // Build the month without exporting it
    let result = status_source(&state, query.seed)
        .and_then(|mut source| state.pipeline().month_view(year, month, &mut source));

    match result {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Month view failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
