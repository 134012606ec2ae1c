//! HTTP handlers for the standalone server.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::ContactSubmission;
use crate::error::ServiceError;
use crate::services::CONTACT_SUCCESS_MESSAGE;

use super::AppState;

/// `GET /api`: welcome route.
pub async fn welcome() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to the Portfolio API" }))
}

/// `POST /api/contact`: validate and relay one submission.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Response {
    match state.service.submit_contact(&submission).await {
        Ok(()) => Json(json!({ "message": CONTACT_SUCCESS_MESSAGE })).into_response(),
        Err(err) => error_response(&err),
    }
}

/// `GET /api/resume`: serve the resume as a download.
pub async fn fetch_resume(State(state): State<AppState>) -> Response {
    match state.service.fetch_resume().await {
        Ok(resume) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, resume.content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", resume.filename),
                ),
            ],
            resume.bytes,
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}

/// Translate a service error through the shared wire mapping.
fn error_response(err: &ServiceError) -> Response {
    let status =
        StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(err.body())).into_response()
}
