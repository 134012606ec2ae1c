//! Single-invocation adapter for function-platform deployments.
//!
//! The platform hands us one `{httpMethod, body}` event and expects a
//! complete response with status, headers and (possibly base64) body.
//! CORS headers are attached to every response here because this
//! deployment shape has no middleware stack; the policy is the same
//! permissive one the standalone server applies as a layer.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::ContactSubmission;
use crate::error::ServiceError;
use crate::services::{PortfolioService, CONTACT_SUCCESS_MESSAGE};

/// Incoming platform event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// HTTP method of the original request.
    #[serde(default)]
    pub http_method: String,
    /// Raw request body, if any.
    #[serde(default)]
    pub body: Option<String>,
}

/// Outgoing platform response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

/// Endpoint targeted by one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Contact,
    Resume,
}

/// Dispatch one event to the handler for `route`.
pub async fn handle(service: &PortfolioService, route: Route, event: &Event) -> FunctionResponse {
    match route {
        Route::Contact => handle_contact(service, event).await,
        Route::Resume => handle_resume(service, event).await,
    }
}

/// Handle one contact-form invocation.
pub async fn handle_contact(service: &PortfolioService, event: &Event) -> FunctionResponse {
    const METHODS: &str = "POST, OPTIONS";

    if event.http_method == "OPTIONS" {
        return preflight(METHODS);
    }
    if event.http_method != "POST" {
        return method_not_allowed(METHODS);
    }

    // An unparsable body has no fields to validate, so it reports the same
    // validation failure as an empty submission.
    let submission: ContactSubmission =
        match serde_json::from_str(event.body.as_deref().unwrap_or("")) {
            Ok(s) => s,
            Err(_) => return error_response(METHODS, &ServiceError::MissingFields),
        };

    match service.submit_contact(&submission).await {
        Ok(()) => json_response(200, METHODS, json!({ "message": CONTACT_SUCCESS_MESSAGE })),
        Err(err) => error_response(METHODS, &err),
    }
}

/// Handle one resume-download invocation.
pub async fn handle_resume(service: &PortfolioService, event: &Event) -> FunctionResponse {
    const METHODS: &str = "GET, OPTIONS";

    if event.http_method == "OPTIONS" {
        return preflight(METHODS);
    }
    if event.http_method != "GET" {
        return method_not_allowed(METHODS);
    }

    match service.fetch_resume().await {
        Ok(resume) => {
            let mut headers = cors_headers(METHODS);
            headers.insert("Content-Type".to_string(), resume.content_type.to_string());
            headers.insert(
                "Content-Disposition".to_string(),
                format!("attachment; filename=\"{}\"", resume.filename),
            );
            FunctionResponse {
                status_code: 200,
                headers,
                body: BASE64.encode(&resume.bytes),
                is_base64_encoded: true,
            }
        }
        Err(err) => error_response(METHODS, &err),
    }
}

/// Permissive CORS header set, `methods` naming what the route accepts.
fn cors_headers(methods: &str) -> HashMap<String, String> {
    HashMap::from([
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type".to_string(),
        ),
        (
            "Access-Control-Allow-Methods".to_string(),
            methods.to_string(),
        ),
    ])
}

/// Empty 200 answering a CORS preflight, independent of payload.
fn preflight(methods: &str) -> FunctionResponse {
    FunctionResponse {
        status_code: 200,
        headers: cors_headers(methods),
        body: String::new(),
        is_base64_encoded: false,
    }
}

fn method_not_allowed(methods: &str) -> FunctionResponse {
    json_response(405, methods, json!({ "message": "Method not allowed" }))
}

/// JSON response with the CORS header set attached.
fn json_response(status: u16, methods: &str, body: serde_json::Value) -> FunctionResponse {
    let mut headers = cors_headers(methods);
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    FunctionResponse {
        status_code: status,
        headers,
        body: body.to_string(),
        is_base64_encoded: false,
    }
}

/// Translate a service error through the shared wire mapping.
fn error_response(methods: &str, err: &ServiceError) -> FunctionResponse {
    let body = serde_json::to_value(err.body()).expect("error body serializes");
    json_response(err.status(), methods, body)
}
