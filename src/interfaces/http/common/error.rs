//! Error-to-response mapping
//!
//! Every validation failure is converted here, at the handler boundary,
//! to a 400 response with a JSON body. No other failure path exists, so
//! no request can surface a 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Error response body: `{"error": "<message>"}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of the rejected input
    pub error: String,
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

// ── Tests ──────────────────────────────────────────────────────
