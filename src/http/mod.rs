//! HTTP surface: routing, shared state, and the response envelope.

pub mod handlers;
pub mod routes;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::{core::services::ServiceError, storage::Store};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

/// Error half of the response envelope. Every failure renders as
/// `{"success": false, "message": ...}` with the mapped status: 404 for
/// missing records, 500 for everything else.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::NotFound(message) | ApiError::Internal(message) => message,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(message) => ApiError::NotFound(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, message = %self.message(), "request failed");
        } else {
            tracing::debug!(%status, message = %self.message(), "request rejected");
        }
        (
            status,
            Json(json!({ "success": false, "message": self.message() })),
        )
            .into_response()
    }
}

/// Success envelope for operations that only acknowledge.
#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub success: bool,
    pub message: String,
}

impl MessageEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Parses a path identifier. Malformed input surfaces through the 500
/// envelope, the way a store-level cast failure would.
pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::Internal(format!("invalid identifier `{raw}`")))
}
