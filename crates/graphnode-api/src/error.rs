//! API errors and their HTTP rendering

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use graphnode_query::QueryError;
use serde::Serialize;
use thiserror::Error;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// `by` is not an allow-listed field
    #[error("{0}")]
    Query(#[from] QueryError),

    #[error("Missing required parameter: {0}")]
    MissingParam(&'static str),

    #[error("Parameter may not be blank: {0}")]
    BlankParam(&'static str),

    #[error("Node with ID '{0}' not found")]
    NodeNotFound(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Query(_) | ApiError::MissingParam(_) | ApiError::BlankParam(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NodeNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_fields: Option<Vec<String>>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let allowed_fields = match err {
            ApiError::Query(query_err) => query_err.allowed_fields().map(<[String]>::to_vec),
            _ => None,
        };
        Self {
            error: err.to_string(),
            allowed_fields,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status_code().is_client_error() {
            tracing::debug!("Rejecting request: {}", self);
        }
        (self.status_code(), Json(ErrorResponse::from(&self))).into_response()
    }
}
