//! API error type. Every error renders as `{"detail": message}`.

use analysis::AnalysisError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use collector::CollectorError;
use storage::StorageError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Telegram collector is not configured")]
    CollectorUnavailable,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn channel_not_found(id: i64) -> Self {
        ApiError::NotFound(format!("Channel with ID {} not found", id))
    }

    pub fn post_not_found(id: i64) -> Self {
        ApiError::NotFound(format!("Post with ID {} not found", id))
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::CollectorUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(e: AnalysisError) -> Self {
        match e {
            AnalysisError::PostNotFound(id) => ApiError::post_not_found(id),
            AnalysisError::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<CollectorError> for ApiError {
    fn from(e: CollectorError) -> Self {
        match e {
            CollectorError::InvalidUsername(_) => ApiError::BadRequest(e.to_string()),
            CollectorError::ChannelNotFound(_) => ApiError::NotFound(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        }
        let body = serde_json::json!({ "detail": self.to_string() });
        (status, Json(body)).into_response()
    }
}
