//! Error types for the cache service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache service.
///
/// `NotFound` and `InvalidArgument` are normal outcomes of cache usage.
/// `Internal` signals an index/order desynchronization and indicates a
/// defect rather than a caller mistake.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key absent from the cache, or present but already expired
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Malformed input: empty key, non-positive TTL, oversized key or value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invariant violation inside the engine
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Only invariant violations are worth an error-level log entry;
        // the other two classes are expected outcomes.
        if let CacheError::Internal(msg) = &self {
            tracing::error!("cache invariant violation: {}", msg);
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache service.
pub type Result<T> = std::result::Result<T, CacheError>;
