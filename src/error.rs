use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Keeps client mistakes, expected absence and store failures apart so each
/// maps to its own HTTP status, and renders all of them as `{"error": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// Request body is not valid JSON or does not match the expected shape
    InvalidJson(String),
    /// Key not present in the store
    KeyNotFound(String),
    /// Transport or protocol failure talking to the store
    StoreError(anyhow::Error),
}

/// Client-facing body for store failures
pub const STORE_ERROR_MESSAGE: &str = "Store error: request could not be completed";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidJson(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON payload: {}", msg),
            ),
            ApiError::KeyNotFound(key) => (
                StatusCode::NOT_FOUND,
                format!("Key not found: {}", key),
            ),
            ApiError::StoreError(err) => {
                // Full cause chain goes to the log only
                tracing::error!("Store error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    STORE_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::StoreError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidJson(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let (status, body) = render(ApiError::InvalidJson("missing field `key`".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("missing field `key`"));

        let (status, body) = render(ApiError::KeyNotFound("a".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Key not found: a");

        let (status, body) = render(anyhow::anyhow!("connection refused").into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, STORE_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_store_error_hides_cause_chain() {
        let err = anyhow::anyhow!("connection reset by 10.0.0.5:6379").context("GET a failed");
        let (status, body) = render(ApiError::StoreError(err)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, STORE_ERROR_MESSAGE);
        assert!(!body.error.contains("GET a failed"));
        assert!(!body.error.contains("10.0.0.5"));
    }
}
