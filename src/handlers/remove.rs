use crate::error::{ApiError, ErrorResponse};
use crate::models::MessageResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /define/:key handler - Remove an entry
#[utoipa::path(
    delete,
    path = routes::DEFINE,
    params(
        ("key" = String, Path, description = "Key of the entry")
    ),
    responses(
        (status = 200, description = "Entry removed", body = MessageResponse),
        (status = 404, description = "Key not found", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    remove_entry(&state, key).await
}

/// GET /remove/:key handler - Remove an entry (kept for existing callers)
#[utoipa::path(
    get,
    path = routes::REMOVE,
    params(
        ("key" = String, Path, description = "Key of the entry")
    ),
    responses(
        (status = 200, description = "Entry removed", body = MessageResponse),
        (status = 404, description = "Key not found", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn remove_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    remove_entry(&state, key).await
}

async fn remove_entry(
    state: &AppState,
    key: String,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    // DEL succeeds on a missing key; a zero count is what signals absence
    if state.store.delete(&key).await? == 0 {
        tracing::info!("Entry not found with key: {}", key);
        return Err(ApiError::KeyNotFound(key));
    }

    tracing::info!("Successfully removed entry with key: {}", key);
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Entry removed successfully")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{parse, send, test_app};
    use crate::store::memory::MemoryStore;
    use crate::store::KvStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_remove_endpoint_success() {
        let store = Arc::new(MemoryStore::new());
        store.set("k", "v").await.unwrap();
        let app = test_app(store.clone());

        let (status, body) = send(&app, "GET", "/remove/k", None).await;

        assert_eq!(status, StatusCode::OK);
        let response: MessageResponse = parse(&body);
        assert_eq!(response.message, "Entry removed successfully");
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_method_success() {
        let store = Arc::new(MemoryStore::new());
        store.set("k", "v").await.unwrap();
        let app = test_app(store.clone());

        let (status, _) = send(&app, "DELETE", "/define/k", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_absent_key_is_idempotent_404() {
        let app = test_app(Arc::new(MemoryStore::new()));

        for _ in 0..2 {
            let (status, body) = send(&app, "GET", "/remove/ghost", None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            let error: ErrorResponse = parse(&body);
            assert!(error.error.contains("ghost"));

            let (status, _) = send(&app, "DELETE", "/define/ghost", None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn test_remove_endpoint_store_failure() {
        let app = test_app(Arc::new(MemoryStore::failing()));

        let (status, _) = send(&app, "GET", "/remove/k", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
