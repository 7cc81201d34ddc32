use crate::error::{ApiError, ErrorResponse};
use crate::models::EntryResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /define/:key handler - Retrieve an entry
#[utoipa::path(
    get,
    path = routes::DEFINE,
    params(
        ("key" = String, Path, description = "Key of the entry")
    ),
    responses(
        (status = 200, description = "Entry found", body = EntryResponse),
        (status = 404, description = "Key not found", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn define_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<(StatusCode, Json<EntryResponse>), ApiError> {
    match state.store.get(&key).await? {
        Some(value) => {
            tracing::info!("Successfully retrieved entry with key: {}", key);
            Ok((StatusCode::OK, Json(EntryResponse { key, value })))
        }
        None => {
            tracing::info!("Entry not found with key: {}", key);
            Err(ApiError::KeyNotFound(key))
        }
    }
}
