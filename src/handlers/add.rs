use crate::error::{ApiError, ErrorResponse};
use crate::models::{AddRequest, MessageResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

/// POST /add handler - Create or overwrite an entry
#[utoipa::path(
    post,
    path = routes::ADD,
    request_body = AddRequest,
    responses(
        (status = 200, description = "Entry stored successfully", body = MessageResponse),
        (status = 400, description = "Invalid JSON or missing field", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn add_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(entry) = payload?;

    state.store.set(&entry.key, &entry.value).await?;

    tracing::info!("Successfully stored entry with key: {}", entry.key);
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Entry added successfully")),
    ))
}
