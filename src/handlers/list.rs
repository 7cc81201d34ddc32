use crate::error::{ApiError, ErrorResponse};
use crate::models::{EntryResponse, ListResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::MATCH_ALL;
use axum::{extract::State, http::StatusCode, Json};

/// GET /list handler - List every entry in the store
///
/// Reads the key set with KEYS, then fetches all values in a single MGET.
/// The two reads are not atomic: a key deleted in between, or one holding a
/// non-string type, comes back without a value and is listed with an empty
/// value. Order is whatever the store returns.
#[utoipa::path(
    get,
    path = routes::LIST,
    responses(
        (status = 200, description = "All entries in the store", body = ListResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "kv"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ListResponse>), ApiError> {
    let keys = state.store.list_keys(MATCH_ALL).await?;
    let values = state.store.get_many(&keys).await?;

    let mut values = values.into_iter();
    let mut missing = 0;
    let entries: Vec<EntryResponse> = keys
        .into_iter()
        .map(|key| {
            let value = values.next().flatten().unwrap_or_else(|| {
                missing += 1;
                String::new()
            });
            EntryResponse { key, value }
        })
        .collect();

    if missing > 0 {
        tracing::warn!(
            "{} of {} listed keys had no readable value, listed as empty",
            missing,
            entries.len()
        );
    }

    tracing::info!("Listed {} entries", entries.len());

    Ok((StatusCode::OK, Json(ListResponse { entries })))
}
