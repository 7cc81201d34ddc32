use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{AddRequest, EntryResponse, ListResponse, MessageResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-redis-kv API",
        version = "1.0.0",
        description = "A minimal HTTP key-value API backed by Redis"
    ),
    paths(
        handlers::health::health_handler,
        handlers::add::add_handler,
        handlers::define::define_handler,
        handlers::remove::delete_handler,
        handlers::remove::remove_handler,
        handlers::list::list_handler
    ),
    components(
        schemas(
            AddRequest,
            MessageResponse,
            EntryResponse,
            ListResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "kv", description = "Key-value store operations")
    )
)]
pub struct ApiDoc;
