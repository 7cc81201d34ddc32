use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{
    add_handler, define_handler, delete_handler, health_handler, list_handler, remove_handler,
};
use crate::state::AppState;

// Route path constants - single source of truth for all API paths
pub const HEALTH: &str = "/health";
pub const ADD: &str = "/add";
pub const DEFINE: &str = "/define/{key}";
pub const REMOVE: &str = "/remove/{key}";
pub const LIST: &str = "/list";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the application router with every endpoint, API docs and request tracing
pub fn create_router(state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new()
        .route(HEALTH, get(health_handler))
        .route(ADD, post(add_handler))
        .route(DEFINE, get(define_handler).delete(delete_handler))
        .route(LIST, get(list_handler));

    if state.config.legacy_remove_route {
        router = router.route(REMOVE, get(remove_handler));
    }

    router
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
