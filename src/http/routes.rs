//! HTTP route definitions

use axum::{routing::get, Router};

use super::handlers::{self, AppState};

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index_page))
        .route("/health", get(handlers::health))
        .route(
            "/clipboard",
            get(handlers::fetch_clipboard)
                .post(handlers::replace_clipboard)
                .delete(handlers::clear_clipboard),
        )
        .route("/clipboard/debug", get(handlers::debug_storage))
        .with_state(state)
}
