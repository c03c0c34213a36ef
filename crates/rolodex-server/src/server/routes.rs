//! Router wiring.

use super::handlers;
use super::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

/// Builds the application router.
///
/// CORS is open to any origin, method, and header; the API is consumed by
/// a browser frontend served from elsewhere.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/clients",
            get(handlers::list_clients).post(handlers::create_client),
        )
        .route("/api/clients/bulk", post(handlers::create_clients_bulk))
        .route("/healthz", get(handlers::health))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
