//! API Routes
//!
//! Configures the Axum router with all cache service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    fetch_handler, health_handler, remove_handler, stats_handler, store_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /cache` - Store a key-value pair
/// - `GET /cache/:key` - Retrieve a value by key
/// - `DELETE /cache/:key` - Delete a key
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check
///
/// # Middleware
/// - CORS: allows any origin so the browser form can call the API
/// - Tracing: logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cache", post(store_handler))
        .route("/cache/:key", get(fetch_handler).delete(remove_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
