//! API Module
//!
//! HTTP handlers and routing for the cache service REST API.
//!
//! # Endpoints
//! - `POST /cache` - Store a key-value pair
//! - `GET /cache/:key` - Retrieve a value by key
//! - `DELETE /cache/:key` - Delete a key
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
