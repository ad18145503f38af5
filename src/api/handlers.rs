//! API Handlers
//!
//! HTTP request handlers translating the wire contract into engine calls.

use std::sync::Arc;
use tokio::sync::Mutex;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::cache::CacheEngine;
use crate::clock::SystemClock;
use crate::error::Result;
use crate::models::{
    FetchResponse, HealthResponse, RemoveResponse, StatsResponse, StoreRequest, StoreResponse,
};

/// Application state shared across all handlers.
///
/// The engine sits behind a single exclusive mutex because every
/// operation, reads included, mutates recency state; there is no safe
/// read/write split. Handlers hold the lock only for the in-memory
/// mutation, never across I/O.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache engine
    pub cache: Arc<Mutex<CacheEngine>>,
}

impl AppState {
    /// Creates a new AppState around the given engine.
    pub fn new(cache: CacheEngine) -> Self {
        Self {
            cache: Arc::new(Mutex::new(cache)),
        }
    }

    /// Creates a new AppState from configuration, using the system clock.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let cache = CacheEngine::new(config.capacity, Arc::new(SystemClock));
        Self::new(cache)
    }
}

/// Handler for POST /cache
///
/// Stores a key-value pair with an optional expiration in seconds.
/// Responds 201 on success, 400 on an empty key or non-positive
/// expiration.
pub async fn store_handler(
    State(state): State<AppState>,
    Json(req): Json<StoreRequest>,
) -> Result<(StatusCode, Json<StoreResponse>)> {
    let mut cache = state.cache.lock().await;
    cache.set(req.key.clone(), req.value, req.expiration)?;

    Ok((StatusCode::CREATED, Json(StoreResponse::new(req.key))))
}

/// Handler for GET /cache/:key
///
/// Retrieves a value by key. Expired entries answer 404 exactly like
/// absent ones.
pub async fn fetch_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<FetchResponse>> {
    let mut cache = state.cache.lock().await;
    let value = cache.get(&key)?;
    let remaining = cache.ttl_remaining_secs(&key);

    Ok(Json(FetchResponse::new(key, value, remaining)))
}

/// Handler for DELETE /cache/:key
///
/// Removes a key from the cache. Responds 404 when the key is absent
/// or already expired.
pub async fn remove_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<RemoveResponse>> {
    let mut cache = state.cache.lock().await;
    cache.delete(&key)?;

    Ok(Json(RemoveResponse::new(key)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.lock().await;
    let stats = cache.stats();

    Json(StatsResponse::from_stats(&stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
