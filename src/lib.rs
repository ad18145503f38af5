//! LRU Cache Server - a bounded in-memory key-value cache service
//!
//! Combines LRU eviction with per-entry TTL expiration behind a small
//! HTTP API.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
