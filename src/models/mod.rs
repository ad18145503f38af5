//! Models Module
//!
//! Request and response DTOs for the HTTP API.

mod requests;
mod responses;

pub use requests::StoreRequest;
pub use responses::{FetchResponse, HealthResponse, RemoveResponse, StatsResponse, StoreResponse};
