//! Background Tasks Module
//!
//! Periodic tasks running alongside the HTTP server.
//!
//! # Tasks
//! - Expiry sweep: removes expired cache entries at configured intervals

mod sweep;

pub use sweep::spawn_sweep_task;
