//! HTTP server layer
//!
//! Axum server with:
//! - CORS pinned to one configured origin, credentials allowed
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{run_server, AppState, ServerConfig};
