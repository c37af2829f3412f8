//! worklog-server: HTTP API for worklog entries
//!
//! Exposes a small axum server over a PostgreSQL `entries` table:
//! create a titled entry, list all entries. The binary in `worklog-cli`
//! wires configuration and launches [`http::run_server`].

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, ApiError, ServerConfig};
pub use models::ValidationError;
