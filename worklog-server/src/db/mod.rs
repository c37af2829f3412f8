//! Database layer - connection pool, migrations, and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Each request checks out its own connection, returned on every exit path
//! - Rely on DB defaults for id/created_at - no client-side generation

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::{DbError, Entry, EntryRepo};
