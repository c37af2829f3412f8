//! Repository implementations for database access
//!
//! Each operation is a single statement; the implicit per-statement commit
//! is the only transaction boundary this API needs.

pub mod entries;

pub use entries::{DbError, Entry, EntryRepo};
