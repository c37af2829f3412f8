//! Entry repository
//!
//! Two operations:
//! - create: INSERT with RETURNING, server assigns id and created_at
//! - list: SELECT all rows, ordered by id ascending

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::models::EntryTitle;

/// Entry record from database
#[derive(Debug, Clone, FromRow)]
pub struct Entry {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Entry repository
pub struct EntryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> EntryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new entry, returning the stored row with its
    /// server-assigned id and timestamp.
    ///
    /// Every call inserts a fresh row; identical titles are allowed and
    /// there is no idempotency key.
    pub async fn create(&self, title: EntryTitle) -> Result<Entry, DbError> {
        let entry = sqlx::query_as::<_, Entry>(
            r#"
            INSERT INTO entries (title)
            VALUES ($1)
            RETURNING id, title, created_at
            "#,
        )
        .bind(title.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(entry)
    }

    /// List every entry, oldest first.
    ///
    /// Ordering is by id ascending, which matches insertion order for a
    /// BIGSERIAL key. No pagination: the table is expected to stay small.
    pub async fn list(&self) -> Result<Vec<Entry>, DbError> {
        let entries = sqlx::query_as::<_, Entry>(
            r#"
            SELECT id, title, created_at
            FROM entries
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }
}
