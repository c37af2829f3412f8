//! Entry endpoints
//!
//! POST /entries creates one entry; GET /entries lists them all. Both
//! return the same response shape with an RFC 3339 timestamp.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::{Entry, EntryRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::EntryTitle;

/// Create entry request
#[derive(Deserialize)]
pub struct CreateEntryRequest {
    pub title: String,
}

/// Entry response
#[derive(Serialize)]
pub struct EntryResponse {
    pub id: i64,
    pub title: String,
    pub created_at: String,
}

impl From<Entry> for EntryResponse {
    fn from(e: Entry) -> Self {
        Self {
            id: e.id,
            title: e.title,
            created_at: e.created_at.to_rfc3339(),
        }
    }
}

/// POST /entries - create a new entry
async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateEntryRequest>,
) -> Result<Json<EntryResponse>, ApiError> {
    let title = EntryTitle::new(&req.title)?;
    let entry = EntryRepo::new(&state.pool).create(title).await?;

    Ok(Json(EntryResponse::from(entry)))
}

/// GET /entries - list all entries, oldest first
async fn list_entries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EntryResponse>>, ApiError> {
    let entries = EntryRepo::new(&state.pool).list().await?;

    Ok(Json(entries.into_iter().map(EntryResponse::from).collect()))
}

/// Entry routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/entries", get(list_entries).post(create_entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn response_shape_from_entry() {
        let entry = Entry {
            id: 1,
            title: "write spec".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        };

        let resp = EntryResponse::from(entry);
        assert_eq!(resp.id, 1);
        assert_eq!(resp.title, "write spec");
        assert_eq!(resp.created_at, "2024-05-01T12:30:00+00:00");
    }

    #[test]
    fn response_serializes_expected_fields() {
        let resp = EntryResponse {
            id: 7,
            title: "standup notes".to_string(),
            created_at: "2024-05-01T12:30:00+00:00".to_string(),
        };

        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "title": "standup notes",
                "created_at": "2024-05-01T12:30:00+00:00"
            })
        );
    }

    #[test]
    fn request_requires_title_field() {
        let missing: Result<CreateEntryRequest, _> = serde_json::from_str("{}");
        assert!(missing.is_err());

        let wrong_type: Result<CreateEntryRequest, _> =
            serde_json::from_str(r#"{"title": 42}"#);
        assert!(wrong_type.is_err());

        let ok: CreateEntryRequest =
            serde_json::from_str(r#"{"title": "write spec"}"#).unwrap();
        assert_eq!(ok.title, "write spec");
    }
}
