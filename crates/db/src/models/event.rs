//! Event models and DTOs.

use maraton_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    #[serde(serialize_with = "super::id_as_string")]
    pub id: DbId,
    pub title: String,
    /// Free-text display date, e.g. "10 de agosto".
    pub date: String,
    pub description: String,
    pub image: Option<String>,
    pub category: String,
    pub featured: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting a new event.
#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub title: String,
    pub date: String,
    pub description: String,
    pub image: Option<String>,
    pub category: String,
    pub featured: bool,
}

/// DTO for a partial event update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
}
