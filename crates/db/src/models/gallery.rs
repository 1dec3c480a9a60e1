//! Gallery item models and DTOs.

use maraton_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from `gallery_items`, joined with its event's title.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryItem {
    #[serde(serialize_with = "super::id_as_string")]
    pub id: DbId,
    pub src: String,
    /// Stored filename, used as the image's alt text.
    pub alt: String,
    /// Title of the owning event (empty if it cannot be resolved).
    pub event: String,
    pub event_id: DbId,
    pub year: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub item_type: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a gallery item.
#[derive(Debug, Clone)]
pub struct CreateGalleryItem {
    pub src: String,
    pub alt: String,
    pub event_id: DbId,
    pub year: i32,
    pub item_type: String,
}
