//! Landing-page hero settings (singleton row).

use maraton_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// The single row of `hero_settings`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroSettings {
    pub id: DbId,
    /// Background video URL, empty when none has been uploaded.
    #[serde(rename = "heroVideo")]
    pub hero_video: String,
    /// Countdown target, stored verbatim as sent by the admin UI.
    #[serde(rename = "eventDate")]
    pub event_date: String,
    pub updated_at: Timestamp,
}
