use chrono::NaiveDateTime;
use maraton_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from `event_settings`. Seeded once at startup.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventSetting {
    pub id: DbId,
    pub event_name: String,
    pub event_date: NaiveDateTime,
    pub is_active: bool,
}
