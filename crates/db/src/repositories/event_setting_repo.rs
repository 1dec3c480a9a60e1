use maraton_core::defaults::{default_event_datetime, DEFAULT_EVENT_NAME};
use sqlx::PgPool;

use crate::models::event_setting::EventSetting;

pub struct EventSettingRepo;

impl EventSettingRepo {
    /// Insert the default row only when the table is empty.
    ///
    /// Returns `true` if a row was inserted.
    pub async fn seed_default(pool: &PgPool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO event_settings (event_name, event_date, is_active) \
             SELECT $1, $2, TRUE \
             WHERE NOT EXISTS (SELECT 1 FROM event_settings)",
        )
        .bind(DEFAULT_EVENT_NAME)
        .bind(default_event_datetime())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The first settings row by id.
    pub async fn first(pool: &PgPool) -> Result<Option<EventSetting>, sqlx::Error> {
        sqlx::query_as::<_, EventSetting>(
            "SELECT id, event_name, event_date, is_active FROM event_settings ORDER BY id LIMIT 1",
        )
        .fetch_optional(pool)
        .await
    }
}
