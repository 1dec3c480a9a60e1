//! Repository for the `hero_settings` singleton.
//!
//! The table's primary key is pinned to [`SINGLETON_ID`], so every write is
//! an `INSERT .. ON CONFLICT (id)` and a second row can never appear.

use maraton_core::defaults::DEFAULT_EVENT_DATE;
use maraton_core::types::DbId;
use sqlx::PgPool;

use crate::models::hero::HeroSettings;

const COLUMNS: &str = "id, hero_video, event_date, updated_at";

/// Primary key of the only `hero_settings` row.
const SINGLETON_ID: DbId = 1;

pub struct HeroSettingsRepo;

impl HeroSettingsRepo {
    /// Fetch the settings row, if it exists.
    pub async fn find(pool: &PgPool) -> Result<Option<HeroSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_settings WHERE id = $1");
        sqlx::query_as::<_, HeroSettings>(&query)
            .bind(SINGLETON_ID)
            .fetch_optional(pool)
            .await
    }

    /// Insert the default row if missing. Returns `true` if it was created.
    pub async fn ensure_default(pool: &PgPool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO hero_settings (id, hero_video, event_date) \
             VALUES ($1, '', $2) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(SINGLETON_ID)
        .bind(DEFAULT_EVENT_DATE)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch the settings row, creating the default one first if needed.
    pub async fn get_or_create_default(pool: &PgPool) -> Result<HeroSettings, sqlx::Error> {
        if Self::ensure_default(pool).await? {
            tracing::info!("Created missing hero settings row with defaults");
        }
        let query = format!("SELECT {COLUMNS} FROM hero_settings WHERE id = $1");
        sqlx::query_as::<_, HeroSettings>(&query)
            .bind(SINGLETON_ID)
            .fetch_one(pool)
            .await
    }

    /// Replace the background video URL.
    pub async fn update_video(pool: &PgPool, video_url: &str) -> Result<HeroSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_settings (id, hero_video, event_date) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO UPDATE SET \
                 hero_video = EXCLUDED.hero_video, \
                 updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSettings>(&query)
            .bind(SINGLETON_ID)
            .bind(video_url)
            .bind(DEFAULT_EVENT_DATE)
            .fetch_one(pool)
            .await
    }

    /// Replace the countdown target date. The value is stored verbatim.
    pub async fn update_event_date(
        pool: &PgPool,
        event_date: &str,
    ) -> Result<HeroSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_settings (id, hero_video, event_date) \
             VALUES ($1, '', $2) \
             ON CONFLICT (id) DO UPDATE SET \
                 event_date = EXCLUDED.event_date, \
                 updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSettings>(&query)
            .bind(SINGLETON_ID)
            .bind(event_date)
            .fetch_one(pool)
            .await
    }
}
