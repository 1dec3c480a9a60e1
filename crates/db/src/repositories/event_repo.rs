//! Repository for the `events` table.

use maraton_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, UpdateEvent};

/// Column list for `events` queries.
const COLUMNS: &str = "id, title, date, description, image, category, featured, created_at";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// List all events, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Find an event by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (title, date, description, image, category, featured) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.date)
            .bind(&input.description)
            .bind(&input.image)
            .bind(&input.category)
            .bind(input.featured)
            .fetch_one(pool)
            .await
    }

    /// Partially update an event.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Returns `None` if
    /// no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                 title = COALESCE($2, title), \
                 date = COALESCE($3, date), \
                 description = COALESCE($4, description), \
                 image = COALESCE($5, image), \
                 category = COALESCE($6, category), \
                 featured = COALESCE($7, featured) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.date)
            .bind(&input.description)
            .bind(&input.image)
            .bind(&input.category)
            .bind(input.featured)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an event. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while gallery items still
    /// reference the event.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether an event exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM events WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
            .fetch_one(pool)
            .await
    }
}
