//! Repository for the `gallery_items` table.
//!
//! Rows are always returned joined with the owning event's title.

use maraton_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::gallery::{CreateGalleryItem, GalleryItem};

/// Projection over `gallery_items g LEFT JOIN events e`.
const JOINED_COLUMNS: &str = "\
    g.id, g.src, g.alt, COALESCE(e.title, '') AS event, \
    g.event_id, g.year, g.type, g.created_at";

/// Provides CRUD operations for gallery items.
pub struct GalleryRepo;

impl GalleryRepo {
    /// List all gallery items, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM gallery_items g \
             LEFT JOIN events e ON e.id = g.event_id \
             ORDER BY g.created_at DESC, g.id DESC"
        );
        sqlx::query_as::<_, GalleryItem>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM gallery_items g \
             LEFT JOIN events e ON e.id = g.event_id \
             WHERE g.id = $1"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a single gallery item.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryItem,
    ) -> Result<GalleryItem, sqlx::Error> {
        Self::insert(pool, input).await
    }

    /// Insert several gallery items in one transaction.
    ///
    /// Either every row is committed or none is.
    pub async fn create_many(
        pool: &PgPool,
        inputs: &[CreateGalleryItem],
    ) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            created.push(Self::insert(&mut *tx, input).await?);
        }
        tx.commit().await?;
        Ok(created)
    }

    /// Delete a gallery item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM gallery_items")
            .fetch_one(pool)
            .await
    }

    async fn insert<'e, E>(executor: E, input: &CreateGalleryItem) -> Result<GalleryItem, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "WITH g AS ( \
                 INSERT INTO gallery_items (src, alt, event_id, year, type) \
                 VALUES ($1, $2, $3, $4, $5) \
                 RETURNING * \
             ) \
             SELECT {JOINED_COLUMNS} FROM g LEFT JOIN events e ON e.id = g.event_id"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(&input.src)
            .bind(&input.alt)
            .bind(input.event_id)
            .bind(input.year)
            .bind(&input.item_type)
            .fetch_one(executor)
            .await
    }
}
