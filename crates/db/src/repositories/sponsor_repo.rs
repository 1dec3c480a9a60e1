//! Repository for the `sponsors` table.

use maraton_core::types::DbId;
use sqlx::PgPool;

use crate::models::sponsor::{CreateSponsor, Sponsor};

const COLUMNS: &str = "id, name, logo, tier, created_at";

/// Provides CRUD operations for sponsors.
pub struct SponsorRepo;

impl SponsorRepo {
    /// List sponsors ordered by the tier label (plain string order, not rank).
    pub async fn list(pool: &PgPool) -> Result<Vec<Sponsor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sponsors ORDER BY tier COLLATE \"C\" ASC, id ASC");
        sqlx::query_as::<_, Sponsor>(&query).fetch_all(pool).await
    }

    pub async fn create(pool: &PgPool, input: &CreateSponsor) -> Result<Sponsor, sqlx::Error> {
        let query = format!(
            "INSERT INTO sponsors (name, logo, tier) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sponsor>(&query)
            .bind(&input.name)
            .bind(&input.logo)
            .bind(&input.tier)
            .fetch_one(pool)
            .await
    }

    /// Delete a sponsor. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sponsors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sponsors")
            .fetch_one(pool)
            .await
    }
}
