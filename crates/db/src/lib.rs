//! Persistence layer: connection pool, schema migrations, seed rows and one
//! repository per table.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

use repositories::{EventSettingRepo, HeroSettingsRepo};

pub type DbPool = sqlx::PgPool;

/// Connection pool tuning.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    /// Connections older than this are closed and replaced, so idle drops on
    /// a remote host are never handed to a request.
    pub max_lifetime: Duration,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            max_lifetime: Duration::from_secs(280),
            acquire_timeout: Duration::from_secs(10),
        }
    }
}

/// Create a connection pool from a database URL.
///
/// Every checkout is pinged first (`test_before_acquire`).
pub async fn create_pool(database_url: &str, settings: &PoolSettings) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .max_lifetime(settings.max_lifetime)
        .acquire_timeout(settings.acquire_timeout)
        .test_before_acquire(true)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Insert the singleton rows the site expects, if they are missing.
pub async fn seed_defaults(pool: &DbPool) -> Result<(), sqlx::Error> {
    if HeroSettingsRepo::ensure_default(pool).await? {
        tracing::info!("Seeded default hero settings");
    }
    if EventSettingRepo::seed_default(pool).await? {
        tracing::info!("Seeded default event settings");
    }
    Ok(())
}
