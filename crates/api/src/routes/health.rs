//! Liveness probe for the hosting platform.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    /// `"ok"` when every check passed, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// The upload root exists and is a directory.
    pub uploads_ready: bool,
}

/// GET /health
///
/// Always answers 200; failing checks only flip `status` to `degraded`.
async fn health(State(state): State<AppState>) -> Json<Health> {
    let (db, uploads) = tokio::join!(
        maraton_db::health_check(&state.pool),
        tokio::fs::metadata(state.file_store.root())
    );
    let db_healthy = db.is_ok();
    let uploads_ready = uploads.is_ok_and(|meta| meta.is_dir());

    if !db_healthy {
        tracing::warn!("Health check: database unreachable");
    }

    Json(Health {
        status: if db_healthy && uploads_ready { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        uploads_ready,
    })
}

/// Mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
