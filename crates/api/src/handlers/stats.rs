use axum::extract::State;
use axum::Json;
use maraton_db::repositories::{EventRepo, GalleryRepo, SponsorRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::Envelope;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Stats {
    pub total_events: i64,
    pub total_gallery: i64,
    pub total_sponsors: i64,
}

#[derive(Debug, Serialize)]
pub struct StatsBody {
    pub stats: Stats,
}

/// GET /api/stats
///
/// Row counts for the admin dashboard.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<Envelope<StatsBody>>> {
    let (total_events, total_gallery, total_sponsors) = tokio::try_join!(
        EventRepo::count(&state.pool),
        GalleryRepo::count(&state.pool),
        SponsorRepo::count(&state.pool)
    )?;

    Ok(Envelope::success(StatsBody {
        stats: Stats {
            total_events,
            total_gallery,
            total_sponsors,
        },
    }))
}
