use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{hero, stats};
use crate::state::AppState;

/// Landing-page routes, merged at the `/api` root.
///
/// ```text
/// GET /hero-settings             -> get_settings
/// PUT /hero-settings/video       -> update_video
/// PUT /hero-settings/event-date  -> update_event_date
/// GET /event-info                -> event_info
/// GET /stats                     -> get_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hero-settings", get(hero::get_settings))
        .route("/hero-settings/video", put(hero::update_video))
        .route("/hero-settings/event-date", put(hero::update_event_date))
        .route("/event-info", get(hero::event_info))
        .route("/stats", get(stats::get_stats))
}
