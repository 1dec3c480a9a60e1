pub mod admin;
pub mod events;
pub mod gallery;
pub mod health;
pub mod hero;
pub mod sponsors;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /events                          list, create
/// /events/{id}                     update, delete
///
/// /gallery                         list, create
/// /gallery/bulk                    bulk create
/// /gallery/{id}                    delete
///
/// /sponsors                        list, create
/// /sponsors/{id}                   delete
///
/// /hero-settings                   get (creates defaults)
/// /hero-settings/video             replace video (PUT)
/// /hero-settings/event-date        replace countdown date (PUT)
/// /event-info                      countdown date (GET)
/// /stats                           row counts (GET)
///
/// /admin/login                     password check (POST)
/// /upload/{category}               generic file upload (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/events", events::router())
        .nest("/gallery", gallery::router())
        .nest("/sponsors", sponsors::router())
        .merge(hero::router())
        .nest("/admin", admin::router())
        .nest("/upload", uploads::router())
}
