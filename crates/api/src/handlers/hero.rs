//! Handlers for the landing-page hero settings and the public event info.

use axum::extract::State;
use axum::Json;
use maraton_core::defaults::{CATEGORY_HERO, DEFAULT_EVENT_DATE, HERO_FILE_PREFIX};
use maraton_db::models::hero::HeroSettings;
use maraton_db::repositories::HeroSettingsRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, UploadForm};
use crate::response::{Empty, Envelope, UploadedUrl};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SettingsBody {
    pub settings: HeroSettings,
}

#[derive(Debug, Serialize)]
pub struct EventInfo {
    #[serde(rename = "eventDate")]
    pub event_date: String,
}

/// Body of `PUT /api/hero-settings/event-date`.
#[derive(Debug, Deserialize)]
pub struct UpdateEventDate {
    #[serde(rename = "eventDate")]
    pub event_date: String,
}

/// GET /api/hero-settings
///
/// Creates the default row on first access.
pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<Envelope<SettingsBody>>> {
    let settings = HeroSettingsRepo::get_or_create_default(&state.pool).await?;
    Ok(Envelope::success(SettingsBody { settings }))
}

/// PUT /api/hero-settings/video
///
/// Form field `file` (required) replaces the background video.
pub async fn update_video(
    State(state): State<AppState>,
    mut form: UploadForm,
) -> AppResult<Json<Envelope<UploadedUrl>>> {
    let file = form
        .take_file("file")
        .ok_or_else(|| AppError::BadRequest("No video sent".into()))?;

    let stored = state
        .file_store
        .store_prefixed(Some(HERO_FILE_PREFIX), CATEGORY_HERO, &file.file_name, &file.bytes)
        .await?;

    let settings = HeroSettingsRepo::update_video(&state.pool, &stored.url).await?;

    tracing::info!(video = %settings.hero_video, "Hero video updated");

    Ok(Envelope::success(UploadedUrl {
        url: settings.hero_video,
    }))
}

/// PUT /api/hero-settings/event-date
///
/// The date string is stored as sent; no format check is made.
pub async fn update_event_date(
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateEventDate>,
) -> AppResult<Json<Envelope<Empty>>> {
    let settings = HeroSettingsRepo::update_event_date(&state.pool, &input.event_date).await?;

    tracing::info!(event_date = %settings.event_date, "Hero event date updated");

    Ok(Envelope::success(Empty {}))
}

/// GET /api/event-info
///
/// Read-only; falls back to the default date without creating a row.
pub async fn event_info(State(state): State<AppState>) -> AppResult<Json<Envelope<EventInfo>>> {
    let event_date = HeroSettingsRepo::find(&state.pool)
        .await?
        .map(|s| s.event_date)
        .unwrap_or_else(|| DEFAULT_EVENT_DATE.to_string());

    Ok(Envelope::success(EventInfo { event_date }))
}
