//! Handlers for the `/events` resource.
//!
//! Create and update take `multipart/form-data` so a poster image can ride
//! along with the text fields.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use maraton_core::defaults::{CATEGORY_EVENTS, DEFAULT_EVENT_CATEGORY};
use maraton_core::error::CoreError;
use maraton_core::types::DbId;
use maraton_db::models::event::{CreateEvent, Event, UpdateEvent};
use maraton_db::repositories::EventRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, UploadForm, UploadedFile};
use crate::response::{Envelope, Message};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EventList {
    pub events: Vec<Event>,
}

#[derive(Debug, Serialize)]
pub struct EventBody {
    pub event: Event,
}

/// GET /api/events
///
/// List all events, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Envelope<EventList>>> {
    let events = EventRepo::list(&state.pool).await?;
    Ok(Envelope::success(EventList { events }))
}

/// POST /api/events
///
/// Form fields: `title`, `date`, `description` (required), `category`,
/// `featured` (`"true"` to feature) and an optional `file` poster.
pub async fn create(
    State(state): State<AppState>,
    mut form: UploadForm,
) -> AppResult<(StatusCode, Json<Envelope<EventBody>>)> {
    let title = form.required_text("title")?;
    let date = form.required_text("date")?;
    let description = form.required_text("description")?;
    let category = form.text_or("category", DEFAULT_EVENT_CATEGORY);
    let featured = form.text("featured").is_some_and(is_checked);

    let image = match form.take_file("file") {
        Some(file) => Some(store_poster(&state, &file).await?),
        None => None,
    };

    let input = CreateEvent {
        title,
        date,
        description,
        image,
        category,
        featured,
    };
    let event = EventRepo::create(&state.pool, &input).await?;

    tracing::info!(event_id = event.id, title = %event.title, "Event created");

    Ok((StatusCode::CREATED, Envelope::success(EventBody { event })))
}

/// PUT /api/events/{id}
///
/// Only fields present in the form replace stored values; the image changes
/// only when a new `file` is sent.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    mut form: UploadForm,
) -> AppResult<Json<Envelope<EventBody>>> {
    if !EventRepo::exists(&state.pool, id).await? {
        return Err(event_not_found(id));
    }

    let image = match form.take_file("file") {
        Some(file) => Some(store_poster(&state, &file).await?),
        None => None,
    };

    let input = UpdateEvent {
        title: form.text("title").map(str::to_string),
        date: form.text("date").map(str::to_string),
        description: form.text("description").map(str::to_string),
        image,
        category: form.text("category").map(str::to_string),
        featured: form.text("featured").map(is_checked),
    };

    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| event_not_found(id))?;

    tracing::info!(event_id = id, "Event updated");

    Ok(Envelope::success(EventBody { event }))
}

/// DELETE /api/events/{id}
///
/// Refused with 409 while gallery items still belong to the event.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Envelope<Message>>> {
    let deleted = EventRepo::delete(&state.pool, id)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::Core(CoreError::Conflict(format!(
                    "Event {id} still has gallery items"
                )))
            }
            _ => AppError::Database(err),
        })?;
    if !deleted {
        return Err(event_not_found(id));
    }

    tracing::info!(event_id = id, "Event deleted");

    Ok(Envelope::success(Message {
        message: "Event deleted",
    }))
}

async fn store_poster(state: &AppState, file: &UploadedFile) -> AppResult<String> {
    let stored = state
        .file_store
        .store(CATEGORY_EVENTS, &file.file_name, &file.bytes)
        .await?;
    Ok(stored.url)
}

fn is_checked(value: &str) -> bool {
    value == "true"
}

fn event_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Event", id })
}
