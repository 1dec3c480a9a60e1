//! Handlers for the `/sponsors` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use maraton_core::defaults::CATEGORY_SPONSORS;
use maraton_core::error::CoreError;
use maraton_core::types::DbId;
use maraton_db::models::sponsor::{CreateSponsor, Sponsor};
use maraton_db::repositories::SponsorRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, UploadForm};
use crate::response::{Envelope, Message};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SponsorList {
    pub sponsors: Vec<Sponsor>,
}

#[derive(Debug, Serialize)]
pub struct SponsorBody {
    pub sponsor: Sponsor,
}

/// GET /api/sponsors
///
/// Sorted by the tier label as a plain string.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Envelope<SponsorList>>> {
    let sponsors = SponsorRepo::list(&state.pool).await?;
    Ok(Envelope::success(SponsorList { sponsors }))
}

/// POST /api/sponsors
///
/// Form fields: `file` (logo, required), `name`, `tier`.
pub async fn create(
    State(state): State<AppState>,
    mut form: UploadForm,
) -> AppResult<(StatusCode, Json<Envelope<SponsorBody>>)> {
    let file = form
        .take_file("file")
        .ok_or_else(|| AppError::BadRequest("No logo sent".into()))?;
    let name = form.required_text("name")?;
    let tier = form.required_text("tier")?;

    let stored = state
        .file_store
        .store(CATEGORY_SPONSORS, &file.file_name, &file.bytes)
        .await?;

    let input = CreateSponsor {
        name,
        logo: stored.url,
        tier,
    };
    let sponsor = SponsorRepo::create(&state.pool, &input).await?;

    tracing::info!(sponsor_id = sponsor.id, tier = %sponsor.tier, "Sponsor created");

    Ok((StatusCode::CREATED, Envelope::success(SponsorBody { sponsor })))
}

/// DELETE /api/sponsors/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Envelope<Message>>> {
    if !SponsorRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Sponsor",
            id,
        }));
    }

    tracing::info!(sponsor_id = id, "Sponsor deleted");

    Ok(Envelope::success(Message {
        message: "Sponsor deleted",
    }))
}
