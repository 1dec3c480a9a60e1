use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, UploadForm};
use crate::response::{Envelope, UploadedUrl};
use crate::state::AppState;

/// POST /api/upload/{category}
///
/// Store a single `file` under an arbitrary category and return its URL.
/// Nothing is recorded in the database.
pub async fn upload(
    State(state): State<AppState>,
    AppPath(category): AppPath<String>,
    mut form: UploadForm,
) -> AppResult<(StatusCode, Json<Envelope<UploadedUrl>>)> {
    let file = form
        .take_file("file")
        .ok_or_else(|| AppError::BadRequest("No file sent".into()))?;

    let stored = state
        .file_store
        .store(&category, &file.file_name, &file.bytes)
        .await?;

    tracing::info!(category = %category, file = %stored.file_name, "File uploaded");

    Ok((StatusCode::CREATED, Envelope::success(UploadedUrl { url: stored.url })))
}
