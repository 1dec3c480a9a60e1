//! Handlers for the `/gallery` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use maraton_core::defaults::{CATEGORY_GALLERY, DEFAULT_GALLERY_TYPE};
use maraton_core::error::CoreError;
use maraton_core::types::DbId;
use maraton_db::models::gallery::{CreateGalleryItem, GalleryItem};
use maraton_db::repositories::{EventRepo, GalleryRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, UploadForm};
use crate::response::{Envelope, Message};
use crate::state::AppState;

/// Field names accepted for the bulk upload file list.
const BULK_FILE_FIELDS: &[&str] = &["files[]", "files"];

#[derive(Debug, Serialize)]
pub struct GalleryList {
    pub items: Vec<GalleryItem>,
}

#[derive(Debug, Serialize)]
pub struct GalleryItemBody {
    pub item: GalleryItem,
}

/// A file the bulk upload could not accept.
#[derive(Debug, Serialize)]
pub struct FailedUpload {
    pub filename: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct BulkUploadReport {
    pub success_count: usize,
    pub failed_count: usize,
    pub failed: Vec<FailedUpload>,
}

/// Fields shared by single and bulk creation.
struct ItemTarget {
    event_id: DbId,
    year: i32,
    item_type: String,
}

impl ItemTarget {
    /// Parse `event_id`, `year` and `type`, and confirm the event exists.
    async fn from_form(state: &AppState, form: &UploadForm) -> AppResult<Self> {
        let event_id = form.required_id("event_id")?;
        let year = form.required_int("year")?;
        let item_type = form.text_or("type", DEFAULT_GALLERY_TYPE);

        if !EventRepo::exists(&state.pool, event_id).await? {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Event",
                id: event_id,
            }));
        }

        Ok(Self {
            event_id,
            year,
            item_type,
        })
    }

    fn item(&self, src: String, alt: String) -> CreateGalleryItem {
        CreateGalleryItem {
            src,
            alt,
            event_id: self.event_id,
            year: self.year,
            item_type: self.item_type.clone(),
        }
    }
}

/// GET /api/gallery
///
/// List all gallery items, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Envelope<GalleryList>>> {
    let items = GalleryRepo::list(&state.pool).await?;
    Ok(Envelope::success(GalleryList { items }))
}

/// POST /api/gallery
///
/// Form fields: `file` (required), `event_id`, `year`, optional `type`.
pub async fn create(
    State(state): State<AppState>,
    mut form: UploadForm,
) -> AppResult<(StatusCode, Json<Envelope<GalleryItemBody>>)> {
    let file = form
        .take_file("file")
        .ok_or_else(|| AppError::BadRequest("No file sent".into()))?;
    let target = ItemTarget::from_form(&state, &form).await?;

    let stored = state
        .file_store
        .store(CATEGORY_GALLERY, &file.file_name, &file.bytes)
        .await?;

    let item = GalleryRepo::create(&state.pool, &target.item(stored.url, stored.file_name)).await?;

    tracing::info!(item_id = item.id, event_id = item.event_id, "Gallery item created");

    Ok((StatusCode::CREATED, Envelope::success(GalleryItemBody { item })))
}

/// POST /api/gallery/bulk
///
/// Every file under `files[]` is validated and stored on its own; rejected
/// files are reported back instead of failing the request. The rows for the
/// accepted files are inserted in a single transaction.
pub async fn create_bulk(
    State(state): State<AppState>,
    mut form: UploadForm,
) -> AppResult<Json<Envelope<BulkUploadReport>>> {
    let files = form.take_files(BULK_FILE_FIELDS);
    if files.is_empty() {
        return Err(AppError::BadRequest("No files sent".into()));
    }
    let target = ItemTarget::from_form(&state, &form).await?;

    let mut inputs = Vec::with_capacity(files.len());
    let mut failed = Vec::new();

    for file in &files {
        match state
            .file_store
            .store(CATEGORY_GALLERY, &file.file_name, &file.bytes)
            .await
        {
            Ok(stored) => inputs.push(target.item(stored.url, stored.file_name)),
            Err(err) => {
                tracing::warn!(filename = %file.file_name, error = %err, "Bulk gallery file rejected");
                failed.push(FailedUpload {
                    filename: file.file_name.clone(),
                    error: err.to_string(),
                });
            }
        }
    }

    let created = if inputs.is_empty() {
        Vec::new()
    } else {
        GalleryRepo::create_many(&state.pool, &inputs).await?
    };

    tracing::info!(
        event_id = target.event_id,
        success_count = created.len(),
        failed_count = failed.len(),
        "Bulk gallery upload processed",
    );

    Ok(Envelope::success(BulkUploadReport {
        success_count: created.len(),
        failed_count: failed.len(),
        failed,
    }))
}

/// DELETE /api/gallery/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Envelope<Message>>> {
    if !GalleryRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }));
    }

    tracing::info!(item_id = id, "Gallery item deleted");

    Ok(Envelope::success(Message {
        message: "Item deleted",
    }))
}
