//! Shared response envelope for API handlers.
//!
//! Every API response carries a top-level `status` of `"success"` or
//! `"error"`; payload fields sit next to it, e.g.
//! `{"status": "success", "events": [...]}`. Errors are produced by
//! [`crate::error::AppError`].

use axum::Json;
use serde::Serialize;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// `{ "status": "success", ...body }` response envelope.
///
/// `body` must serialize as a map (a struct with named fields).
///
/// ```ignore
/// Ok(Envelope::success(EventList { events }))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: &'static str,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(body: T) -> Json<Self> {
        Json(Self {
            status: STATUS_SUCCESS,
            body,
        })
    }
}

/// Body with no extra fields.
#[derive(Debug, Serialize)]
pub struct Empty {}

/// Body carrying a human-readable confirmation.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// Body carrying the public URL of a stored upload.
#[derive(Debug, Serialize)]
pub struct UploadedUrl {
    pub url: String,
}
