//! Fallback for requests no route or static file matched.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::response::STATUS_ERROR;
use crate::state::AppState;

/// Unknown `/api/*` paths get a JSON 404; anything else gets the front-end's
/// `index.html` so client-side routing can take over.
pub async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    if uri.path().starts_with("/api/") || uri.path() == "/api" {
        let body = json!({
            "status": STATUS_ERROR,
            "message": "API route not found",
            "code": "NOT_FOUND",
        });
        return (StatusCode::NOT_FOUND, Json(body)).into_response();
    }

    let index = state.config.static_dir.join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Html(html).into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "Frontend not found").into_response(),
    }
}
