use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::sponsors;
use crate::state::AppState;

/// Sponsor routes mounted at `/sponsors`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sponsors::list).post(sponsors::create))
        .route("/{id}", delete(sponsors::delete))
}
