use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Gallery routes mounted at `/gallery`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// POST   /bulk   -> create_bulk
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list).post(gallery::create))
        .route("/bulk", post(gallery::create_bulk))
        .route("/{id}", delete(gallery::delete))
}
