use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Generic upload route mounted at `/upload`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{category}", post(uploads::upload))
}
