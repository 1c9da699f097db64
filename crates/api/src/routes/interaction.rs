//! Route definitions for the rating interaction log.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::interaction;
use crate::state::AppState;

/// ```text
/// POST   /interaction       -> log_interaction
/// GET    /interactions      -> list_interactions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/interaction", post(interaction::log_interaction))
        .route("/interactions", get(interaction::list_interactions))
}
