//! Route definitions for feedback submissions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// ```text
/// POST   /feedback          -> submit_feedback
/// GET    /submissions       -> list_submissions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/feedback", post(feedback::submit_feedback))
        .route("/submissions", get(feedback::list_submissions))
}
