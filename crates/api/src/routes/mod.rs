pub mod business;
pub mod feedback;
pub mod health;
pub mod interaction;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /business/{id}        business lookup
/// /interaction          log a rating event (POST)
/// /interactions         list rating events (GET, ?business=)
/// /feedback             submit feedback (POST)
/// /submissions          list feedback submissions (GET, ?business=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(business::router())
        .merge(interaction::router())
        .merge(feedback::router())
}
