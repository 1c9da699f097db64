//! Route definitions for business lookup.

use axum::routing::get;
use axum::Router;

use crate::handlers::business;
use crate::state::AppState;

/// ```text
/// GET    /business/{id}     -> get_business
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/business/{id}", get(business::get_business))
}
