//! Handler for business lookup.

use axum::extract::{Path, State};
use axum::Json;
use reviewgate_db::models::business::Business;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body text for an unknown business id. The rating page shows it verbatim.
pub const BUSINESS_NOT_FOUND: &str = "Business not found or Invalid business ID!";

// ---------------------------------------------------------------------------
// GET /api/business/{id}
// ---------------------------------------------------------------------------

/// Return the display data and review URL for a business.
pub async fn get_business(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Business>> {
    let business = state
        .store
        .find_business(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(BUSINESS_NOT_FOUND.into()))?;

    Ok(Json(business))
}
