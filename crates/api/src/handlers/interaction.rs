//! Handlers for the rating interaction log.
//!
//! Every star click is posted here by the rating page, whichever way the
//! rating routes. The client never awaits or inspects the result.

use axum::extract::{Query, State};
use axum::Json;
use reviewgate_db::models::interaction::{CreateInteraction, Interaction, NewInteraction};
use reviewgate_db::models::LogListParams;

use crate::error::AppResult;
use crate::handlers::business_filter;
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /api/interaction
// ---------------------------------------------------------------------------

/// Append a rating event to the interaction log.
///
/// Rejects ratings outside 1..=5 and actions that contradict the routing
/// rule. The business id is not checked against the catalogue.
pub async fn log_interaction(
    State(state): State<AppState>,
    Json(input): Json<CreateInteraction>,
) -> AppResult<Json<SuccessResponse>> {
    let interaction = NewInteraction::try_from(input)?;
    let row = state.store.record_interaction(&interaction).await?;

    tracing::info!(
        interaction_id = row.id,
        business_id = %row.business_id,
        rating = row.rating,
        action = %row.action,
        "Interaction logged",
    );

    Ok(Json(SuccessResponse::ok()))
}

// ---------------------------------------------------------------------------
// GET /api/interactions
// ---------------------------------------------------------------------------

/// List logged interactions, oldest first, optionally for one business.
pub async fn list_interactions(
    State(state): State<AppState>,
    Query(params): Query<LogListParams>,
) -> AppResult<Json<DataResponse<Vec<Interaction>>>> {
    let business = business_filter(params.business.as_deref())?;
    let interactions = state.store.list_interactions(business).await?;
    Ok(Json(DataResponse { data: interactions }))
}
