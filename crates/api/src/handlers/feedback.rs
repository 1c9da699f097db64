//! Handlers for feedback submissions.
//!
//! The rating page validates before posting, but the same rules run again
//! here so that only validated submissions are ever persisted.

use axum::extract::{Query, State};
use axum::Json;
use reviewgate_core::feedback::{self, FeedbackDraft};
use reviewgate_db::models::feedback::FeedbackSubmission;
use reviewgate_db::models::LogListParams;

use crate::error::{AppError, AppResult};
use crate::handlers::business_filter;
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

/// Body text when there is nothing to list.
pub const NO_SUBMISSIONS: &str = "There are no Review submission right now";

// ---------------------------------------------------------------------------
// POST /api/feedback
// ---------------------------------------------------------------------------

/// Validate and persist a feedback submission.
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(draft): Json<FeedbackDraft>,
) -> AppResult<Json<SuccessResponse>> {
    let valid = feedback::accept(&draft, &state.config.feedback_categories).map_err(|e| {
        tracing::debug!(business_id = %draft.business_id, error = %e, "Feedback rejected");
        e
    })?;

    let row = state.store.record_feedback(&valid).await?;

    tracing::info!(
        submission_id = row.id,
        business_id = %row.business_id,
        rating = row.rating,
        category = %row.category,
        "Feedback submitted",
    );

    Ok(Json(SuccessResponse::ok()))
}

// ---------------------------------------------------------------------------
// GET /api/submissions
// ---------------------------------------------------------------------------

/// List feedback submissions, oldest first, optionally for one business.
///
/// Responds 404 when there is nothing to show.
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(params): Query<LogListParams>,
) -> AppResult<Json<DataResponse<Vec<FeedbackSubmission>>>> {
    let business = business_filter(params.business.as_deref())?;
    let submissions = state.store.list_feedback(business).await?;

    if submissions.is_empty() {
        return Err(AppError::NotFound(NO_SUBMISSIONS.into()));
    }

    Ok(Json(DataResponse { data: submissions }))
}
