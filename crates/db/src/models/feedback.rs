//! Feedback submission model.

use reviewgate_core::types::{BusinessId, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `feedback_submissions`, or one entry of `submissions.json`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    #[serde(default)]
    pub id: DbId,
    pub business_id: BusinessId,
    pub rating: i16,
    pub feedback: String,
    pub category: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[sqlx(rename = "created_at")]
    pub timestamp: Timestamp,
}
