//! Rating interaction log model and DTOs.

use reviewgate_core::error::CoreError;
use reviewgate_core::rating::{self, InteractionAction, Rating};
use reviewgate_core::types::{BusinessId, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One logged rating event. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(default)]
    pub id: DbId,
    pub business_id: BusinessId,
    pub rating: i16,
    pub action: String,
    #[sqlx(rename = "created_at")]
    pub timestamp: Timestamp,
}

/// Request body for `POST /api/interaction`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInteraction {
    pub business_id: BusinessId,
    pub rating: i64,
    pub action: String,
}

/// A checked interaction ready to be appended to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInteraction {
    pub business_id: BusinessId,
    pub rating: Rating,
    pub action: InteractionAction,
}

impl TryFrom<CreateInteraction> for NewInteraction {
    type Error = CoreError;

    /// Reject out-of-range ratings and actions the router would not produce.
    fn try_from(input: CreateInteraction) -> Result<Self, Self::Error> {
        let rating = Rating::new(input.rating)?;
        let action: InteractionAction = input.action.parse()?;
        rating::check_interaction(rating, action)?;
        Ok(Self {
            business_id: input.business_id,
            rating,
            action,
        })
    }
}
