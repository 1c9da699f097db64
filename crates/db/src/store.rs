//! The storage seam used by the HTTP layer.

use async_trait::async_trait;
use reviewgate_core::feedback::ValidFeedback;

use crate::error::StoreError;
use crate::models::business::Business;
use crate::models::feedback::FeedbackSubmission;
use crate::models::interaction::{Interaction, NewInteraction};
use crate::repositories::{BusinessRepo, FeedbackRepo, InteractionRepo};
use crate::DbPool;

/// Business lookup plus the two append-only logs.
///
/// Implementations attach the write timestamp themselves.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    async fn find_business(&self, id: &str) -> Result<Option<Business>, StoreError>;

    async fn record_interaction(&self, input: &NewInteraction) -> Result<Interaction, StoreError>;

    async fn record_feedback(&self, input: &ValidFeedback)
        -> Result<FeedbackSubmission, StoreError>;

    async fn list_interactions(
        &self,
        business_id: Option<&str>,
    ) -> Result<Vec<Interaction>, StoreError>;

    async fn list_feedback(
        &self,
        business_id: Option<&str>,
    ) -> Result<Vec<FeedbackSubmission>, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}

/// [`ReviewStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn find_business(&self, id: &str) -> Result<Option<Business>, StoreError> {
        Ok(BusinessRepo::find_by_id(&self.pool, id).await?)
    }

    async fn record_interaction(&self, input: &NewInteraction) -> Result<Interaction, StoreError> {
        Ok(InteractionRepo::create(&self.pool, input).await?)
    }

    async fn record_feedback(
        &self,
        input: &ValidFeedback,
    ) -> Result<FeedbackSubmission, StoreError> {
        Ok(FeedbackRepo::create(&self.pool, input).await?)
    }

    async fn list_interactions(
        &self,
        business_id: Option<&str>,
    ) -> Result<Vec<Interaction>, StoreError> {
        Ok(InteractionRepo::list(&self.pool, business_id).await?)
    }

    async fn list_feedback(
        &self,
        business_id: Option<&str>,
    ) -> Result<Vec<FeedbackSubmission>, StoreError> {
        Ok(FeedbackRepo::list(&self.pool, business_id).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
