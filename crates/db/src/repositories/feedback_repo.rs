//! Repository for the append-only `feedback_submissions` table.

use reviewgate_core::feedback::ValidFeedback;
use sqlx::PgPool;

use crate::models::feedback::FeedbackSubmission;

const COLUMNS: &str = "\
    id, business_id, rating, feedback, category, \
    customer_name, email, phone, created_at";

pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Append a validated submission, returning the stored row.
    pub async fn create(
        pool: &PgPool,
        input: &ValidFeedback,
    ) -> Result<FeedbackSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback_submissions \
                (business_id, rating, feedback, category, customer_name, email, phone) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FeedbackSubmission>(&query)
            .bind(&input.business_id)
            .bind(i16::from(input.rating.value()))
            .bind(&input.feedback)
            .bind(&input.category)
            .bind(&input.customer_name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// List submissions oldest-first, optionally for a single business.
    pub async fn list(
        pool: &PgPool,
        business_id: Option<&str>,
    ) -> Result<Vec<FeedbackSubmission>, sqlx::Error> {
        match business_id {
            Some(id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM feedback_submissions WHERE business_id = $1 ORDER BY id"
                );
                sqlx::query_as::<_, FeedbackSubmission>(&query)
                    .bind(id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM feedback_submissions ORDER BY id");
                sqlx::query_as::<_, FeedbackSubmission>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }
}
