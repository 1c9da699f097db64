//! Repository for the append-only `interactions` table.

use sqlx::PgPool;

use crate::models::interaction::{Interaction, NewInteraction};

const COLUMNS: &str = "id, business_id, rating, action, created_at";

pub struct InteractionRepo;

impl InteractionRepo {
    /// Append an interaction, returning the stored row with its timestamp.
    pub async fn create(pool: &PgPool, input: &NewInteraction) -> Result<Interaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO interactions (business_id, rating, action) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interaction>(&query)
            .bind(&input.business_id)
            .bind(i16::from(input.rating.value()))
            .bind(input.action.as_str())
            .fetch_one(pool)
            .await
    }

    /// List interactions oldest-first, optionally for a single business.
    pub async fn list(
        pool: &PgPool,
        business_id: Option<&str>,
    ) -> Result<Vec<Interaction>, sqlx::Error> {
        match business_id {
            Some(id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM interactions WHERE business_id = $1 ORDER BY id"
                );
                sqlx::query_as::<_, Interaction>(&query)
                    .bind(id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM interactions ORDER BY id");
                sqlx::query_as::<_, Interaction>(&query).fetch_all(pool).await
            }
        }
    }
}
