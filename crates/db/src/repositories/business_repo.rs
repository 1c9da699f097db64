//! Repository for the `businesses` table.

use sqlx::PgPool;

use crate::models::business::Business;

const COLUMNS: &str = "id, name, description, image, gmb_url";

/// Read access to businesses. Businesses are provisioned out of band.
pub struct BusinessRepo;

impl BusinessRepo {
    /// Find a business by its external identifier.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Business>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM businesses WHERE id = $1");
        sqlx::query_as::<_, Business>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace a business.
    pub async fn upsert(pool: &PgPool, business: &Business) -> Result<Business, sqlx::Error> {
        let query = format!(
            "INSERT INTO businesses (id, name, description, image, gmb_url) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (id) DO UPDATE SET \
                name = EXCLUDED.name, \
                description = EXCLUDED.description, \
                image = EXCLUDED.image, \
                gmb_url = EXCLUDED.gmb_url \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Business>(&query)
            .bind(&business.id)
            .bind(&business.name)
            .bind(&business.description)
            .bind(&business.image)
            .bind(&business.gmb_url)
            .fetch_one(pool)
            .await
    }
}
