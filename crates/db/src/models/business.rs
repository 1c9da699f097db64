//! Business entity model.

use reviewgate_core::types::BusinessId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `businesses` table, or one entry of `businesses.json`.
///
/// In the JSON file the id is the object key, so it is optional there.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Business {
    #[serde(default)]
    pub id: BusinessId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// External review page that high ratings redirect to.
    pub gmb_url: String,
}
