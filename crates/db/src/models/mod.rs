pub mod business;
pub mod feedback;
pub mod interaction;

use reviewgate_core::types::BusinessId;
use serde::Deserialize;

/// Query parameters for listing log records (`?business=`).
#[derive(Debug, Default, Deserialize)]
pub struct LogListParams {
    pub business: Option<BusinessId>,
}
