//! Shared response bodies for API handlers.

use serde::Serialize;

/// Standard `{ "data": T }` envelope used by list endpoints.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "success": true }` acknowledgement returned by the log sinks.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
