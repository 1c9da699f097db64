pub mod business;
pub mod feedback;
pub mod interaction;

use crate::error::{AppError, AppResult};

/// Normalize an optional `?business=` filter, rejecting a blank value.
pub(crate) fn business_filter(param: Option<&str>) -> AppResult<Option<&str>> {
    match param.map(str::trim) {
        Some("") => Err(AppError::BadRequest(
            "business filter must not be empty".into(),
        )),
        other => Ok(other),
    }
}
