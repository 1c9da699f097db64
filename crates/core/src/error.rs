use crate::feedback::Rejection;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A feedback submission failed one of the validator rules.
    #[error(transparent)]
    Rejected(#[from] Rejection),
}
