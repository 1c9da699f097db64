use reviewgate_core::error::CoreError;

/// Failure talking to the review gate API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The API answered 404; carries the server's `error` text.
    #[error("{0}")]
    NotFound(String),

    /// The underlying HTTP request failed (network, DNS, timeout, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status other than 404 with an `error` text.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The API returned a non-2xx status with no readable `error` text.
    #[error("API returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Failure surfaced to the person using the rating page.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Lookup failed; the page shows this text in place of the business name
    /// and drops the rating widget.
    #[error("{0}")]
    BusinessNotFound(String),

    /// A rating or feedback submission was refused by the domain rules.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl SessionError {
    /// Text for the blocking alert shown when a submission is refused.
    pub fn alert_message(&self) -> String {
        match self {
            SessionError::Core(CoreError::Rejected(rejection)) => {
                rejection.alert_message().to_string()
            }
            other => other.to_string(),
        }
    }
}
