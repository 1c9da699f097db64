//! HTTP access to the three endpoints the rating page talks to.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use reviewgate_core::feedback::ValidFeedback;
use reviewgate_core::rating::{InteractionAction, Rating};
use reviewgate_core::types::BusinessId;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// HTTP request timeout for a single call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Query parameter on the hosting page that names the business.
pub const BUSINESS_QUERY_PARAM: &str = "business";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Display data for the rated business.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub gmb_url: String,
}

/// Body of `POST /api/interaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionRecord {
    pub business_id: BusinessId,
    pub rating: Rating,
    pub action: InteractionAction,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

// ---------------------------------------------------------------------------
// ReviewApi
// ---------------------------------------------------------------------------

/// The collaborators a rating session consumes.
#[async_trait]
pub trait ReviewApi: Send + Sync + 'static {
    async fn fetch_business(&self, business_id: &str) -> Result<BusinessInfo, ClientError>;

    async fn log_interaction(&self, record: &InteractionRecord) -> Result<(), ClientError>;

    async fn submit_feedback(&self, submission: &ValidFeedback) -> Result<(), ClientError>;
}

/// [`ReviewApi`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpReviewApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpReviewApi {
    /// Create a client for the API rooted at `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Build `<base>/api/<segments...>`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: Url,
        body: &T,
    ) -> Result<(), ClientError> {
        let response = self.client.post(url).json(body).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

#[async_trait]
impl ReviewApi for HttpReviewApi {
    async fn fetch_business(&self, business_id: &str) -> Result<BusinessInfo, ClientError> {
        let url = self.endpoint(&["business", business_id]);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|b| b.error);

        Err(match (status, message) {
            (StatusCode::NOT_FOUND, message) => {
                ClientError::NotFound(message.unwrap_or_else(|| "Unknown error".to_string()))
            }
            (status, Some(message)) => ClientError::Api {
                status: status.as_u16(),
                message,
            },
            (status, None) => ClientError::HttpStatus(status.as_u16()),
        })
    }

    async fn log_interaction(&self, record: &InteractionRecord) -> Result<(), ClientError> {
        self.post_json(self.endpoint(&["interaction"]), record).await
    }

    async fn submit_feedback(&self, submission: &ValidFeedback) -> Result<(), ClientError> {
        self.post_json(self.endpoint(&["feedback"]), submission).await
    }
}

/// Extract the business id from the hosting page URL (`?business=xyz`).
pub fn business_id_from_page_url(page_url: &str) -> Option<BusinessId> {
    let url = Url::parse(page_url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == BUSINESS_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
