//! State and behaviour of one rating page.
//!
//! ```text
//! load ──► hover/leave ──► select ──┬─ rating >= 4: message, redirect after 2 s
//!                                   └─ rating <= 3: feedback form ──► submit
//! ```
//!
//! Every `select` logs an interaction through the [`Dispatcher`] before its
//! effect happens. Redirect timers are independent tasks: selecting again
//! does not cancel an earlier one.

use std::fmt;
use std::sync::Arc;

use reviewgate_core::feedback::{self, CategorySet, FeedbackDraft, FEEDBACK_THANKS_MESSAGE};
use reviewgate_core::rating::{self, Effect, Rating, Routing, STAR_COUNT};
use reviewgate_core::types::BusinessId;

use crate::api::{BusinessInfo, InteractionRecord, ReviewApi};
use crate::dispatch::Dispatcher;
use crate::error::SessionError;
use crate::navigator::Navigator;

/// Values currently typed into the feedback form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub feedback: String,
    pub category: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
}

impl FeedbackForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub struct ReviewSession {
    api: Arc<dyn ReviewApi>,
    navigator: Arc<dyn Navigator>,
    dispatcher: Dispatcher,
    categories: CategorySet,
    business_id: BusinessId,
    business: BusinessInfo,
    /// Committed rating; 0 until the first click.
    selected_rating: u8,
    form_visible: bool,
    status_message: Option<String>,
}

impl fmt::Debug for ReviewSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewSession")
            .field("business_id", &self.business_id)
            .field("business", &self.business)
            .field("selected_rating", &self.selected_rating)
            .field("form_visible", &self.form_visible)
            .field("status_message", &self.status_message)
            .finish_non_exhaustive()
    }
}

impl ReviewSession {
    /// Look up the business and start a session for it.
    ///
    /// Any failure (404 or transport) becomes [`SessionError::BusinessNotFound`]
    /// carrying the text to show instead of the business name.
    pub async fn load(
        api: Arc<dyn ReviewApi>,
        navigator: Arc<dyn Navigator>,
        business_id: impl Into<BusinessId>,
    ) -> Result<Self, SessionError> {
        let business_id = business_id.into();

        let business = api.fetch_business(&business_id).await.map_err(|e| {
            tracing::warn!(business_id = %business_id, error = %e, "Business lookup failed");
            SessionError::BusinessNotFound(e.to_string())
        })?;

        tracing::debug!(business_id = %business_id, name = %business.name, "Business loaded");

        Ok(Self {
            api,
            navigator,
            dispatcher: Dispatcher,
            categories: CategorySet::default(),
            business_id,
            business,
            selected_rating: 0,
            form_visible: false,
            status_message: None,
        })
    }

    /// Restrict the feedback form to a closed set of categories.
    pub fn with_categories(mut self, categories: CategorySet) -> Self {
        self.categories = categories;
        self
    }

    pub fn business(&self) -> &BusinessInfo {
        &self.business
    }

    pub fn selected_rating(&self) -> u8 {
        self.selected_rating
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    // -----------------------------------------------------------------------
    // Star fill
    // -----------------------------------------------------------------------

    /// Preview fill while the pointer is over star `n`. Does not commit.
    pub fn hover(&self, n: u8) -> [bool; STAR_COUNT] {
        rating::fill_stars(n)
    }

    /// Fill once the pointer leaves the widget: back to the committed rating.
    pub fn leave(&self) -> [bool; STAR_COUNT] {
        self.stars()
    }

    pub fn stars(&self) -> [bool; STAR_COUNT] {
        rating::fill_stars(self.selected_rating)
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Commit a star click and carry out its routing.
    pub fn select(&mut self, value: i64) -> Result<Routing, SessionError> {
        let rating = Rating::new(value)?;
        self.selected_rating = rating.value();

        let routing = rating::route(rating);

        let record = InteractionRecord {
            business_id: self.business_id.clone(),
            rating,
            action: routing.action,
        };
        let api = Arc::clone(&self.api);
        self.dispatcher
            .fire("interaction", async move { api.log_interaction(&record).await });

        match &routing.effect {
            Effect::Redirect { delay, message } => {
                self.status_message = Some(message.to_string());
                let delay = *delay;

                let url = self.business.gmb_url.clone();
                let navigator = Arc::clone(&self.navigator);
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    tracing::info!(%url, "Redirecting to external review page");
                    navigator.navigate(&url);
                });
            }
            Effect::ShowFeedbackForm => {
                self.form_visible = true;
            }
        }

        tracing::debug!(rating = %rating, action = %routing.action, "Rating selected");
        Ok(routing)
    }

    // -----------------------------------------------------------------------
    // Feedback
    // -----------------------------------------------------------------------

    /// Validate and send the feedback form.
    ///
    /// On rejection nothing is sent and `form` is left as typed so it can be
    /// corrected. On success the write is awaited (its outcome is not
    /// inspected), then the form is cleared and hidden and the thank-you
    /// message shown.
    pub async fn submit(&mut self, form: &mut FeedbackForm) -> Result<(), SessionError> {
        let draft = FeedbackDraft {
            business_id: self.business_id.clone(),
            rating: i64::from(self.selected_rating),
            feedback: form.feedback.clone(),
            category: form.category.clone(),
            customer_name: Some(form.customer_name.clone()),
            email: Some(form.email.clone()),
            phone: Some(form.phone.clone()),
        };

        let valid = feedback::accept(&draft, &self.categories)?;

        if let Err(e) = self.api.submit_feedback(&valid).await {
            tracing::debug!(error = %e, "Feedback write failed");
        }

        form.clear();
        self.form_visible = false;
        self.status_message = Some(FEEDBACK_THANKS_MESSAGE.to_string());
        Ok(())
    }
}
