//! Feedback validation for low ratings.
//!
//! A [`FeedbackDraft`] is what the customer typed into the form. It becomes
//! a [`ValidFeedback`] only after passing [`validate`], whose rules run in a
//! fixed order and stop at the first failure:
//!
//! 1. trimmed feedback text has at least [`MIN_FEEDBACK_CHARS`] characters
//! 2. a category from the configured [`CategorySet`] is selected
//! 3. a present phone number is 7-15 ASCII digits
//! 4. a present email looks like `local@domain.tld`

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::rating::Rating;
use crate::types::BusinessId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum feedback length in characters, measured after trimming.
pub const MIN_FEEDBACK_CHARS: usize = 20;

/// Message shown once a submission has been accepted.
pub const FEEDBACK_THANKS_MESSAGE: &str =
    "Thank you for your feedback! We’ll use this to improve.";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{7,15}$").expect("valid regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Rejection
// ---------------------------------------------------------------------------

/// The first validator rule a draft failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("feedback too short or missing")]
    FeedbackTooShort,

    #[error("category required")]
    CategoryRequired,

    #[error("invalid phone")]
    InvalidPhone,

    #[error("invalid email")]
    InvalidEmail,
}

impl Rejection {
    /// Text shown to the submitter in the blocking alert.
    pub fn alert_message(self) -> &'static str {
        match self {
            Rejection::FeedbackTooShort | Rejection::CategoryRequired => {
                "Please fill in required fields with at least 20 characters of feedback."
            }
            Rejection::InvalidPhone => "Phone number must contain only digits (7–15 characters).",
            Rejection::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// The closed set of feedback categories offered by the form.
///
/// An empty set accepts any non-empty category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    categories: Vec<String>,
}

impl CategorySet {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories
                .into_iter()
                .map(|c| Into::<String>::into(c).trim().to_string())
                .filter(|c| !c.is_empty())
                .collect(),
        }
    }

    /// Parse a comma-separated list such as `"Service,Food,Cleanliness"`.
    pub fn from_csv(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn is_open(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn allows(&self, category: &str) -> bool {
        !category.is_empty() && (self.is_open() || self.categories.iter().any(|c| c == category))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.categories
    }
}

// ---------------------------------------------------------------------------
// Draft / valid feedback
// ---------------------------------------------------------------------------

/// Raw feedback form contents, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDraft {
    pub business_id: BusinessId,
    /// The rating that revealed the form. Kept raw so an out-of-range value
    /// is reported as a validation error rather than a decode failure.
    pub rating: i64,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A submission that passed validation, with every string field trimmed and
/// blank optional fields dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidFeedback {
    pub business_id: BusinessId,
    pub rating: Rating,
    pub feedback: String,
    pub category: String,
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Trim an optional field, treating blank as absent.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Apply the four validator rules in order; the first failure wins.
pub fn validate(draft: &FeedbackDraft, categories: &CategorySet) -> Result<(), Rejection> {
    if draft.feedback.trim().chars().count() < MIN_FEEDBACK_CHARS {
        return Err(Rejection::FeedbackTooShort);
    }

    if !categories.allows(draft.category.trim()) {
        return Err(Rejection::CategoryRequired);
    }

    if let Some(phone) = present(&draft.phone) {
        if !PHONE_RE.is_match(phone) {
            return Err(Rejection::InvalidPhone);
        }
    }

    if let Some(email) = present(&draft.email) {
        if !EMAIL_RE.is_match(email) {
            return Err(Rejection::InvalidEmail);
        }
    }

    Ok(())
}

/// Turn a draft into a persistable submission.
///
/// The triggering rating must be a low rating (1-3); anything else is a
/// precondition violation since high ratings never reveal the form.
pub fn accept(draft: &FeedbackDraft, categories: &CategorySet) -> Result<ValidFeedback, CoreError> {
    let rating = Rating::new(draft.rating)?;
    if !rating.collects_feedback() {
        return Err(CoreError::Validation(format!(
            "Feedback is only collected for ratings of 3 or lower (got {rating})"
        )));
    }

    validate(draft, categories)?;

    Ok(ValidFeedback {
        business_id: draft.business_id.trim().to_string(),
        rating,
        feedback: draft.feedback.trim().to_string(),
        category: draft.category.trim().to_string(),
        customer_name: present(&draft.customer_name).map(str::to_string),
        email: present(&draft.email).map(str::to_string),
        phone: present(&draft.phone).map(str::to_string),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
