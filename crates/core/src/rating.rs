//! Star ratings and the routing rule that turns a rating into an action.
//!
//! A rating of 4 or 5 sends the customer to the business's external review
//! page after a short delay; 1 to 3 reveals the internal feedback form. Every
//! rating event is logged with the resulting [`InteractionAction`] regardless
//! of outcome.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of stars in the rating widget.
pub const STAR_COUNT: usize = 5;

/// Lowest selectable rating.
pub const MIN_RATING: u8 = 1;
/// Highest selectable rating.
pub const MAX_RATING: u8 = 5;

/// Ratings at or above this value redirect to the external review page.
pub const REDIRECT_THRESHOLD: u8 = 4;

/// Delay between showing the transitional message and navigating away.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Message shown while a redirect is pending.
pub const REDIRECT_MESSAGE: &str = "Thank you! Redirecting you to Google reviews...";

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// A committed star rating, always within `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    /// Build a rating, rejecting anything outside 1..=5.
    pub fn new(value: i64) -> Result<Self, CoreError> {
        if (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CoreError::Validation(format!(
                "Rating must be between {MIN_RATING} and {MAX_RATING} (got {value})"
            )))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether this rating leads to the feedback form rather than a redirect.
    pub fn collects_feedback(self) -> bool {
        self.0 < REDIRECT_THRESHOLD
    }
}

impl TryFrom<i64> for Rating {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Interaction action
// ---------------------------------------------------------------------------

/// What happened as a result of a rating event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionAction {
    RedirectedToGmb,
    ShownFeedbackForm,
}

impl InteractionAction {
    pub fn as_str(self) -> &'static str {
        match self {
            InteractionAction::RedirectedToGmb => "redirected_to_gmb",
            InteractionAction::ShownFeedbackForm => "shown_feedback_form",
        }
    }
}

impl fmt::Display for InteractionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "redirected_to_gmb" => Ok(InteractionAction::RedirectedToGmb),
            "shown_feedback_form" => Ok(InteractionAction::ShownFeedbackForm),
            other => Err(CoreError::Validation(format!(
                "Unknown interaction action '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

/// The visible consequence of a rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show `message` now, navigate to the business's review URL after `delay`.
    Redirect {
        delay: Duration,
        message: &'static str,
    },
    /// Reveal the feedback form. No navigation happens.
    ShowFeedbackForm,
}

/// Result of routing a rating: the logged action plus the effect to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routing {
    pub action: InteractionAction,
    pub effect: Effect,
}

/// Decide what a rating leads to.
pub fn route(rating: Rating) -> Routing {
    if rating.collects_feedback() {
        Routing {
            action: InteractionAction::ShownFeedbackForm,
            effect: Effect::ShowFeedbackForm,
        }
    } else {
        Routing {
            action: InteractionAction::RedirectedToGmb,
            effect: Effect::Redirect {
                delay: REDIRECT_DELAY,
                message: REDIRECT_MESSAGE,
            },
        }
    }
}

/// Check that a reported action is the one [`route`] produces for `rating`.
pub fn check_interaction(rating: Rating, action: InteractionAction) -> Result<(), CoreError> {
    let expected = route(rating).action;
    if expected == action {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Action '{action}' does not match rating {rating} (expected '{expected}')"
        )))
    }
}

// ---------------------------------------------------------------------------
// Star fill
// ---------------------------------------------------------------------------

/// Fill state for each star given a rating (committed or hover preview).
///
/// Star N (1-based) is filled iff N <= `rating`. A rating of 0 means nothing
/// is selected yet.
pub fn fill_stars(rating: u8) -> [bool; STAR_COUNT] {
    std::array::from_fn(|i| (i + 1) <= usize::from(rating))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
