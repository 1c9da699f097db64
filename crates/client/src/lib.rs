//! `reviewgate-client` library crate.
//!
//! The customer-facing half of the review gate: a [`ReviewSession`] holds the
//! state of one rating page, routes star clicks through the rating router,
//! logs every click best-effort, schedules the redirect for high ratings and
//! validates feedback before posting it.
//!
//! [`ReviewSession`]: session::ReviewSession

pub mod api;
pub mod dispatch;
pub mod error;
pub mod navigator;
pub mod session;
