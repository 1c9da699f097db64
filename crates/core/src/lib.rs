//! Domain logic for the review gate: the rating router that decides between
//! an external review redirect and internal feedback collection, and the
//! feedback validator that guards persistence.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod feedback;
pub mod rating;
pub mod types;
