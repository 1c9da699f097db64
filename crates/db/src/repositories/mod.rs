//! Repository layer: one zero-sized struct per table, with async methods
//! taking a `&PgPool`.

mod business_repo;
mod feedback_repo;
mod interaction_repo;

pub use business_repo::BusinessRepo;
pub use feedback_repo::FeedbackRepo;
pub use interaction_repo::InteractionRepo;
