//! Domain Value Objects - Immutable results of a computation
//!
//! Value objects carry no identity and never change after creation.

pub mod grade_outcome;
pub mod pass_status;

pub use grade_outcome::GradeOutcome;
pub use pass_status::PassStatus;
