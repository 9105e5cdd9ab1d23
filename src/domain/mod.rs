//! Domain layer - entities, rules and repository traits

pub mod admission;
pub mod error;
pub mod user;

pub use admission::{AdmissionError, AdmissionRequest, AdmissionResult, UserSubmission};
pub use error::DomainError;
pub use user::{User, UserRepository, UserTier};
