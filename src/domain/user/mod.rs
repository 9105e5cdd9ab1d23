//! User domain
//!
//! Entity, tier classification, valuation rules, normalized identity and the
//! store trait used by the admission workflow.

mod entity;
mod identity;
mod repository;
mod tier;
mod valuation;

pub use entity::User;
pub use identity::{is_duplicate, normalize_identity_field, UserIdentity};
pub use repository::UserRepository;
pub use tier::{TierError, UserTier};
pub use valuation::{revalue, ValuationError};

#[cfg(test)]
pub use repository::MockUserRepository;
