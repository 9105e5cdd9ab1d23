//! User store trait

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::entity::User;
use crate::domain::DomainError;

/// Narrow store used by admission: read everything, append one.
///
/// Nothing here makes `list` followed by `add` atomic. Two admissions for the
/// same identity may both see a snapshot without the other and both be
/// written, unless the implementation rejects the second `add` with
/// [`DomainError::Conflict`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Snapshot of every stored user
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Append a user
    async fn add(&self, user: User) -> Result<(), DomainError>;

    /// Cheap reachability check that does not read the users
    async fn ping(&self) -> Result<(), DomainError>;
}
