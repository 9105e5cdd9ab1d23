//! In-memory user repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository.
///
/// Append-only and without any uniqueness check of its own.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn add(&self, user: User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        users.push(user);
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserTier;
    use rust_decimal_macros::dec;

    fn create_test_user(name: &str, email: &str) -> User {
        User::new(name, "Pizzurno 763", email, "1164874553", dec!(100), UserTier::Normal)
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.is_empty().await);

        repo.add(create_test_user("Valeria", "vale3@gmail.com"))
            .await
            .unwrap();
        repo.add(create_test_user("Juan", "juan@gmail.com"))
            .await
            .unwrap();

        let users = repo.list().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name(), "Valeria");
        assert_eq!(users[1].name(), "Juan");
    }

    #[tokio::test]
    async fn test_ping() {
        assert!(InMemoryUserRepository::new().ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_with_users() {
        let repo = InMemoryUserRepository::with_users(vec![create_test_user(
            "Valeria",
            "vale3@gmail.com",
        )]);

        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_add_does_not_enforce_uniqueness() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("Valeria", "vale3@gmail.com");

        repo.add(user.clone()).await.unwrap();
        repo.add(user).await.unwrap();

        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_list_is_a_snapshot() {
        let repo = InMemoryUserRepository::new();
        let snapshot = repo.list().await.unwrap();

        repo.add(create_test_user("Valeria", "vale3@gmail.com"))
            .await
            .unwrap();

        assert!(snapshot.is_empty());
        assert_eq!(repo.len().await, 1);
    }
}
