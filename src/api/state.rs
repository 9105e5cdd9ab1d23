//! Application state for shared services

use std::sync::Arc;

use crate::domain::admission::{AdmissionRequest, AdmissionResult};
use crate::domain::user::UserRepository;
use crate::domain::DomainError;
use crate::infrastructure::user::UserService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserServiceTrait>) -> Self {
        Self { user_service }
    }
}

/// Trait for user admission operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn admit(&self, request: AdmissionRequest) -> AdmissionResult;
    async fn ping(&self) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static> UserServiceTrait for UserService<R> {
    async fn admit(&self, request: AdmissionRequest) -> AdmissionResult {
        UserService::admit(self, request).await
    }

    async fn ping(&self) -> Result<(), DomainError> {
        UserService::ping(self).await
    }
}
