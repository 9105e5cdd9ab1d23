//! User admission workflow

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::admission::{AdmissionError, AdmissionRequest, AdmissionResult};
use crate::domain::user::{is_duplicate, User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::observability::record_admission;

/// Admits new users: classify, snapshot, duplicate check, valuation, persist.
///
/// Each call runs the whole pipeline once. No step is retried.
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Run one admission attempt and report its outcome.
    ///
    /// Never fails: every rejection is folded into the returned result.
    pub async fn admit(&self, request: AdmissionRequest) -> AdmissionResult {
        let email = request.email().to_string();
        let result = self.try_admit(request).await;

        match &result {
            Ok(user) => {
                info!(email = %email, tier = %user.tier(), money = %user.money(), "User admitted");
                record_admission("created");
            }
            Err(AdmissionError::Infrastructure(e)) => {
                error!(email = %email, error = %e, "User admission failed");
                record_admission("infrastructure_error");
            }
            Err(e) => {
                warn!(email = %email, reason = e.kind().as_str(), "User admission rejected: {}", e);
                record_admission(e.kind().as_str());
            }
        }

        AdmissionResult::from(result)
    }

    async fn try_admit(&self, request: AdmissionRequest) -> Result<User, AdmissionError> {
        let mut candidate = request.into_candidate()?;
        debug!(tier = %candidate.tier(), "Classified admission candidate");

        if self
            .exists_user(&candidate)
            .await
            .map_err(AdmissionError::Infrastructure)?
        {
            return Err(AdmissionError::Duplicate);
        }

        candidate.revalue()?;

        self.repository
            .add(candidate.clone())
            .await
            .map_err(|e| {
                if e.is_conflict() {
                    AdmissionError::Duplicate
                } else {
                    AdmissionError::Infrastructure(e)
                }
            })?;

        Ok(candidate)
    }

    /// Whether a user with the same normalized name, email and address is stored
    pub async fn exists_user(&self, user: &User) -> Result<bool, DomainError> {
        let snapshot = self.repository.list().await?;
        debug!(stored = snapshot.len(), "Loaded user snapshot");

        Ok(is_duplicate(user, &snapshot))
    }

    /// Whether the user store answers
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.repository.ping().await
    }
}
