//! Admission failures and the result envelope returned to callers

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::user::{TierError, User, ValuationError};
use crate::domain::DomainError;

pub const USER_CREATED: &str = "User Created";
pub const USER_DUPLICATED: &str = "User is duplicated";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Ways an admission attempt can end without creating a user
#[derive(Debug, Error)]
pub enum AdmissionError {
    #[error(transparent)]
    InvalidTier(#[from] TierError),

    #[error(transparent)]
    InvalidMoney(#[from] ValuationError),

    #[error("Internal Server Error")]
    Infrastructure(#[source] DomainError),

    #[error("User is duplicated")]
    Duplicate,
}

impl AdmissionError {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::InvalidTier(_) => RejectionKind::InvalidTier,
            Self::InvalidMoney(_) => RejectionKind::InvalidMoney,
            Self::Infrastructure(_) => RejectionKind::Infrastructure,
            Self::Duplicate => RejectionKind::Duplicate,
        }
    }
}

/// Why an admission was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    InvalidTier,
    InvalidMoney,
    Duplicate,
    Infrastructure,
}

impl RejectionKind {
    /// Short label for logs and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidTier => "invalid_tier",
            Self::InvalidMoney => "invalid_money",
            Self::Duplicate => "duplicate",
            Self::Infrastructure => "infrastructure_error",
        }
    }
}

/// Projection of an admitted user handed back to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmittedUser {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub money: Decimal,
    pub user_type: String,
}

impl From<&User> for AdmittedUser {
    fn from(user: &User) -> Self {
        Self {
            name: user.name().to_string(),
            address: user.address().to_string(),
            email: user.email().to_string(),
            phone: user.phone().to_string(),
            money: user.money(),
            user_type: user.tier().as_str().to_string(),
        }
    }
}

/// Outcome of one admission attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissionResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AdmittedUser>,
    /// Set on every failed admission; not part of the wire format
    #[serde(skip)]
    pub rejection: Option<RejectionKind>,
}

impl AdmissionResult {
    pub fn created(user: &User) -> Self {
        Self {
            success: true,
            message: USER_CREATED.to_string(),
            data: Some(AdmittedUser::from(user)),
            rejection: None,
        }
    }

    pub fn rejected(kind: RejectionKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            rejection: Some(kind),
        }
    }
}

impl From<Result<User, AdmissionError>> for AdmissionResult {
    fn from(result: Result<User, AdmissionError>) -> Self {
        match result {
            Ok(user) => Self::created(&user),
            Err(e) => Self::rejected(e.kind(), e.to_string()),
        }
    }
}
