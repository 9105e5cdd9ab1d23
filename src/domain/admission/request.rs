//! Inbound admission payload and its shape validation

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::user::{TierError, User, UserTier};

/// Fields checked in this order; the first failing one is reported
const FIELD_ORDER: [&str; 4] = ["name", "address", "email", "phone"];

const REQUIRED_CODE: &str = "required";

/// Shape validation failure, reported before admission starts
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SubmissionError {
    pub field: &'static str,
    pub message: String,
}

/// Raw user registration payload as received from a client
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserSubmission {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "The name is required"))]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "The address is required"))]
    pub address: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "The email is required"),
        email(message = "The email is not valid")
    )]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "The phone is required"))]
    pub phone: String,

    #[serde(default)]
    pub money: Decimal,

    #[serde(default, alias = "userTypeLabel", deserialize_with = "null_as_empty")]
    pub user_type: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(REQUIRED_CODE));
    }
    Ok(())
}

/// Pick the message to report from a set of validation failures
fn first_failure(errors: &ValidationErrors) -> SubmissionError {
    let field_errors = errors.field_errors();

    for field in FIELD_ORDER {
        let Some(failures) = field_errors.get(field) else {
            continue;
        };

        let failure = failures
            .iter()
            .find(|e| e.code == REQUIRED_CODE)
            .or_else(|| failures.first());

        if let Some(failure) = failure {
            let message = failure
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("The {} is not valid", field));

            return SubmissionError { field, message };
        }
    }

    SubmissionError {
        field: "request",
        message: "The request is not valid".to_string(),
    }
}

/// A submission that passed shape validation.
///
/// Only obtainable through `TryFrom<UserSubmission>`, so the admission
/// workflow never sees unvalidated input.
#[derive(Debug, Clone, PartialEq)]
pub struct AdmissionRequest {
    name: String,
    address: String,
    email: String,
    phone: String,
    money: Decimal,
    user_type: String,
}

impl TryFrom<UserSubmission> for AdmissionRequest {
    type Error = SubmissionError;

    fn try_from(submission: UserSubmission) -> Result<Self, Self::Error> {
        submission.validate().map_err(|e| first_failure(&e))?;

        Ok(Self {
            name: submission.name,
            address: submission.address,
            email: submission.email,
            phone: submission.phone,
            money: submission.money,
            user_type: submission.user_type,
        })
    }
}

impl AdmissionRequest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn money(&self) -> Decimal {
        self.money
    }

    /// The free-text type label, not yet classified
    pub fn user_type(&self) -> &str {
        &self.user_type
    }

    /// Classify the type label and build the admission candidate
    pub fn into_candidate(self) -> Result<User, TierError> {
        let tier = UserTier::from_label(&self.user_type)?;

        Ok(User::new(
            self.name,
            self.address,
            self.email,
            self.phone,
            self.money,
            tier,
        ))
    }
}
