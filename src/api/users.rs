//! User admission endpoint

use axum::{extract::State, http::StatusCode};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::admission::{AdmissionRequest, AdmissionResult, RejectionKind, UserSubmission};

/// POST /api/users
///
/// 200 when the user is created, 400 for rejected submissions, 500 when the
/// user store could not be used. The body is always an `AdmissionResult`
/// envelope.
pub async fn create_user(
    State(state): State<AppState>,
    Json(submission): Json<UserSubmission>,
) -> Result<(StatusCode, Json<AdmissionResult>), ApiError> {
    let request = AdmissionRequest::try_from(submission).map_err(|e| {
        debug!(field = e.field, "Rejected user submission: {}", e);
        ApiError::from(e)
    })?;

    let result = state.user_service.admit(request).await;

    Ok((status_for(&result), Json(result)))
}

fn status_for(result: &AdmissionResult) -> StatusCode {
    match result.rejection {
        None if result.success => StatusCode::OK,
        Some(RejectionKind::Infrastructure) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::admission::AdmissionError;
    use crate::domain::user::{User, UserTier, ValuationError};
    use crate::domain::DomainError;
    use rust_decimal::Decimal;

    fn created() -> AdmissionResult {
        AdmissionResult::created(&User::new(
            "Valeria Arrieta",
            "Pizzurno 763",
            "vale3@gmail.com",
            "1164874553",
            Decimal::ONE_HUNDRED,
            UserTier::Normal,
        ))
    }

    fn failed(error: AdmissionError) -> AdmissionResult {
        AdmissionResult::from(Err(error))
    }

    #[test]
    fn test_status_for() {
        assert_eq!(status_for(&created()), StatusCode::OK);
        assert_eq!(
            status_for(&failed(AdmissionError::Duplicate)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&failed(AdmissionError::InvalidMoney(ValuationError {
                money: Decimal::MAX
            }))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&failed(AdmissionError::Infrastructure(DomainError::storage(
                "users unavailable"
            )))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_status_follows_kind_not_wording() {
        let reworded = AdmissionResult::rejected(RejectionKind::Infrastructure, "Try again later");
        assert_eq!(status_for(&reworded), StatusCode::INTERNAL_SERVER_ERROR);

        let mimic = AdmissionResult::rejected(RejectionKind::Duplicate, "Internal Server Error");
        assert_eq!(status_for(&mimic), StatusCode::BAD_REQUEST);
    }
}
