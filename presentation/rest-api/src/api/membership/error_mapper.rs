use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::membership::errors::MembershipError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MembershipError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            MembershipError::InvalidRole => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "membership.invalid_role",
            ),
            MembershipError::InvalidStatus => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "membership.invalid_status",
            ),
            MembershipError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "membership.not_found")
            }
            MembershipError::ClubNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "membership.club_not_found",
            ),
            MembershipError::PersonNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "membership.person_not_found",
            ),
            MembershipError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
