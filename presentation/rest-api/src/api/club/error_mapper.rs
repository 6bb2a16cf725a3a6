use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::club::errors::ClubError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ClubError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ClubError::NameEmpty => (StatusCode::BAD_REQUEST, "ValidationError", "club.name_empty"),
            ClubError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "club.not_found"),
            ClubError::UniversityNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "club.university_not_found",
            ),
            ClubError::Repository(_) => (
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
