use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::university::errors::UniversityError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for UniversityError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            UniversityError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "university.name_empty",
            ),
            UniversityError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "university.not_found")
            }
            UniversityError::Repository(_) => (
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
