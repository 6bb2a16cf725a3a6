use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::person::errors::PersonError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for PersonError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            PersonError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "person.name_empty",
            ),
            PersonError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "person.not_found"),
            PersonError::Repository(_) => (
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
