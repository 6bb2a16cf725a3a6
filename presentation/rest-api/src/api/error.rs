use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    /// Shorthand for 400-class errors raised by the routes themselves,
    /// e.g. unparseable path parameters.
    pub fn validation(message: &str) -> Json<Self> {
        Json(Self {
            name: "ValidationError".to_string(),
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
