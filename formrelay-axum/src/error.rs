use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use formrelay_core::ValidationErrors;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request must be a valid JSON")]
    NotJson,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// The body could not be read, with the status axum chose (e.g. 413).
    #[error("Unreadable request body: {message}")]
    UnreadableBody { status: StatusCode, message: String },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Failed to send message: {0}")]
    Dispatch(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<formrelay_core::Error> for ApiError {
    fn from(err: formrelay_core::Error) -> Self {
        match err {
            formrelay_core::Error::Mailer(e) if e.is_transport() => {
                ApiError::Dispatch(e.to_string())
            }
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::NotJson => (
                StatusCode::BAD_REQUEST,
                json!("Request must be a valid JSON"),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!(msg)),
            ApiError::UnreadableBody { status, message } => (status, json!(message)),
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, json!(errors)),
            // Relay details stay in the logs.
            ApiError::Dispatch(_) => (StatusCode::BAD_GATEWAY, json!("Failed to send message")),
            ApiError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!("Internal server error"),
            ),
        };

        (status, Json(json!({ "error": error }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use formrelay_core::FieldError;

    #[test]
    fn test_status_codes() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::missing("city"));

        assert_eq!(
            ApiError::NotJson.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Validation(errors).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Dispatch("connection refused".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::InternalError("template".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unreadable_body_keeps_its_status() {
        let err = ApiError::UnreadableBody {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "length limit exceeded".to_string(),
        };

        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_mailer_errors_map_to_internal_unless_transport() {
        let err: ApiError = formrelay_core::Error::Mailer(
            formrelay_mailer::MailerError::Config("Unknown email template".to_string()),
        )
        .into();

        assert!(matches!(err, ApiError::InternalError(_)));
    }
}
