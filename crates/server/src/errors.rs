use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info};
use vibecheck::{constants::INTERNAL_FAILURE_MESSAGE, ModerationError};

/// A custom error type for the server application.
///
/// Only failures that cannot be expressed as a moderation envelope end up here:
/// a request the client got wrong, or an infrastructure failure on our side.
#[derive(Debug)]
pub enum AppError {
    /// The request was missing something the client must supply, or was not valid JSON.
    BadRequest(String),
    /// The body was valid JSON of the wrong shape.
    Unprocessable(String),
    /// The moderation pipeline failed without a structured upstream error.
    Moderation(ModerationError),
}

/// Conversion from `ModerationError` to `AppError`.
impl From<ModerationError> for AppError {
    fn from(err: ModerationError) -> Self {
        AppError::Moderation(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Unprocessable(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Moderation(err) => {
                if err.is_timeout() {
                    error!("[ERROR] Perspective API timed out: {err}");
                } else {
                    error!("[ERROR] Failed to analyze. Error: {err:?}");
                }
                return internal_failure(err.to_string());
            }
        };

        info!(%status, "Rejected request: {message}");
        (status, Json(json!({ "error": message }))).into_response()
    }
}

fn internal_failure(details: String) -> Response {
    let body = Json(json!({
        "error": INTERNAL_FAILURE_MESSAGE,
        "details": details,
    }));

    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
