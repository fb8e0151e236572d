use super::{errors::AppError, extract::AppJson, state::AppState, types::ModerateRequest};
use axum::{extract::State, Json};
use tracing::info;
use vibecheck::{constants::TEXT_REQUIRED_MESSAGE, ModerationResponse};

// --- Route Handlers ---

pub async fn root() -> &'static str {
    "vibecheck server is running."
}

pub async fn health_check() -> &'static str {
    "OK"
}

/// Moderates the submitted text.
///
/// Every outcome the client can act on (including upstream errors) is a 200 with a
/// [`ModerationResponse`]; only an unusable body, a missing `text` field and
/// infrastructure failures produce other status codes.
pub async fn moderate_handler(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<ModerateRequest>,
) -> Result<Json<ModerationResponse>, AppError> {
    let text = payload
        .text
        .ok_or_else(|| AppError::BadRequest(TEXT_REQUIRED_MESSAGE.to_string()))?;
    info!("Received moderation request ({} bytes)", text.len());

    let outcome = app_state.moderator.moderate(&text).await?;

    Ok(Json(ModerationResponse::from(outcome)))
}
