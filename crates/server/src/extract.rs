//! # Request Extractors
//!
//! `AppJson<T>` replaces `axum::Json<T>` in handler signatures. A request without a
//! JSON content type or with an empty body deserializes as `T::default()`, and every
//! other rejection becomes an `AppError` with a JSON `{ "error" }` body instead of
//! axum's plain-text response.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;

pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(AppJson(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        if bytes.trim_ascii().is_empty() {
            return Ok(AppJson(T::default()));
        }

        match Json::<T>::from_bytes(&bytes) {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(map_json_rejection(rejection)),
        }
    }
}

/// Well-formed JSON of the wrong shape is a 422; anything else is a 400.
fn map_json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => AppError::Unprocessable(err.body_text()),
        other => AppError::BadRequest(other.body_text()),
    }
}

/// `application/json` or any `application/*+json` media type.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers
    }

    #[test]
    fn test_json_content_type_detection() {
        assert!(has_json_content_type(&headers_with("application/json")));
        assert!(has_json_content_type(&headers_with(
            "Application/JSON; charset=utf-8"
        )));
        assert!(has_json_content_type(&headers_with(
            "application/merge-patch+json"
        )));
        assert!(!has_json_content_type(&headers_with("text/plain")));
        assert!(!has_json_content_type(&HeaderMap::new()));
    }
}
