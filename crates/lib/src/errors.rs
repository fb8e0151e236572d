use std::fmt;
use thiserror::Error;

/// A structured error reported by the analysis service.
///
/// Perspective answers failed requests with `{ "error": { "code", "message", "status" } }`.
/// Any of the fields may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct UpstreamError {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => write!(f, "{code}: {message}"),
            (None, Some(message)) => write!(f, "{message}"),
            (Some(code), None) => write!(f, "code {code}"),
            (None, None) => write!(f, "no message"),
        }
    }
}

/// Custom error types for the moderation pipeline.
#[derive(Error, Debug)]
pub enum ModerationError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to Perspective API: {0}")]
    Request(reqwest::Error),
    #[error("Failed to deserialize Perspective API response: {0}")]
    Deserialization(reqwest::Error),
    #[error("Perspective API returned HTTP {status} without a structured error body: {body}")]
    UnstructuredApi { status: u16, body: String },
    #[error("Perspective API returned an error: {0}")]
    Upstream(UpstreamError),
}

impl ModerationError {
    /// Returns `true` if the request timed out before the service answered.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ModerationError::Request(e) if e.is_timeout())
    }
}
