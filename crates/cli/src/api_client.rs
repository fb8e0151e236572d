//! # API Client
//!
//! This module provides a client for the `vibecheck-server` API. It handles
//! request construction and turns both the moderation envelope and the error
//! bodies into a single reply type.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use vibecheck::ModerationResponse;

/// The body the server sends for a 400 or 500.
#[derive(Clone, Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    details: Option<String>,
}

/// What the server answered to a moderation request.
#[derive(Clone, Debug)]
pub enum ModerateReply {
    /// A moderation envelope, whatever its `status`.
    Envelope(ModerationResponse),
    /// The server refused or failed the request.
    Failed {
        status: u16,
        error: String,
        details: Option<String>,
    },
}

/// The client for making API calls to the `vibecheck-server`.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a new `ApiClient`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Submits `text` to `POST /moderate`.
    pub async fn moderate(&self, text: &str) -> Result<ModerateReply> {
        let url = format!("{}/moderate", self.base_url);
        info!("Submitting {} bytes to {}", text.len(), url);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "text": text }))
            .send()
            .await
            .with_context(|| format!("Could not reach the vibecheck server at {url}"))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let body: Option<ErrorBody> = serde_json::from_str(&error_text).ok();
            let (error, details) = match body {
                Some(ErrorBody { error, details }) => (error, details),
                None => (None, None),
            };
            return Ok(ModerateReply::Failed {
                status: status.as_u16(),
                error: error.unwrap_or_else(|| "Server error occurred".to_string()),
                details,
            });
        }

        let envelope = response
            .json::<ModerationResponse>()
            .await
            .context("Failed to parse the moderation response")?;
        Ok(ModerateReply::Envelope(envelope))
    }
}
