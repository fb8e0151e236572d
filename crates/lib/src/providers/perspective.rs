use crate::{
    errors::{ModerationError, UpstreamError},
    providers::ToxicityProvider,
    types::{AttributeName, RawAttributeScores},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use tracing::debug;

// --- Perspective-specific request and response structures ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeCommentRequest<'a> {
    comment: Comment<'a>,
    requested_attributes: BTreeMap<&'static str, AttributeOptions>,
}

#[derive(Serialize)]
struct Comment<'a> {
    text: &'a str,
}

/// Per-attribute options. Always sent empty.
#[derive(Serialize)]
struct AttributeOptions {}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct AnalyzeCommentResponse {
    attribute_scores: RawAttributeScores,
}

#[derive(Deserialize, Debug)]
struct ErrorEnvelope {
    error: UpstreamError,
}

// --- Perspective Provider implementation ---

/// A provider for the Google Perspective `comments:analyze` API.
#[derive(Clone)]
pub struct PerspectiveProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
}

impl fmt::Debug for PerspectiveProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PerspectiveProvider")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl PerspectiveProvider {
    /// Creates a new `PerspectiveProvider` whose requests give up after `timeout`.
    pub fn new(
        api_url: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, ModerationError> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ModerationError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }
}

#[async_trait]
impl ToxicityProvider for PerspectiveProvider {
    /// Scores `text` using the Perspective API.
    async fn analyze(
        &self,
        text: &str,
        attributes: &[AttributeName],
    ) -> Result<RawAttributeScores, ModerationError> {
        let request_body = AnalyzeCommentRequest {
            comment: Comment { text },
            requested_attributes: attributes
                .iter()
                .map(|attr| (attr.as_str(), AttributeOptions {}))
                .collect(),
        };

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", &self.api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(ModerationError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<ErrorEnvelope>(&error_text) {
                Ok(envelope) => ModerationError::Upstream(envelope.error),
                Err(_) => ModerationError::UnstructuredApi {
                    status: status.as_u16(),
                    body: error_text,
                },
            });
        }

        let analyze_response: AnalyzeCommentResponse = response
            .json()
            .await
            .map_err(ModerationError::Deserialization)?;
        debug!(
            attributes = analyze_response.attribute_scores.len(),
            "Received attribute scores from Perspective."
        );

        Ok(analyze_response.attribute_scores)
    }
}
