//! # Moderation Pipeline
//!
//! [`Moderator`] runs one piece of text through the whole pipeline: the empty-text
//! short-circuit, truncation, the upstream call, normalization, and classification.
//! Structured upstream errors become outcomes; anything else is returned as an error.

use crate::{
    classify::{classify_status, classify_upstream_error, UpstreamErrorKind},
    constants::{API_ISSUE_FALLBACK_MESSAGE, MAX_TEXT_BYTES, UNDETERMINED_LANGUAGE_MESSAGE},
    errors::ModerationError,
    normalize::{aggression_score, normalize_scores},
    providers::ToxicityProvider,
    truncate::truncate_to_byte_ceiling,
    types::{Analysis, AttributeName, ModerationOutcome, ModerationStatus},
};
use tracing::{debug, info, warn};

/// Moderates text against a [`ToxicityProvider`].
///
/// Holds no per-request state, so a single instance can serve concurrent requests.
#[derive(Clone, Debug)]
pub struct Moderator {
    provider: Box<dyn ToxicityProvider>,
}

impl Moderator {
    pub fn new(provider: Box<dyn ToxicityProvider>) -> Self {
        Self { provider }
    }

    /// Moderates `text`.
    ///
    /// Only infrastructure failures (transport errors, timeouts, unreadable
    /// responses) are returned as `Err`.
    pub async fn moderate(&self, text: &str) -> Result<ModerationOutcome, ModerationError> {
        if text.trim().is_empty() {
            debug!("Blank text, skipping analysis.");
            return Ok(ModerationOutcome::Blank);
        }

        let (text, was_truncated) = truncate_to_byte_ceiling(text, MAX_TEXT_BYTES);
        if was_truncated {
            info!(
                limit = MAX_TEXT_BYTES,
                "Text exceeds the byte ceiling and was truncated."
            );
        }

        match self.provider.analyze(&text, &AttributeName::ALL).await {
            Ok(raw) => {
                let scores = normalize_scores(&raw);
                let total_aggression = aggression_score(&scores);
                let status = classify_status(&scores, total_aggression);
                info!(
                    %status,
                    aggression = total_aggression,
                    truncated = was_truncated,
                    "[SUCCESS] Text analyzed."
                );

                let analysis = Analysis {
                    scores,
                    total_aggression,
                    was_truncated,
                };
                Ok(match status {
                    ModerationStatus::Toxic => ModerationOutcome::Toxic(analysis),
                    _ => ModerationOutcome::Safe(analysis),
                })
            }
            Err(ModerationError::Upstream(err)) => {
                let message = err.message.as_deref().unwrap_or_default();
                let outcome = match classify_upstream_error(message) {
                    UpstreamErrorKind::UndeterminedLanguage => {
                        warn!(upstream = %err, "Upstream could not determine the language.");
                        ModerationOutcome::Unknown {
                            api_error: UNDETERMINED_LANGUAGE_MESSAGE.to_string(),
                        }
                    }
                    UpstreamErrorKind::Generic => {
                        warn!(upstream = %err, "Upstream rejected the analysis request.");
                        let api_error = err
                            .message
                            .filter(|m| !m.trim().is_empty())
                            .unwrap_or_else(|| API_ISSUE_FALLBACK_MESSAGE.to_string());
                        ModerationOutcome::Error { api_error }
                    }
                };
                Ok(outcome)
            }
            Err(e) => Err(e),
        }
    }
}
