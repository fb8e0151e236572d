//! # Core Types
//!
//! The attribute set, the normalized score map, and the moderation outcome along with
//! the JSON envelope it is serialized into at the HTTP boundary.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// The attribute scores exactly as the analysis service reported them.
///
/// Keys are attribute names; values are expected to look like
/// `{ "summaryScore": { "value": 0.42 } }` but are not trusted.
pub type RawAttributeScores = HashMap<String, serde_json::Value>;

/// An attribute requested from the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeName {
    Toxicity,
    IdentityAttack,
    Insult,
    Profanity,
    Threat,
}

impl AttributeName {
    /// Every attribute requested from upstream. Normalization covers exactly this set.
    pub const ALL: [AttributeName; 5] = [
        AttributeName::Toxicity,
        AttributeName::IdentityAttack,
        AttributeName::Insult,
        AttributeName::Profanity,
        AttributeName::Threat,
    ];

    /// The wire name used by the analysis service.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeName::Toxicity => "TOXICITY",
            AttributeName::IdentityAttack => "IDENTITY_ATTACK",
            AttributeName::Insult => "INSULT",
            AttributeName::Profanity => "PROFANITY",
            AttributeName::Threat => "THREAT",
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttributeName::ALL
            .into_iter()
            .find(|attr| attr.as_str() == s)
            .ok_or_else(|| format!("Unknown attribute: {s}"))
    }
}

/// A complete map from every requested attribute to a score in `[0, 1]`,
/// rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedScores(BTreeMap<AttributeName, f64>);

impl NormalizedScores {
    pub(crate) fn from_map(scores: BTreeMap<AttributeName, f64>) -> Self {
        Self(scores)
    }

    /// The score for `attr`, `0.0` if it was never set.
    pub fn get(&self, attr: AttributeName) -> f64 {
        self.0.get(&attr).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeName, f64)> + '_ {
        self.0.iter().map(|(attr, score)| (*attr, *score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The verdict reported in the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Safe,
    Toxic,
    Error,
    Unknown,
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModerationStatus::Safe => "safe",
            ModerationStatus::Toxic => "toxic",
            ModerationStatus::Error => "error",
            ModerationStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Scores and aggression total for a text the service managed to analyze.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub scores: NormalizedScores,
    pub total_aggression: f64,
    pub was_truncated: bool,
}

/// The result of moderating one piece of text.
///
/// Each variant carries only the fields that are meaningful for it. Use
/// [`ModerationResponse::from`] to obtain the JSON envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum ModerationOutcome {
    /// The text was empty after trimming; upstream was never called.
    Blank,
    Safe(Analysis),
    Toxic(Analysis),
    /// The service could not determine the language of the text.
    Unknown { api_error: String },
    /// The service rejected the request with a structured error.
    Error { api_error: String },
}

impl ModerationOutcome {
    pub fn status(&self) -> ModerationStatus {
        match self {
            ModerationOutcome::Blank | ModerationOutcome::Safe(_) => ModerationStatus::Safe,
            ModerationOutcome::Toxic(_) => ModerationStatus::Toxic,
            ModerationOutcome::Unknown { .. } => ModerationStatus::Unknown,
            ModerationOutcome::Error { .. } => ModerationStatus::Error,
        }
    }

    pub fn total_aggression(&self) -> f64 {
        match self {
            ModerationOutcome::Safe(a) | ModerationOutcome::Toxic(a) => a.total_aggression,
            _ => 0.0,
        }
    }

    /// Only analyzed outcomes report truncation; the rest always read `false`.
    pub fn was_truncated(&self) -> bool {
        match self {
            ModerationOutcome::Safe(a) | ModerationOutcome::Toxic(a) => a.was_truncated,
            _ => false,
        }
    }
}

/// The JSON body returned by `POST /moderate` for every analyzable outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationResponse {
    pub status: ModerationStatus,
    pub total_aggression: f64,
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub was_truncated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_error: Option<String>,
}

impl From<ModerationOutcome> for ModerationResponse {
    fn from(outcome: ModerationOutcome) -> Self {
        let status = outcome.status();
        let total_aggression = outcome.total_aggression();
        let was_truncated = outcome.was_truncated();
        let (scores, api_error) = match outcome {
            ModerationOutcome::Blank => (BTreeMap::new(), None),
            ModerationOutcome::Safe(a) | ModerationOutcome::Toxic(a) => (
                a.scores
                    .iter()
                    .map(|(attr, score)| (attr.as_str().to_string(), score))
                    .collect(),
                None,
            ),
            ModerationOutcome::Unknown { api_error } | ModerationOutcome::Error { api_error } => {
                (BTreeMap::new(), Some(api_error))
            }
        };

        ModerationResponse {
            status,
            total_aggression,
            scores,
            was_truncated,
            api_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attribute_names_round_trip_through_wire_names() {
        for attr in AttributeName::ALL {
            assert_eq!(attr.as_str().parse::<AttributeName>(), Ok(attr));
        }
        assert!("SPAM".parse::<AttributeName>().is_err());
        assert_eq!(
            serde_json::to_value(AttributeName::IdentityAttack).unwrap(),
            json!("IDENTITY_ATTACK")
        );
    }

    #[test]
    fn test_blank_outcome_serializes_to_empty_safe_envelope() {
        let body =
            serde_json::to_value(ModerationResponse::from(ModerationOutcome::Blank)).unwrap();
        assert_eq!(
            body,
            json!({
                "status": "safe",
                "totalAggression": 0.0,
                "scores": {},
                "wasTruncated": false
            })
        );
    }

    #[test]
    fn test_error_outcomes_carry_api_error_and_no_scores() {
        let body = serde_json::to_value(ModerationResponse::from(ModerationOutcome::Unknown {
            api_error: "nope".to_string(),
        }))
        .unwrap();
        assert_eq!(body["status"], "unknown");
        assert_eq!(body["apiError"], "nope");
        assert_eq!(body["scores"], json!({}));
        assert_eq!(body["totalAggression"], 0.0);
        assert_eq!(body["wasTruncated"], false);
    }
}
