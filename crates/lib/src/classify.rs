//! # Classification
//!
//! Status classification for analyzed text, and classification of structured
//! upstream errors into the ones the client can act on.

use crate::constants::{AGGRESSION_THRESHOLD, THREAT_THRESHOLD};
use crate::types::{AttributeName, ModerationStatus, NormalizedScores};
use regex::Regex;
use std::sync::LazyLock;

/// Perspective reports undetectable input as e.g.
/// `Attribute TOXICITY does not support request languages: und`.
/// `und` is the ISO 639 code for "undetermined".
static UNDETERMINED_LANGUAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\blanguages?:\s*\[?\s*und\b")
        .expect("undetermined-language pattern is valid")
});

/// The kind of a structured error reported by the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    /// The service could not tell which language the text is in.
    UndeterminedLanguage,
    Generic,
}

/// Classifies an upstream error message.
///
/// Matches the literal `languages: und` marker Perspective emits, tolerating the
/// singular form, extra whitespace and a bracketed list.
pub fn classify_upstream_error(message: &str) -> UpstreamErrorKind {
    if UNDETERMINED_LANGUAGE.is_match(message) {
        UpstreamErrorKind::UndeterminedLanguage
    } else {
        UpstreamErrorKind::Generic
    }
}

/// `Toxic` if the aggression total or the `THREAT` score crosses its threshold.
pub fn classify_status(scores: &NormalizedScores, total_aggression: f64) -> ModerationStatus {
    if total_aggression > AGGRESSION_THRESHOLD
        || scores.get(AttributeName::Threat) > THREAT_THRESHOLD
    {
        ModerationStatus::Toxic
    } else {
        ModerationStatus::Safe
    }
}
