//! # Score Normalization
//!
//! Turns the variable-shaped attribute map returned by the analysis service into a
//! complete [`NormalizedScores`] and an aggression total.

use crate::types::{AttributeName, NormalizedScores, RawAttributeScores};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Extracts `summaryScore.value` from a raw attribute entry.
fn summary_score(entry: &Value) -> Option<f64> {
    entry
        .get("summaryScore")
        .and_then(|summary| summary.get("value"))
        .and_then(Value::as_f64)
        .filter(|value| value.is_finite())
}

/// Builds a score for every requested attribute.
///
/// Attributes are looked up by name in `raw`; anything the service left out or
/// reported in an unexpected shape scores `0.0`. Values are clamped to `[0, 1]`
/// and rounded to two decimals. Attributes that were not requested are ignored.
pub fn normalize_scores(raw: &RawAttributeScores) -> NormalizedScores {
    let scores: BTreeMap<AttributeName, f64> = AttributeName::ALL
        .into_iter()
        .map(|attr| {
            let score = match raw.get(attr.as_str()).and_then(summary_score) {
                Some(value) => round2(value.clamp(0.0, 1.0)),
                None => {
                    debug!(attribute = %attr, "No usable score reported, defaulting to 0.");
                    0.0
                }
            };
            (attr, score)
        })
        .collect();

    NormalizedScores::from_map(scores)
}

/// The unweighted sum of all requested attributes, rounded once after summation.
pub fn aggression_score(scores: &NormalizedScores) -> f64 {
    let total: f64 = AttributeName::ALL
        .into_iter()
        .map(|attr| scores.get(attr))
        .sum();
    round2(total)
}
