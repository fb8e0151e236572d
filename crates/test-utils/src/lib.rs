//! # Shared Test Fixtures
//!
//! Canned Perspective API bodies, an in-process mock provider, and tracing setup
//! shared by the `vibecheck` and `vibecheck-server` test suites.

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::{Arc, Mutex, Once};
use vibecheck::{
    AttributeName, ModerationError, RawAttributeScores, ToxicityProvider, UpstreamError,
};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber once per test binary.
pub fn setup_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .with_test_writer()
            .try_init();
    });
}

// --- Canned Perspective bodies ---

/// A successful `comments:analyze` body reporting the given scores.
pub fn perspective_success_body(scores: &[(&str, f64)]) -> Value {
    let attribute_scores: Map<String, Value> = scores
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                json!({
                    "spanScores": [{ "begin": 0, "end": 10, "score": { "value": value, "type": "PROBABILITY" } }],
                    "summaryScore": { "value": value, "type": "PROBABILITY" }
                }),
            )
        })
        .collect();
    json!({ "attributeScores": attribute_scores, "languages": ["en"], "detectedLanguages": ["en"] })
}

/// A structured Perspective error body.
pub fn perspective_error_body(code: u16, message: &str, status: &str) -> Value {
    json!({ "error": { "code": code, "message": message, "status": status } })
}

/// The body Perspective sends when it cannot detect the input language.
pub fn undetermined_language_body() -> Value {
    perspective_error_body(
        400,
        "Attribute TOXICITY does not support request languages: und",
        "INVALID_ARGUMENT",
    )
}

/// Raw scores as the provider would hand them to the normalizer.
pub fn raw_scores(scores: &[(&str, f64)]) -> RawAttributeScores {
    match perspective_success_body(scores)["attributeScores"].clone() {
        Value::Object(map) => map.into_iter().collect(),
        _ => RawAttributeScores::new(),
    }
}

// --- Mock Provider ---

/// What the mock provider should answer with.
#[derive(Clone, Debug)]
pub enum MockReply {
    Scores(RawAttributeScores),
    Upstream(UpstreamError),
    Unstructured { status: u16, body: String },
}

/// A [`ToxicityProvider`] that returns a fixed reply and records every call.
#[derive(Clone, Debug)]
pub struct MockProvider {
    reply: MockReply,
    calls: Arc<Mutex<Vec<(String, Vec<AttributeName>)>>>,
}

impl MockProvider {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_scores(scores: &[(&str, f64)]) -> Self {
        Self::new(MockReply::Scores(raw_scores(scores)))
    }

    pub fn with_upstream_error(message: Option<&str>) -> Self {
        Self::new(MockReply::Upstream(UpstreamError {
            code: Some(400),
            message: message.map(String::from),
            status: Some("INVALID_ARGUMENT".to_string()),
        }))
    }

    /// Retrieves the recorded calls for assertion.
    pub fn get_calls(&self) -> Vec<(String, Vec<AttributeName>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ToxicityProvider for MockProvider {
    async fn analyze(
        &self,
        text: &str,
        attributes: &[AttributeName],
    ) -> Result<RawAttributeScores, ModerationError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), attributes.to_vec()));
        match &self.reply {
            MockReply::Scores(scores) => Ok(scores.clone()),
            MockReply::Upstream(err) => Err(ModerationError::Upstream(err.clone())),
            MockReply::Unstructured { status, body } => Err(ModerationError::UnstructuredApi {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
