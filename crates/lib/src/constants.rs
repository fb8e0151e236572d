//! # Shared Constants
//!
//! This module provides a centralized location for constants that are shared across
//! the `vibecheck` workspace: thresholds, limits and the fixed user-facing messages
//! that make up the moderation response contract.

/// The maximum number of UTF-8 bytes forwarded to the analysis service.
pub const MAX_TEXT_BYTES: usize = 19_000;

/// Aggression totals strictly above this value are classified as toxic.
pub const AGGRESSION_THRESHOLD: f64 = 0.7;

/// A `THREAT` score strictly above this value is toxic on its own.
pub const THREAT_THRESHOLD: f64 = 0.6;

/// Traits at or below this score are left out of the vibe list.
pub const VIBE_LIST_THRESHOLD: f64 = 0.15;

/// The default Perspective API `comments:analyze` endpoint.
pub const DEFAULT_PERSPECTIVE_API_URL: &str =
    "https://commentanalyzer.googleapis.com/v1alpha1/comments:analyze";

/// Returned as `apiError` when the service cannot tell which language the text is in.
pub const UNDETERMINED_LANGUAGE_MESSAGE: &str =
    "The AI cannot determine the language of this text. Please use more text or a supported language.";

/// Returned as `apiError` when the service reports an error without a message.
pub const API_ISSUE_FALLBACK_MESSAGE: &str = "Could not analyze this text due to an API issue.";

/// The body of the 400 response for a request without a `text` field.
pub const TEXT_REQUIRED_MESSAGE: &str = "Text is required in the request body.";

/// The generic `error` field of the 500 response.
pub const INTERNAL_FAILURE_MESSAGE: &str =
    "Failed to analyze text due to an internal server issue.";
