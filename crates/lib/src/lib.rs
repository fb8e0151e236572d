//! # vibecheck
//!
//! Text moderation on top of the Google Perspective API. The crate turns the
//! attribute scores Perspective reports into a stable verdict: a complete,
//! rounded score map, an aggression total, and a `safe`/`toxic` status, with
//! upstream failures shaped into `error`/`unknown` outcomes.

pub mod classify;
pub mod constants;
pub mod errors;
pub mod moderator;
pub mod normalize;
pub mod providers;
pub mod report;
pub mod truncate;
pub mod types;

pub use errors::{ModerationError, UpstreamError};
pub use moderator::Moderator;
pub use providers::{perspective::PerspectiveProvider, ToxicityProvider};
pub use report::VibeReport;
pub use types::{
    Analysis, AttributeName, ModerationOutcome, ModerationResponse, ModerationStatus,
    NormalizedScores, RawAttributeScores,
};
