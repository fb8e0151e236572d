//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup.

use crate::config::AppConfig;
use std::{sync::Arc, time::Duration};
use vibecheck::{Moderator, PerspectiveProvider};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The moderation pipeline, backed by the Perspective API.
    pub moderator: Arc<Moderator>,
}

/// Builds the shared application state from the configuration.
///
/// Instantiates the Perspective client with the configured endpoint, key and timeout.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let provider = PerspectiveProvider::new(
        config.perspective_api_url.clone(),
        config.perspective_api_key.clone(),
        Duration::from_secs(config.upstream_timeout_secs),
    )?;
    tracing::info!(api_url = %config.perspective_api_url, "Initialized Perspective provider.");

    Ok(AppState {
        moderator: Arc::new(Moderator::new(Box::new(provider))),
    })
}
