pub mod perspective;

use crate::errors::ModerationError;
use crate::types::{AttributeName, RawAttributeScores};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a text-analysis service.
///
/// Implementations score `text` for the requested attributes and return the
/// service's attribute map untouched. A structured rejection from the service must
/// be returned as [`ModerationError::Upstream`]; every other failure is treated as
/// an infrastructure problem by the caller.
#[async_trait]
pub trait ToxicityProvider: Send + Sync + Debug + DynClone {
    async fn analyze(
        &self,
        text: &str,
        attributes: &[AttributeName],
    ) -> Result<RawAttributeScores, ModerationError>;
}

dyn_clone::clone_trait_object!(ToxicityProvider);
