//! Port for the remote generative service.
//!
//! The studio orchestrator depends on this trait rather than on the
//! concrete HTTP client, so orchestration logic is testable with a
//! scripted implementation.

use async_trait::async_trait;
use serde::Deserialize;

use lumina_core::suggestions::Suggestions;

use crate::error::GenAiError;

/// A full article draft produced from a topic.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeneratedDraft {
    pub title: String,
    /// May contain lightweight markdown.
    pub body: String,
}

/// The four operations the studio needs from a generative backend.
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Analyze content into headlines, keywords, a summary, and a sentiment
    /// label.
    ///
    /// Implementations must return [`Suggestions::placeholder`] without any
    /// remote call when the content is below the analysis threshold.
    async fn analyze(&self, content: &str) -> Result<Suggestions, GenAiError>;

    /// Generate a full article draft about `topic`.
    async fn draft_from(&self, topic: &str) -> Result<GeneratedDraft, GenAiError>;

    /// Rewrite `text` according to a free-form `instruction`.
    ///
    /// Contract: on any failure the caller keeps `text` unchanged —
    /// refinement must never destroy existing content.
    async fn refine(&self, text: &str, instruction: &str) -> Result<String, GenAiError>;

    /// Generate one illustration for `prompt` and return a directly
    /// renderable image reference (a `data:` URI).
    ///
    /// Fails with [`GenAiError::NoImageReturned`] when the service response
    /// carries no image payload.
    async fn illustrate(&self, prompt: &str) -> Result<String, GenAiError>;
}
