//! Draft records and their save-time defaults.
//!
//! A [`Draft`] is one persisted content unit in the user's library. Field
//! names serialize in camelCase so the persisted snapshot matches the shape
//! the web client reads.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DateStamp, DraftId};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Thumbnail used when a draft has no generated image.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://picsum.photos/400/300";

/// Title substituted when a draft is saved with an empty title.
pub const UNTITLED_TITLE: &str = "Untitled Content";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a draft. New drafts default to [`DraftStatus::Draft`]
/// on first save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    Draft,
    Published,
    Generated,
}

impl Default for DraftStatus {
    fn default() -> Self {
        DraftStatus::Draft
    }
}

impl DraftStatus {
    /// Parse a status from its wire string (`"draft"`, `"published"`,
    /// `"generated"`).
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "draft" => Ok(DraftStatus::Draft),
            "published" => Ok(DraftStatus::Published),
            "generated" => Ok(DraftStatus::Generated),
            other => Err(CoreError::Validation(format!(
                "Invalid draft status '{other}'. Must be one of: draft, published, generated"
            ))),
        }
    }

    /// Wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftStatus::Draft => "draft",
            DraftStatus::Published => "published",
            DraftStatus::Generated => "generated",
        }
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// A persisted content unit in the user's library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// Stable identifier assigned at first save.
    pub id: DraftId,
    pub title: String,
    /// Article body; may contain lightweight markdown.
    pub body: String,
    pub status: DraftStatus,
    /// Date stamp fixed at first save, never mutated afterwards.
    pub created_at: DateStamp,
    /// Keyword tags taken from the most recent suggestion sync at save time.
    pub tags: Vec<String>,
    /// Display image: the generated image if one exists, else
    /// [`PLACEHOLDER_THUMBNAIL`].
    pub thumbnail: String,
    /// Data URI of an AI-generated illustration. Persists across saves
    /// until regenerated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_image: Option<String>,
}

// ---------------------------------------------------------------------------
// Save-time defaults
// ---------------------------------------------------------------------------

/// Resolve the title to persist: a trimmed-empty title becomes
/// [`UNTITLED_TITLE`].
pub fn effective_title(title: &str) -> String {
    if title.trim().is_empty() {
        UNTITLED_TITLE.to_string()
    } else {
        title.to_string()
    }
}

/// Resolve the thumbnail to persist: the generated image when present,
/// else [`PLACEHOLDER_THUMBNAIL`].
pub fn effective_thumbnail(generated_image: Option<&str>) -> String {
    match generated_image {
        Some(uri) if !uri.is_empty() => uri.to_string(),
        _ => PLACEHOLDER_THUMBNAIL.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
