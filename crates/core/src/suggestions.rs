//! Ephemeral suggestion sets produced by content analysis.
//!
//! Suggestions live only inside an active editing session: they are
//! regenerated wholesale on each sync and are never persisted on their own
//! (a draft keeps only the keyword list, as `tags`, at save time).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum content length (chars) before analysis calls the remote service.
/// Shorter input gets the fixed placeholder set instead.
pub const MIN_ANALYZE_CHARS: usize = 10;

/// Placeholder headline shown while the content is still too short.
pub const PLACEHOLDER_HEADLINE: &str = "Add more content...";

/// Placeholder summary shown while the content is still too short.
pub const PLACEHOLDER_SUMMARY: &str = "Waiting for more text...";

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

/// AI-derived headlines, keywords, summary, and sentiment for the text
/// currently being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    /// Ranked candidate titles.
    pub headlines: Vec<String>,
    /// Tag candidates; copied into `Draft::tags` at save time.
    pub keywords: Vec<String>,
    pub summary: String,
    /// Free-text tone label (e.g. "Neutral", "Optimistic").
    pub sentiment: String,
}

impl Suggestions {
    /// The fixed set returned for near-empty input, without any remote call.
    pub fn placeholder() -> Self {
        Suggestions {
            headlines: vec![PLACEHOLDER_HEADLINE.to_string()],
            keywords: Vec::new(),
            summary: PLACEHOLDER_SUMMARY.to_string(),
            sentiment: "Neutral".to_string(),
        }
    }
}

/// Whether `content` is too short to be worth a remote analysis call.
pub fn below_analyze_threshold(content: &str) -> bool {
    content.chars().count() < MIN_ANALYZE_CHARS
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_is_below_threshold() {
        assert!(below_analyze_threshold(""));
    }

    #[test]
    fn short_content_is_below_threshold() {
        assert!(below_analyze_threshold("short"));
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(below_analyze_threshold("123456789"));
        assert!(!below_analyze_threshold("1234567890"));
    }

    #[test]
    fn placeholder_set_has_fixed_shape() {
        let s = Suggestions::placeholder();
        assert_eq!(s.headlines, vec![PLACEHOLDER_HEADLINE]);
        assert!(s.keywords.is_empty());
        assert_eq!(s.summary, PLACEHOLDER_SUMMARY);
        assert_eq!(s.sentiment, "Neutral");
    }
}
