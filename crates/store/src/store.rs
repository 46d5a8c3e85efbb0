//! Ordered, de-duplicated draft collection.
//!
//! Single source of truth for the library views. Single-writer: mutated
//! only through the orchestrator's save/delete intents, never concurrently.

use lumina_core::draft::Draft;
use lumina_core::types::DraftId;

/// Authoritative ordered collection of drafts, most recently created first.
///
/// Invariant: exactly one draft per id. Upserting an existing id replaces
/// it in place and preserves its position; a new id is prepended.
#[derive(Debug, Default)]
pub struct DraftStore {
    drafts: Vec<Draft>,
}

impl DraftStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store hydrated from a persisted snapshot, preserving its order.
    pub fn from_snapshot(drafts: Vec<Draft>) -> Self {
        Self { drafts }
    }

    /// Insert or replace a draft.
    ///
    /// Returns `true` when an existing draft was replaced in place,
    /// `false` when the draft was newly inserted at the front.
    pub fn upsert(&mut self, draft: Draft) -> bool {
        if let Some(existing) = self.drafts.iter_mut().find(|d| d.id == draft.id) {
            *existing = draft;
            true
        } else {
            self.drafts.insert(0, draft);
            false
        }
    }

    /// Remove the draft with `id`. No-op when absent; returns whether a
    /// draft was actually removed.
    pub fn remove(&mut self, id: DraftId) -> bool {
        let before = self.drafts.len();
        self.drafts.retain(|d| d.id != id);
        self.drafts.len() < before
    }

    /// Look up a draft by id.
    pub fn find_by_id(&self, id: DraftId) -> Option<&Draft> {
        self.drafts.iter().find(|d| d.id == id)
    }

    /// All drafts in insertion order (front-biased: newest first).
    pub fn all(&self) -> &[Draft] {
        &self.drafts
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use lumina_core::draft::{DraftStatus, PLACEHOLDER_THUMBNAIL};

    use super::*;

    fn draft(title: &str) -> Draft {
        Draft {
            id: uuid::Uuid::new_v4(),
            title: title.to_string(),
            body: String::new(),
            status: DraftStatus::Draft,
            created_at: chrono::NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            tags: Vec::new(),
            thumbnail: PLACEHOLDER_THUMBNAIL.to_string(),
            generated_image: None,
        }
    }

    #[test]
    fn new_drafts_prepend() {
        let mut store = DraftStore::new();
        store.upsert(draft("first"));
        store.upsert(draft("second"));
        assert_eq!(store.all()[0].title, "second");
        assert_eq!(store.all()[1].title, "first");
    }

    #[test]
    fn upsert_existing_replaces_in_place() {
        let mut store = DraftStore::new();
        let a = draft("a");
        let id = a.id;
        store.upsert(a);
        store.upsert(draft("b"));

        let mut updated = draft("a2");
        updated.id = id;
        let replaced = store.upsert(updated);

        assert!(replaced);
        assert_eq!(store.len(), 2);
        // Position preserved: "a2" stays at the back where "a" was.
        assert_eq!(store.all()[1].title, "a2");
        assert_eq!(store.all()[1].id, id);
    }

    #[test]
    fn double_save_never_duplicates() {
        let mut store = DraftStore::new();
        let d = draft("only");
        store.upsert(d.clone());
        store.upsert(d.clone());
        store.upsert(d);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_deletes_by_id() {
        let mut store = DraftStore::new();
        let d = draft("gone");
        let id = d.id;
        store.upsert(d);
        assert!(store.remove(id));
        assert!(store.is_empty());
        assert!(store.find_by_id(id).is_none());
    }

    #[test]
    fn remove_of_nonexistent_id_is_noop() {
        let mut store = DraftStore::new();
        store.upsert(draft("stays"));
        assert!(!store.remove(uuid::Uuid::new_v4()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn find_by_id_returns_the_matching_draft() {
        let mut store = DraftStore::new();
        let d = draft("target");
        let id = d.id;
        store.upsert(d);
        store.upsert(draft("other"));
        assert_eq!(store.find_by_id(id).unwrap().title, "target");
    }
}
