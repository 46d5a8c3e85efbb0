//! Persistence adapter: the whole draft collection as one named entry.
//!
//! The collection is read once at startup (absent entry means empty) and
//! overwritten wholesale after every mutation. Last write wins; there is a
//! single writer, so no partial-write recovery is needed beyond the
//! temp-file-and-rename below.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use lumina_core::draft::Draft;

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Port for loading and rewriting the persisted draft collection.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Load the persisted collection. An absent entry yields an empty
    /// collection, not an error.
    async fn load(&self) -> Result<Vec<Draft>, SnapshotError>;

    /// Overwrite the persisted collection with `drafts`.
    async fn save(&self, drafts: &[Draft]) -> Result<(), SnapshotError>;
}

// ---------------------------------------------------------------------------
// JSON file store
// ---------------------------------------------------------------------------

/// On-disk shape: a single named entry holding the draft array.
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    lumina_drafts: Vec<Draft>,
}

/// [`SnapshotStore`] backed by one JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Draft>, SnapshotError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No snapshot file, starting with an empty library");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let file: SnapshotFile = serde_json::from_str(&text)?;
        tracing::info!(
            path = %self.path.display(),
            drafts = file.lumina_drafts.len(),
            "Loaded draft snapshot",
        );
        Ok(file.lumina_drafts)
    }

    async fn save(&self, drafts: &[Draft]) -> Result<(), SnapshotError> {
        let file = SnapshotFile {
            lumina_drafts: drafts.to_vec(),
        };
        let text = serde_json::to_string_pretty(&file)?;

        // Write the full snapshot to a sibling temp file, then rename over
        // the real one so readers never observe a torn file.
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, text).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::debug!(path = %self.path.display(), drafts = drafts.len(), "Wrote draft snapshot");
        Ok(())
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
            body: "body".to_string(),
            status: DraftStatus::Draft,
            created_at: chrono::NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            tags: vec!["tag".to_string()],
            thumbnail: PLACEHOLDER_THUMBNAIL.to_string(),
            generated_image: None,
        }
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("drafts.json"));

        let drafts = vec![draft("one"), draft("two")];
        store.save(&drafts).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, drafts);
    }

    #[tokio::test]
    async fn save_rewrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("drafts.json"));

        store.save(&[draft("a"), draft("b")]).await.unwrap();
        store.save(&[draft("only")]).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "only");
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error_not_a_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drafts.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let store = JsonFileStore::new(path);
        assert!(matches!(store.load().await, Err(SnapshotError::Serde(_))));
    }
}
