//! The orchestrator: sequences user intents against the generative service
//! and the draft store.
//!
//! Error propagation policy:
//! - generate-draft, refine, and illustrate failures are returned to the
//!   caller with their classification; prior content stays untouched.
//! - suggestion-sync failures are logged and swallowed; they never
//!   interrupt the user.
//! - no failure is fatal; the session stays usable afterwards.
//!
//! Locking policy: the session and the store sit behind their own async
//! mutexes, and no lock is ever held across a generative call. Each
//! operation locks the session to mark its kind running and snapshot its
//! inputs, releases the lock for the remote call, then relocks to merge
//! the result. Different operation kinds can therefore be in flight at
//! once, and session reads stay responsive while one runs; re-triggering
//! a kind that is already running is a conflict. Lock order is session
//! before store everywhere.

use std::sync::Arc;

use tokio::sync::Mutex;

use lumina_core::draft::{self, Draft, DraftStatus};
use lumina_core::error::CoreError;
use lumina_core::types::DraftId;
use lumina_genai::GenerativeService;
use lumina_store::{DraftStore, SnapshotStore};

use crate::error::StudioError;
use crate::session::{EditingIdentity, OpKind, Session};

/// Number of leading body characters used as the illustration prompt when
/// the draft has no title.
const IMAGE_PROMPT_EXCERPT_CHARS: usize = 100;

/// One user's studio: the editing session, the draft library, and the
/// collaborators needed to act on them.
pub struct Studio {
    session: Mutex<Session>,
    store: Mutex<DraftStore>,
    service: Arc<dyn GenerativeService>,
    snapshot: Arc<dyn SnapshotStore>,
}

impl Studio {
    /// Build a studio over a pre-hydrated store. The store is loaded from
    /// the snapshot once at startup, not here.
    pub fn new(
        service: Arc<dyn GenerativeService>,
        snapshot: Arc<dyn SnapshotStore>,
        store: DraftStore,
    ) -> Self {
        Self {
            session: Mutex::new(Session::new()),
            store: Mutex::new(store),
            service,
            snapshot,
        }
    }

    /// Snapshot of the current session state.
    pub async fn session(&self) -> Session {
        self.session.lock().await.clone()
    }

    /// All drafts in the library, newest first.
    pub async fn drafts(&self) -> Vec<Draft> {
        self.store.lock().await.all().to_vec()
    }

    pub async fn find_draft(&self, id: DraftId) -> Option<Draft> {
        self.store.lock().await.find_by_id(id).cloned()
    }

    // -----------------------------------------------------------------------
    // Session lifecycle
    // -----------------------------------------------------------------------

    /// Open the studio for a brand-new draft: every field reset.
    pub async fn open_new(&self) {
        *self.session.lock().await = Session::new();
    }

    /// Open the studio for an existing draft: fields hydrated from the
    /// stored record, suggestions reset (they are never persisted).
    pub async fn open_existing(&self, id: DraftId) -> Result<(), StudioError> {
        let mut session = self.session.lock().await;
        let store = self.store.lock().await;
        let found = store
            .find_by_id(id)
            .ok_or(CoreError::NotFound { entity: "Draft", id })?;

        let mut fresh = Session::new();
        fresh.editing = Some(EditingIdentity {
            id: found.id,
            status: found.status,
            created_at: found.created_at,
        });
        fresh.title = found.title.clone();
        fresh.body = found.body.clone();
        fresh.generated_image = found.generated_image.clone();
        *session = fresh;
        Ok(())
    }

    /// Apply keystroke-level edits from the UI.
    pub async fn edit_fields(
        &self,
        title: Option<String>,
        body: Option<String>,
        topic: Option<String>,
    ) {
        let mut session = self.session.lock().await;
        if let Some(title) = title {
            session.title = title;
        }
        if let Some(body) = body {
            session.body = body;
        }
        if let Some(topic) = topic {
            session.topic = topic;
        }
    }

    // -----------------------------------------------------------------------
    // Generative operations
    // -----------------------------------------------------------------------

    /// Generate a full draft from the session topic, then sync suggestions
    /// against the new body.
    ///
    /// On failure the existing title and body are untouched and the
    /// classified error is returned for user messaging.
    pub async fn generate_draft(&self) -> Result<(), StudioError> {
        let topic = {
            let mut session = self.session.lock().await;
            let topic = session.topic.trim().to_string();
            if topic.is_empty() {
                return Err(
                    CoreError::Validation("A topic is required to generate a draft".into()).into(),
                );
            }
            session.begin(OpKind::GenerateDraft)?;
            topic
        };

        let result = self.service.draft_from(&topic).await;

        let body = {
            let mut session = self.session.lock().await;
            session.finish(OpKind::GenerateDraft);
            let generated = result?;
            tracing::info!(topic = %topic, title = %generated.title, "Generated draft");
            session.title = generated.title;
            session.body = generated.body.clone();
            generated.body
        };

        // The fresh body immediately drives a suggestion sync.
        self.sync_suggestions(Some(&body)).await
    }

    /// Regenerate the suggestion set from `override_text` or the current
    /// body.
    ///
    /// Failures are non-fatal by design: the previous suggestions are kept,
    /// the classification is logged, and `Ok` is returned. Empty text is a
    /// silent no-op.
    pub async fn sync_suggestions(&self, override_text: Option<&str>) -> Result<(), StudioError> {
        let text = {
            let mut session = self.session.lock().await;
            let text = match override_text {
                Some(text) => text.to_string(),
                None => session.body.clone(),
            };
            if text.is_empty() {
                return Ok(());
            }
            session.begin(OpKind::SyncSuggestions)?;
            text
        };

        let result = self.service.analyze(&text).await;

        let mut session = self.session.lock().await;
        session.finish(OpKind::SyncSuggestions);
        match result {
            Ok(suggestions) => {
                session.suggestions = suggestions;
                session.last_sync_error = None;
            }
            Err(e) => {
                tracing::warn!(code = e.code(), error = %e, "Suggestion sync failed; keeping previous suggestions");
                session.last_sync_error = Some(e.to_string());
            }
        }
        Ok(())
    }

    /// Rewrite the body according to a user-supplied instruction.
    ///
    /// On any failure the body is left byte-identical — refinement must
    /// never destroy existing content.
    pub async fn refine(&self, instruction: &str) -> Result<(), StudioError> {
        let body = {
            let mut session = self.session.lock().await;
            if instruction.trim().is_empty() {
                return Err(
                    CoreError::Validation("A refine instruction is required".into()).into(),
                );
            }
            if session.body.is_empty() {
                return Err(CoreError::Validation("There is no text to refine".into()).into());
            }
            session.begin(OpKind::Refine)?;
            session.body.clone()
        };

        let result = self.service.refine(&body, instruction).await;

        let mut session = self.session.lock().await;
        session.finish(OpKind::Refine);
        session.body = result?;
        Ok(())
    }

    /// Generate an illustration for the current draft, overwriting any
    /// previous one. Prompted by the title, or the leading body excerpt
    /// when there is no title.
    pub async fn generate_image(&self) -> Result<(), StudioError> {
        let prompt = {
            let mut session = self.session.lock().await;
            let prompt = if !session.title.is_empty() {
                session.title.clone()
            } else if !session.body.is_empty() {
                session.body.chars().take(IMAGE_PROMPT_EXCERPT_CHARS).collect()
            } else {
                return Err(CoreError::Validation(
                    "A title or some body text is required to generate an image".into(),
                )
                .into());
            };
            session.begin(OpKind::Illustrate)?;
            prompt
        };

        let result = self.service.illustrate(&prompt).await;

        let mut session = self.session.lock().await;
        session.finish(OpKind::Illustrate);
        session.generated_image = Some(result?);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Library mutations
    // -----------------------------------------------------------------------

    /// Build a draft record from the session, upsert it into the store, and
    /// rewrite the persisted snapshot.
    ///
    /// Identity rules: editing an existing draft reuses its id, status, and
    /// creation date; a new draft gets a fresh id, `draft` status, and
    /// today's date.
    pub async fn save(&self) -> Result<Draft, StudioError> {
        let mut session = self.session.lock().await;
        let identity = session.editing.unwrap_or_else(|| EditingIdentity {
            id: uuid::Uuid::new_v4(),
            status: DraftStatus::default(),
            created_at: chrono::Utc::now().date_naive(),
        });

        let record = Draft {
            id: identity.id,
            title: draft::effective_title(&session.title),
            body: session.body.clone(),
            status: identity.status,
            created_at: identity.created_at,
            tags: session.suggestions.keywords.clone(),
            thumbnail: draft::effective_thumbnail(session.generated_image.as_deref()),
            generated_image: session.generated_image.clone(),
        };

        // The snapshot write stays under the store lock so rewrites land in
        // upsert order.
        let mut store = self.store.lock().await;
        store.upsert(record.clone());
        self.snapshot.save(store.all()).await?;
        session.editing = Some(identity);

        tracing::info!(id = %record.id, title = %record.title, "Saved draft to library");
        Ok(record)
    }

    /// Delete a draft by id. A nonexistent id is a no-op that leaves the
    /// snapshot untouched. Returns whether a draft was removed.
    pub async fn delete_draft(&self, id: DraftId) -> Result<bool, StudioError> {
        let mut store = self.store.lock().await;
        let removed = store.remove(id);
        if removed {
            self.snapshot.save(store.all()).await?;
            tracing::info!(%id, "Deleted draft");
        }
        Ok(removed)
    }
}
