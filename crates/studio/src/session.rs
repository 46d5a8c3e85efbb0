//! Transient editing-session state.
//!
//! A [`Session`] is an explicit context object: current title/body/topic,
//! the ephemeral suggestion set, the generated-image reference, and one
//! in-progress flag per async operation kind.

use serde::Serialize;

use lumina_core::draft::DraftStatus;
use lumina_core::error::CoreError;
use lumina_core::suggestions::Suggestions;
use lumina_core::types::{DateStamp, DraftId};

// ---------------------------------------------------------------------------
// Operation kinds and state
// ---------------------------------------------------------------------------

/// The four async operations a session can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OpKind {
    GenerateDraft,
    SyncSuggestions,
    Refine,
    Illustrate,
}

impl OpKind {
    fn label(self) -> &'static str {
        match self {
            OpKind::GenerateDraft => "generate-draft",
            OpKind::SyncSuggestions => "sync-suggestions",
            OpKind::Refine => "refine",
            OpKind::Illustrate => "illustrate",
        }
    }
}

/// Per-operation state machine: `Idle -> Running -> Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpStatus {
    #[default]
    Idle,
    Running,
}

/// One flag per operation kind. Kinds are independent: different kinds may
/// run concurrently, but only one instance of a given kind at a time.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpStates {
    pub generate_draft: OpStatus,
    pub sync_suggestions: OpStatus,
    pub refine: OpStatus,
    pub illustrate: OpStatus,
}

impl OpStates {
    fn slot(&mut self, kind: OpKind) -> &mut OpStatus {
        match kind {
            OpKind::GenerateDraft => &mut self.generate_draft,
            OpKind::SyncSuggestions => &mut self.sync_suggestions,
            OpKind::Refine => &mut self.refine,
            OpKind::Illustrate => &mut self.illustrate,
        }
    }

    fn get(&self, kind: OpKind) -> OpStatus {
        match kind {
            OpKind::GenerateDraft => self.generate_draft,
            OpKind::SyncSuggestions => self.sync_suggestions,
            OpKind::Refine => self.refine,
            OpKind::Illustrate => self.illustrate,
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Identity of the stored draft a session is editing. `None` on the session
/// means a brand-new draft; these fields are reused verbatim at save time.
#[derive(Debug, Clone, Copy)]
pub struct EditingIdentity {
    pub id: DraftId,
    pub status: DraftStatus,
    pub created_at: DateStamp,
}

/// Transient state for one open draft in the studio.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Stored-draft identity when editing an existing draft.
    pub editing: Option<EditingIdentity>,
    pub title: String,
    pub body: String,
    /// Topic for "generate a draft about X".
    pub topic: String,
    /// Ephemeral suggestion set; replaced wholesale on each sync, discarded
    /// when the session's draft changes.
    pub suggestions: Suggestions,
    /// Data URI of the current generated illustration.
    pub generated_image: Option<String>,
    /// Classification of the most recent failed sync, if any. Sync failures
    /// never interrupt the user; this is for diagnostics only.
    pub last_sync_error: Option<String>,
    ops: OpStates,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current per-operation states.
    pub fn ops(&self) -> OpStates {
        self.ops
    }

    pub fn is_running(&self, kind: OpKind) -> bool {
        self.ops.get(kind) == OpStatus::Running
    }

    /// Mark `kind` as in-progress. Re-triggering a kind that is already
    /// running is a conflict; the UI is expected to disable the trigger.
    pub fn begin(&mut self, kind: OpKind) -> Result<(), CoreError> {
        let slot = self.ops.slot(kind);
        if *slot == OpStatus::Running {
            return Err(CoreError::Conflict(format!(
                "A {} operation is already in progress",
                kind.label()
            )));
        }
        *slot = OpStatus::Running;
        Ok(())
    }

    /// Return `kind` to idle. Called on both success and failure paths.
    pub fn finish(&mut self, kind: OpKind) {
        *self.ops.slot(kind) = OpStatus::Idle;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
