//! Studio handlers: session lifecycle and the four generative operations.
//!
//! Handlers never hold a lock of their own; [`lumina_studio::Studio`] locks
//! its session only around state transitions, so a slow generative call
//! leaves the rest of the surface responsive and the per-operation
//! `running` flags observable.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use lumina_core::draft::Draft;
use lumina_core::suggestions::Suggestions;
use lumina_core::types::DraftId;
use lumina_studio::session::OpStates;
use lumina_studio::Session;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Session view
// ---------------------------------------------------------------------------

/// Serializable snapshot of the editing session for the UI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// Id of the stored draft being edited, if any.
    pub editing_id: Option<DraftId>,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub suggestions: Suggestions,
    pub generated_image: Option<String>,
    /// Per-operation in-progress states; the UI disables re-trigger while
    /// an operation kind is running.
    pub ops: OpStates,
    pub last_sync_error: Option<String>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        SessionView {
            editing_id: session.editing.map(|e| e.id),
            title: session.title.clone(),
            body: session.body.clone(),
            topic: session.topic.clone(),
            suggestions: session.suggestions.clone(),
            generated_image: session.generated_image.clone(),
            ops: session.ops(),
            last_sync_error: session.last_sync_error.clone(),
        }
    }
}

async fn current_view(state: &AppState) -> Json<DataResponse<SessionView>> {
    let session = state.studio.session().await;
    Json(DataResponse {
        data: SessionView::from(&session),
    })
}

/// GET /api/v1/studio
pub async fn session_view(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(current_view(&state).await)
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenRequest {
    /// Open an existing draft when present, a blank session otherwise.
    pub draft_id: Option<DraftId>,
}

/// POST /api/v1/studio/open
pub async fn open(
    State(state): State<AppState>,
    Json(input): Json<OpenRequest>,
) -> AppResult<impl IntoResponse> {
    match input.draft_id {
        Some(id) => state.studio.open_existing(id).await?,
        None => state.studio.open_new().await,
    }
    Ok(current_view(&state).await)
}

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub topic: Option<String>,
}

/// POST /api/v1/studio/edit
///
/// Keystroke-level field updates from the editor.
pub async fn edit(
    State(state): State<AppState>,
    Json(input): Json<EditRequest>,
) -> AppResult<impl IntoResponse> {
    state.studio.edit_fields(input.title, input.body, input.topic).await;
    Ok(current_view(&state).await)
}

// ---------------------------------------------------------------------------
// Generative operations
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Topic override; when present it replaces the session topic first.
    pub topic: Option<String>,
}

/// POST /api/v1/studio/generate
pub async fn generate(
    State(state): State<AppState>,
    Json(input): Json<GenerateRequest>,
) -> AppResult<impl IntoResponse> {
    if let Some(topic) = input.topic {
        state.studio.edit_fields(None, None, Some(topic)).await;
    }
    state.studio.generate_draft().await?;
    Ok(current_view(&state).await)
}

#[derive(Debug, Deserialize)]
pub struct SyncRequest {
    /// Explicit text to analyze instead of the current body.
    pub text: Option<String>,
}

/// POST /api/v1/studio/sync
pub async fn sync(
    State(state): State<AppState>,
    Json(input): Json<SyncRequest>,
) -> AppResult<impl IntoResponse> {
    state.studio.sync_suggestions(input.text.as_deref()).await?;
    Ok(current_view(&state).await)
}

#[derive(Debug, Deserialize)]
pub struct RefineRequest {
    pub instruction: String,
}

/// POST /api/v1/studio/refine
pub async fn refine(
    State(state): State<AppState>,
    Json(input): Json<RefineRequest>,
) -> AppResult<impl IntoResponse> {
    state.studio.refine(&input.instruction).await?;
    Ok(current_view(&state).await)
}

/// POST /api/v1/studio/illustrate
pub async fn illustrate(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.studio.generate_image().await?;
    Ok(current_view(&state).await)
}

/// POST /api/v1/studio/save
pub async fn save(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let saved: Draft = state.studio.save().await?;
    Ok(Json(DataResponse { data: saved }))
}
