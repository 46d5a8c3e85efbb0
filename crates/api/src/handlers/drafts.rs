//! Library handlers: list, fetch, and delete drafts.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use lumina_core::draft::{Draft, DraftStatus};
use lumina_core::error::CoreError;
use lumina_core::types::DraftId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Optional status filter (`draft`, `published`, `generated`).
    pub status: Option<String>,
}

/// GET /api/v1/drafts
///
/// Full library listing, newest first, optionally filtered by status.
pub async fn list_drafts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params
        .status
        .as_deref()
        .map(DraftStatus::parse)
        .transpose()?;

    let drafts: Vec<Draft> = state
        .studio
        .drafts()
        .await
        .into_iter()
        .filter(|d| filter.map_or(true, |s| d.status == s))
        .collect();

    Ok(Json(DataResponse { data: drafts }))
}

/// GET /api/v1/drafts/{id}
pub async fn get_draft(
    State(state): State<AppState>,
    Path(id): Path<DraftId>,
) -> AppResult<impl IntoResponse> {
    let draft = state
        .studio
        .find_draft(id)
        .await
        .ok_or(CoreError::NotFound { entity: "Draft", id })?;

    Ok(Json(DataResponse { data: draft }))
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Whether a draft was actually removed. Deleting a nonexistent id is a
    /// no-op, not an error.
    pub removed: bool,
}

/// DELETE /api/v1/drafts/{id}
pub async fn delete_draft(
    State(state): State<AppState>,
    Path(id): Path<DraftId>,
) -> AppResult<impl IntoResponse> {
    let removed = state.studio.delete_draft(id).await?;

    Ok(Json(DataResponse {
        data: DeleteResponse { removed },
    }))
}
