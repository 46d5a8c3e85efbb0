//! Route handlers, grouped by view.

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub mod analytics;
pub mod drafts;
pub mod health;
pub mod studio;

/// All `/api/v1` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Library
        .route("/drafts", get(drafts::list_drafts))
        .route(
            "/drafts/{id}",
            get(drafts::get_draft).delete(drafts::delete_draft),
        )
        // Studio
        .route("/studio", get(studio::session_view))
        .route("/studio/open", post(studio::open))
        .route("/studio/edit", post(studio::edit))
        .route("/studio/generate", post(studio::generate))
        .route("/studio/sync", post(studio::sync))
        .route("/studio/refine", post(studio::refine))
        .route("/studio/illustrate", post(studio::illustrate))
        .route("/studio/save", post(studio::save))
        // Analytics (static sample data)
        .route("/analytics", get(analytics::overview))
}
