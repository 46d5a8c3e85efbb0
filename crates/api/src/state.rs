use std::sync::Arc;

use lumina_studio::Studio;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// The studio does its own fine-grained locking; handlers call it directly
/// so a long generative call never queues unrelated requests.
#[derive(Clone)]
pub struct AppState {
    pub studio: Arc<Studio>,
    pub config: Arc<ServerConfig>,
}
