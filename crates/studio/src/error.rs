use lumina_core::error::CoreError;
use lumina_genai::GenAiError;
use lumina_store::SnapshotError;

/// Error from a studio operation.
///
/// Keeps the generative-service classification intact so callers can decide
/// user messaging per kind.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    /// Domain-level validation, conflict, or lookup failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Classified failure from the generative service.
    #[error(transparent)]
    GenAi(#[from] GenAiError),

    /// The draft snapshot could not be persisted.
    #[error("Persistence failed: {0}")]
    Snapshot(#[from] SnapshotError),
}
