//! Draft collection and persistence.
//!
//! [`DraftStore`] is the authoritative in-memory collection the UI renders
//! from; [`SnapshotStore`] is the port to the key-value persistence layer
//! that holds the whole collection as one named entry.

pub mod snapshot;
pub mod store;

pub use snapshot::{JsonFileStore, SnapshotError, SnapshotStore};
pub use store::DraftStore;
