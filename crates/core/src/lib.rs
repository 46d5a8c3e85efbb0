//! Domain types for the Lumina content studio.
//!
//! Pure data and validation: drafts, suggestion sets, and the shared
//! error taxonomy. No I/O lives here.

pub mod draft;
pub mod error;
pub mod suggestions;
pub mod types;
