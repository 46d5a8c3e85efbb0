//! HTTP surface for the Lumina studio.
//!
//! Routes between the library, the editing studio, and the static
//! analytics view; pure shell over [`lumina_studio::Studio`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod state;
