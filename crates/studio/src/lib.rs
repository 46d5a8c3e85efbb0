//! Studio orchestration.
//!
//! Owns one editing session's transient state and sequences calls to the
//! generative service and the draft store. All mutation happens through
//! [`Studio`] methods; there is no ambient state.

pub mod error;
pub mod orchestrator;
pub mod session;

pub use error::StudioError;
pub use orchestrator::Studio;
pub use session::{OpKind, OpStatus, Session};
