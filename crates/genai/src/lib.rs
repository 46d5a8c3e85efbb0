//! Generative-service client library.
//!
//! Translates the studio's four high-level intents (analyze, draft,
//! refine, illustrate) into requests against the Google Generative
//! Language REST API, validates response shapes, and classifies
//! failures into a small error taxonomy.

pub mod client;
pub mod error;
pub mod service;
pub mod wire;

pub use client::{GeminiClient, GeminiConfig};
pub use error::GenAiError;
pub use service::{GeneratedDraft, GenerativeService};
