//! Failure taxonomy for remote generative calls.
//!
//! Every remote invocation fails into exactly one variant. No retries are
//! attempted; the caller decides user messaging from the classification.

/// Classified failure from the generative service.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// The service signalled rate/usage-limit exhaustion.
    #[error("API quota exceeded")]
    QuotaExceeded,

    /// The service rejected the API credential (missing or invalid).
    #[error("API credential missing or invalid")]
    AuthInvalid,

    /// Transport failure or any other non-2xx status.
    #[error("Generative service unavailable: {0}")]
    Unavailable(String),

    /// The response did not conform to the expected structured shape.
    /// Folds into "unknown" for user messaging but stays distinct here.
    #[error("Response validation failed: {0}")]
    Validation(String),

    /// The image call succeeded but carried no image payload.
    #[error("Service response contained no image payload")]
    NoImageReturned,
}

impl GenAiError {
    /// Stable machine-readable code for logs and API error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            GenAiError::QuotaExceeded => "QUOTA_EXCEEDED",
            GenAiError::AuthInvalid => "AUTH_INVALID",
            GenAiError::Unavailable(_) => "SERVICE_UNAVAILABLE",
            GenAiError::Validation(_) => "SERVICE_UNAVAILABLE",
            GenAiError::NoImageReturned => "NO_IMAGE_RETURNED",
        }
    }
}

impl From<reqwest::Error> for GenAiError {
    fn from(err: reqwest::Error) -> Self {
        GenAiError::Unavailable(err.to_string())
    }
}
