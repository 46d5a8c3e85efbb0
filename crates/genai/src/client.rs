//! HTTP client for the Gemini text and Imagen image models.
//!
//! Wraps the Generative Language REST API with [`reqwest`]: one
//! request/response exchange per operation, no retries. Failures come back
//! classified as [`GenAiError`] variants.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use lumina_core::suggestions::{self, Suggestions};

use crate::error::GenAiError;
use crate::service::{GeneratedDraft, GenerativeService};
use crate::wire;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Service endpoint base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for the three text operations.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";

/// Model used for image generation.
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-002";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API credential sent via the `x-goog-api-key` header.
    pub api_key: String,
    /// Base API URL (default: [`DEFAULT_BASE_URL`]).
    pub base_url: String,
    /// Text model name (default: [`DEFAULT_TEXT_MODEL`]).
    pub text_model: String,
    /// Image model name (default: [`DEFAULT_IMAGE_MODEL`]).
    pub image_model: String,
    /// Per-request timeout in seconds (default: `60`).
    pub request_timeout_secs: u64,
}

impl GeminiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                    |
    /// |------------------------------|----------------------------|
    /// | `GEMINI_API_KEY`             | *(empty — calls will fail with `AuthInvalid`)* |
    /// | `GEMINI_BASE_URL`            | production endpoint        |
    /// | `GEMINI_TEXT_MODEL`          | `gemini-2.0-flash`         |
    /// | `GEMINI_IMAGE_MODEL`         | `imagen-3.0-generate-002`  |
    /// | `GEMINI_REQUEST_TIMEOUT_SECS`| `60`                       |
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        let base_url =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let text_model =
            std::env::var("GEMINI_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.into());
        let image_model =
            std::env::var("GEMINI_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.into());
        let request_timeout_secs: u64 = std::env::var("GEMINI_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("GEMINI_REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            base_url,
            text_model,
            image_model,
            request_timeout_secs,
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for one generative-service endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a client from configuration. Builds a pooled [`reqwest::Client`]
    /// with the configured per-request timeout.
    pub fn new(config: GeminiConfig) -> Result<Self, GenAiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(http: reqwest::Client, config: GeminiConfig) -> Self {
        Self { http, config }
    }

    /// POST a model invocation and deserialize the successful JSON body.
    ///
    /// `action` is the API method suffix, e.g. `generateContent` or
    /// `predict`. Non-2xx responses are classified via
    /// [`wire::classify_http_failure`]; a body that fails to deserialize is
    /// a [`GenAiError::Validation`].
    async fn invoke_model<B, T>(&self, model: &str, action: &str, body: &B) -> Result<T, GenAiError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}/models/{}:{}", self.config.base_url, model, action);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let err = wire::classify_http_failure(status.as_u16(), &body_text);
            tracing::warn!(model, action, status = status.as_u16(), code = err.code(), "Generative call failed");
            return Err(err);
        }

        let body_text = response.text().await?;
        serde_json::from_str::<T>(&body_text).map_err(|e| {
            GenAiError::Validation(format!("Unexpected {action} response shape: {e}"))
        })
    }

    /// Run a text-model call and return the first candidate's text.
    async fn generate_text(&self, request: wire::GenerateContentRequest) -> Result<String, GenAiError> {
        let response: wire::GenerateContentResponse = self
            .invoke_model(&self.config.text_model, "generateContent", &request)
            .await?;
        wire::first_candidate_text(response)
    }
}

// ---------------------------------------------------------------------------
// Prompts
// ---------------------------------------------------------------------------

fn analyze_prompt(content: &str) -> String {
    format!(
        "Analyze this content and provide creative headlines, SEO keywords, \
         a brief summary, and general sentiment: \"{content}\""
    )
}

fn draft_prompt(topic: &str) -> String {
    format!(
        "Write a compelling, professional article draft about: \"{topic}\". \
         Format as JSON with \"title\" and \"body\" (markdown supported)."
    )
}

fn refine_prompt(text: &str, instruction: &str) -> String {
    format!("Refine this text: \"{text}\" according to: \"{instruction}\". Return only the refined text.")
}

fn illustrate_prompt(prompt: &str) -> String {
    format!("A high-quality professional illustration representing: {prompt}")
}

// ---------------------------------------------------------------------------
// GenerativeService implementation
// ---------------------------------------------------------------------------

#[async_trait]
impl GenerativeService for GeminiClient {
    async fn analyze(&self, content: &str) -> Result<Suggestions, GenAiError> {
        // Near-empty input never reaches the remote service.
        if suggestions::below_analyze_threshold(content) {
            return Ok(Suggestions::placeholder());
        }

        let request = wire::GenerateContentRequest::json(
            analyze_prompt(content),
            wire::suggestions_schema(),
        );
        let text = self.generate_text(request).await?;

        serde_json::from_str::<Suggestions>(&text).map_err(|e| {
            GenAiError::Validation(format!("Analysis result did not match schema: {e}"))
        })
    }

    async fn draft_from(&self, topic: &str) -> Result<GeneratedDraft, GenAiError> {
        let request =
            wire::GenerateContentRequest::json(draft_prompt(topic), wire::draft_schema());
        let text = self.generate_text(request).await?;

        serde_json::from_str::<GeneratedDraft>(&text).map_err(|e| {
            GenAiError::Validation(format!("Draft result did not match schema: {e}"))
        })
    }

    async fn refine(&self, text: &str, instruction: &str) -> Result<String, GenAiError> {
        let request = wire::GenerateContentRequest::text(refine_prompt(text, instruction));
        self.generate_text(request).await
    }

    async fn illustrate(&self, prompt: &str) -> Result<String, GenAiError> {
        let request = wire::PredictRequest::single_image(illustrate_prompt(prompt));
        let response: wire::PredictResponse = self
            .invoke_model(&self.config.image_model, "predict", &request)
            .await?;
        wire::first_image_data_uri(response)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
