//! Wire shapes for the Generative Language REST API.
//!
//! Request/response types for `models/{model}:generateContent` (text) and
//! `models/{model}:predict` (Imagen), plus the helpers that validate
//! response shape and classify HTTP failures. Everything here is pure and
//! unit-testable without a network.

use serde::{Deserialize, Serialize};

use crate::error::GenAiError;

// ---------------------------------------------------------------------------
// generateContent request
// ---------------------------------------------------------------------------

/// Body of a `:generateContent` request.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

/// Structured-output settings: ask the model for JSON conforming to a
/// declared schema.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

impl GenerateContentRequest {
    /// Plain-text request: one user turn, no structured output.
    pub fn text(prompt: String) -> Self {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: None,
        }
    }

    /// Structured-output request: one user turn, JSON response conforming
    /// to `schema`.
    pub fn json(prompt: String, schema: serde_json::Value) -> Self {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            }),
        }
    }
}

/// Response schema for content analysis: headlines/keywords arrays plus
/// summary and sentiment strings, all required.
pub fn suggestions_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "headlines": { "type": "ARRAY", "items": { "type": "STRING" } },
            "keywords":  { "type": "ARRAY", "items": { "type": "STRING" } },
            "summary":   { "type": "STRING" },
            "sentiment": { "type": "STRING" }
        },
        "required": ["headlines", "keywords", "summary", "sentiment"]
    })
}

/// Response schema for draft generation: title and body strings, required.
pub fn draft_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "body":  { "type": "STRING" }
        },
        "required": ["title", "body"]
    })
}

// ---------------------------------------------------------------------------
// generateContent response
// ---------------------------------------------------------------------------

/// Body of a `:generateContent` response. Only the fields we consume.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

/// Extract the text of the first candidate, validating shape along the way.
///
/// A response with no candidates, no content, or no non-empty text part is
/// a [`GenAiError::Validation`] failure, never silently passed through.
pub fn first_candidate_text(response: GenerateContentResponse) -> Result<String, GenAiError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .unwrap_or_default();

    if text.is_empty() {
        return Err(GenAiError::Validation(
            "generateContent response contained no candidate text".to_string(),
        ));
    }
    Ok(text)
}

// ---------------------------------------------------------------------------
// Imagen predict
// ---------------------------------------------------------------------------

/// Body of an Imagen `:predict` request.
#[derive(Debug, Serialize)]
pub struct PredictRequest {
    pub instances: Vec<PredictInstance>,
    pub parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
pub struct PredictInstance {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    pub sample_count: u32,
    pub aspect_ratio: String,
    pub output_mime_type: String,
}

impl PredictRequest {
    /// One 1:1 JPEG image for `prompt`.
    pub fn single_image(prompt: String) -> Self {
        PredictRequest {
            instances: vec![PredictInstance { prompt }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: "1:1".to_string(),
                output_mime_type: "image/jpeg".to_string(),
            },
        }
    }
}

/// Body of an Imagen `:predict` response.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub bytes_base64_encoded: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Extract the first generated image as a `data:` URI.
///
/// An empty predictions array or a prediction without image bytes fails
/// with [`GenAiError::NoImageReturned`], not a generic error.
pub fn first_image_data_uri(response: PredictResponse) -> Result<String, GenAiError> {
    let prediction = response
        .predictions
        .into_iter()
        .next()
        .ok_or(GenAiError::NoImageReturned)?;

    match prediction.bytes_base64_encoded {
        Some(bytes) if !bytes.is_empty() => {
            let mime = prediction.mime_type.unwrap_or_else(|| "image/jpeg".to_string());
            Ok(format!("data:{mime};base64,{bytes}"))
        }
        _ => Err(GenAiError::NoImageReturned),
    }
}

// ---------------------------------------------------------------------------
// Failure classification
// ---------------------------------------------------------------------------

/// Error envelope the API returns on non-2xx statuses. Only the fields we
/// classify on.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    status: Option<String>,
}

/// Classify a non-2xx HTTP response into the error taxonomy.
///
/// - 429, or a `RESOURCE_EXHAUSTED` status in the error body, is
///   [`GenAiError::QuotaExceeded`].
/// - 401/403 is [`GenAiError::AuthInvalid`].
/// - Anything else is [`GenAiError::Unavailable`].
pub fn classify_http_failure(status: u16, body: &str) -> GenAiError {
    if status == 429 {
        return GenAiError::QuotaExceeded;
    }
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        if let Some(detail) = envelope.error {
            if detail.status.as_deref() == Some("RESOURCE_EXHAUSTED") {
                return GenAiError::QuotaExceeded;
            }
        }
    }
    match status {
        401 | 403 => GenAiError::AuthInvalid,
        _ => GenAiError::Unavailable(format!("HTTP {status}: {body}")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
