//! Gemini API client module
//!
//! Sends a single-text prompt to `generateContent` and extracts the first
//! candidate's text.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::BotError;

pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Text generation used by the reply workflow.
#[async_trait]
pub trait CompletionApi: Send + Sync {
    /// Returns the first candidate's text, or `None` when the response has none.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, BotError>;
}

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestContent<'a> {
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart<'a> {
    pub text: &'a str,
}

/// The subset of a `generateContent` response the bot reads.
///
/// Every level is optional so that blocked or truncated responses still parse.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    pub parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

/// Picks `candidates[0].content.parts[0].text`, ignoring empty strings.
#[must_use]
pub fn extract_candidate_text(response: &GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .as_ref()?
        .first()?
        .content
        .as_ref()?
        .parts
        .as_ref()?
        .first()?
        .text
        .clone()
        .filter(|s| !s.is_empty())
}

#[must_use]
pub fn build_request_body(prompt: &str) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        contents: vec![RequestContent {
            parts: vec![RequestPart { text: prompt }],
        }],
    }
}

/// Gemini `generateContent` client authenticated with an API key.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    base_url: String,
    model_name: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: String, base_url: &str) -> Result<Self, BotError> {
        let http = Client::builder().build().map_err(|e| {
            BotError::HttpError(format!("Failed to build Gemini HTTP client: {e}"))
        })?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model_name: GEMINI_MODEL.to_string(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model_name)
    }
}

#[async_trait]
impl CompletionApi for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, BotError> {
        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model = %self.model_name,
            prompt_chars = prompt.chars().count(),
            "Requesting Gemini completion"
        );

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&build_request_body(prompt))
            .send()
            .await
            .map_err(|e| BotError::HttpError(format!("Gemini API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(BotError::GeminiError(error_text));
        }

        let response_json: GenerateContentResponse = response.json().await.map_err(|e| {
            BotError::GeminiError(format!("Failed to parse Gemini response: {e}"))
        })?;

        Ok(extract_candidate_text(&response_json))
    }
}
