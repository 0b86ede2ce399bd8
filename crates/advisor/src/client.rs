//! Gemini HTTP client.

use entities::Transaction;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::{
    build_prompt, AdvisorError, AdvisorResult, DEFAULT_BASE_URL, DEFAULT_MODEL,
    EMPTY_RESPONSE_MESSAGE, FAILURE_MESSAGE, MISSING_KEY_MESSAGE,
};

/// Advisor settings.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Gemini API key. Advice is unavailable without one.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

/// Client for spending advice.
#[derive(Debug, Clone)]
pub struct AdvisorClient {
    config: AdvisorConfig,
    http_client: reqwest::Client,
}

impl AdvisorClient {
    pub fn new(config: AdvisorConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Whether an API key is configured.
    pub fn is_configured(&self) -> bool {
        self.config
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    /// Returns advice for the given transactions, or a fallback message.
    pub async fn advise(&self, transactions: &[Transaction]) -> String {
        match self.generate(transactions).await {
            Ok(text) => text,
            Err(AdvisorError::MissingApiKey) => {
                error!("AI API key is missing from the configuration");
                MISSING_KEY_MESSAGE.to_string()
            }
            Err(AdvisorError::EmptyResponse) => {
                warn!("AI service returned no text");
                EMPTY_RESPONSE_MESSAGE.to_string()
            }
            Err(e) => {
                error!(error = %e, "AI advice request failed");
                FAILURE_MESSAGE.to_string()
            }
        }
    }

    /// Sends one `generateContent` request and returns the response text.
    pub async fn generate(&self, transactions: &[Transaction]) -> AdvisorResult<String> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(AdvisorError::MissingApiKey),
        };

        let prompt = build_prompt(transactions)?;
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: &prompt }],
            }],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );
        debug!(model = %self.config.model, transactions = transactions.len(), "Requesting advice");

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.text().ok_or(AdvisorError::EmptyResponse)
    }
}
