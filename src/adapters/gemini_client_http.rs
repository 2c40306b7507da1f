//! Gemini API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{
    API_KEY_ENV_VARS, AppError, GeminiApiConfig, GenerationError, GenerationRequest, MODEL,
    ProviderError,
};
use crate::ports::PromptGenerator;

const X_GOOG_API_KEY: &str = "x-goog-api-key";

/// HTTP client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: Option<String>,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a client. A missing key is accepted here and reported by `generate`.
    pub fn new(api_key: Option<String>, config: &GeminiApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, endpoint: endpoint_for(&config.api_url, MODEL)?, client })
    }

    /// Create with the key taken from the process environment.
    pub fn from_env(config: &GeminiApiConfig) -> Result<Self, AppError> {
        Self::new(resolve_api_key(|name| std::env::var(name).ok()), config)
    }
}

/// First non-empty value among [`API_KEY_ENV_VARS`].
pub fn resolve_api_key<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    API_KEY_ENV_VARS.into_iter().filter_map(lookup).find(|value| !value.trim().is_empty())
}

fn endpoint_for(api_url: &Url, model: &str) -> Result<Url, AppError> {
    let base = api_url.as_str().trim_end_matches('/');
    let raw = format!("{}/models/{}:generateContent", base, model);
    Url::parse(&raw)
        .map_err(|e| AppError::Configuration(format!("Invalid API endpoint '{}': {}", raw, e)))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    system_instruction: ApiContent<'a>,
    contents: Vec<ApiContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct ApiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<ApiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct ApiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

impl<'a> From<&'a GenerationRequest> for ApiRequest<'a> {
    fn from(request: &'a GenerationRequest) -> Self {
        Self {
            system_instruction: ApiContent {
                role: None,
                parts: vec![ApiPart { text: request.system_instruction.as_str() }],
            },
            contents: vec![ApiContent {
                role: Some("user"),
                parts: vec![ApiPart { text: &request.contents }],
            }],
            generation_config: GenerationConfig { temperature: request.temperature },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
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
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: Option<bool>,
}

impl ApiResponse {
    /// Text of the first candidate, skipping thought parts. `None` when empty.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter(|part| part.thought != Some(true))
            .filter_map(|part| part.text)
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message.unwrap_or_else(|| "Unknown error".to_string()),
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

impl PromptGenerator for HttpGeminiClient {
    fn generate(&self, user_input: &str) -> Result<String, GenerationError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingCredential)?;
        let request = GenerationRequest::for_input(user_input)?;
        let body = ApiRequest::from(&request);

        log::debug!(
            "POST {} (model={}, temperature={}, input={} chars)",
            self.endpoint,
            request.model,
            request.temperature,
            request.contents.chars().count()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(ProviderError::from_status(status.as_u16(), error_message(&text)).into());
        }

        let api_response: ApiResponse =
            response.json().map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        api_response.text().ok_or(GenerationError::EmptyResponse)
    }
}
