//! Adapter construction and shared HTTP plumbing.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::config::AgentConfig;
use crate::error::{ApiError, Result};
use crate::message::{Content, ContentPart, Message};

use super::types::{ApiContent, ApiContentPart, ApiErrorResponse, ApiImageUrl, ApiMessage};

/// The adapter: one method per vendor capability, each forwarding exactly
/// one request/response cycle to an OpenAI-compatible API.
///
/// Holds an immutable [`AgentConfig`] and a shared HTTP client; cloning is
/// cheap and the adapter is safe for concurrent use.
///
/// # Example
///
/// ```rust,ignore
/// use openagent::{Agent, AgentConfig};
///
/// let agent = Agent::new(AgentConfig::new(api_key))?;
/// let reply = agent.chat("Say hello.").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Agent {
    pub(crate) config: Arc<AgentConfig>,
    pub(crate) client: Client,
}

impl Agent {
    /// Create a new adapter with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an auth error if the API key is empty, or an internal error
    /// if the HTTP client cannot be constructed.
    pub fn new(config: AgentConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(ApiError::auth("API key is required").into());
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder
            .build()
            .map_err(|e| ApiError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    /// Create an adapter from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an auth error if `OPENAI_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::new(AgentConfig::from_env()?)
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Build the chat completions URL.
    pub(crate) fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Build the audio speech URL.
    pub(crate) fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.config.base_url)
    }

    /// Build the audio transcriptions URL.
    pub(crate) fn transcriptions_url(&self) -> String {
        format!("{}/audio/transcriptions", self.config.base_url)
    }

    /// Build the embeddings URL.
    pub(crate) fn embeddings_url(&self) -> String {
        format!("{}/embeddings", self.config.base_url)
    }

    /// Build the image generations URL.
    pub(crate) fn images_url(&self) -> String {
        format!("{}/images/generations", self.config.base_url)
    }

    /// Build request headers for JSON requests.
    pub(crate) fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json");

        if let Some(org) = &self.config.organization {
            req = req.header("OpenAI-Organization", org);
        }

        req
    }

    /// Build request headers for multipart requests.
    pub(crate) fn build_multipart_request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.config.api_key));

        if let Some(org) = &self.config.organization {
            req = req.header("OpenAI-Organization", org);
        }

        req
    }

    /// Convert a domain message to the wire format.
    pub(crate) fn convert_message(msg: &Message) -> ApiMessage {
        let content = match &msg.content {
            Content::Text(text) => ApiContent::Text(text.clone()),
            Content::Parts(parts) => ApiContent::Array(
                parts
                    .iter()
                    .map(|part| match part {
                        ContentPart::Text { text } => ApiContentPart::Text { text: text.clone() },
                        ContentPart::ImageUrl { image_url } => ApiContentPart::ImageUrl {
                            image_url: ApiImageUrl {
                                url: image_url.url.clone(),
                                detail: image_url.detail.clone(),
                            },
                        },
                    })
                    .collect(),
            ),
        };

        ApiMessage {
            role: msg.role.as_str().to_owned(),
            content,
        }
    }

    /// Parse an error response from the provider.
    pub(crate) fn parse_error(status: u16, body: &str) -> ApiError {
        if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(body) {
            let error = error_response.error;
            let code = error.code.unwrap_or_else(|| error.error_type.clone());

            return match status {
                401 | 403 => ApiError::auth(error.message),
                429 => ApiError::rate_limited(),
                400 => ApiError::invalid_request(error.message),
                _ => ApiError::provider_code(code, error.message),
            };
        }

        ApiError::http_status(status, body.to_owned())
    }
}
