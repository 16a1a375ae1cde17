//! Adapter configuration.

use std::fmt;

use crate::error::{ApiError, Result};

/// Configuration for the adapter: credential plus per-capability model names.
///
/// Immutable after construction. The API key is an opaque secret and is
/// redacted from the `Debug` output.
#[derive(Clone)]
pub struct AgentConfig {
    /// API key for authentication.
    pub api_key: String,
    /// Base URL for the API (defaults to OpenAI's API).
    pub base_url: String,
    /// Model used for chat, translation, captioning and classification.
    pub chat_model: String,
    /// Model used for audio transcription.
    pub transcribe_model: String,
    /// Model used for speech synthesis.
    pub speech_model: String,
    /// Model used for image generation.
    pub image_model: String,
    /// Model used for text embeddings.
    pub embedding_model: String,
    /// Optional organization ID.
    pub organization: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl AgentConfig {
    /// Default OpenAI API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    /// Default chat model.
    pub const DEFAULT_CHAT_MODEL: &'static str = "gpt-4o-mini";
    /// Default transcription model.
    pub const DEFAULT_TRANSCRIBE_MODEL: &'static str = "whisper-1";
    /// Default speech synthesis model.
    pub const DEFAULT_SPEECH_MODEL: &'static str = "tts-1";
    /// Default image generation model.
    pub const DEFAULT_IMAGE_MODEL: &'static str = "dall-e-3";
    /// Default embedding model.
    pub const DEFAULT_EMBEDDING_MODEL: &'static str = "text-embedding-3-small";

    /// Creates a new configuration with the given API key and default models.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
            chat_model: Self::DEFAULT_CHAT_MODEL.to_owned(),
            transcribe_model: Self::DEFAULT_TRANSCRIBE_MODEL.to_owned(),
            speech_model: Self::DEFAULT_SPEECH_MODEL.to_owned(),
            image_model: Self::DEFAULT_IMAGE_MODEL.to_owned(),
            embedding_model: Self::DEFAULT_EMBEDDING_MODEL.to_owned(),
            organization: None,
            timeout_secs: Some(120),
        }
    }

    /// Creates configuration from environment variables.
    ///
    /// Reads from:
    /// - `OPENAI_API_KEY` - Required API key
    /// - `OPENAI_BASE_URL` - Optional base URL
    /// - `OPENAI_CHAT_MODEL` - Optional chat model
    /// - `OPENAI_TRANSCRIBE_MODEL` - Optional transcription model
    /// - `OPENAI_SPEECH_MODEL` - Optional speech model
    /// - `OPENAI_IMAGE_MODEL` - Optional image generation model
    /// - `OPENAI_EMBEDDING_MODEL` - Optional embedding model
    /// - `OPENAI_ORGANIZATION` - Optional organization ID
    ///
    /// # Errors
    ///
    /// Returns an auth error if `OPENAI_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ApiError::auth("OPENAI_API_KEY environment variable not set"))?;

        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var("OPENAI_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(model) = std::env::var("OPENAI_CHAT_MODEL") {
            config.chat_model = model;
        }
        if let Ok(model) = std::env::var("OPENAI_TRANSCRIBE_MODEL") {
            config.transcribe_model = model;
        }
        if let Ok(model) = std::env::var("OPENAI_SPEECH_MODEL") {
            config.speech_model = model;
        }
        if let Ok(model) = std::env::var("OPENAI_IMAGE_MODEL") {
            config.image_model = model;
        }
        if let Ok(model) = std::env::var("OPENAI_EMBEDDING_MODEL") {
            config.embedding_model = model;
        }
        config.organization = std::env::var("OPENAI_ORGANIZATION").ok();

        Ok(config)
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the chat model.
    #[must_use]
    pub fn with_chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = model.into();
        self
    }

    /// Sets the transcription model.
    #[must_use]
    pub fn with_transcribe_model(mut self, model: impl Into<String>) -> Self {
        self.transcribe_model = model.into();
        self
    }

    /// Sets the speech synthesis model.
    #[must_use]
    pub fn with_speech_model(mut self, model: impl Into<String>) -> Self {
        self.speech_model = model.into();
        self
    }

    /// Sets the image generation model.
    #[must_use]
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    /// Sets the embedding model.
    #[must_use]
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }

    /// Sets the organization ID.
    #[must_use]
    pub fn with_organization(mut self, org: impl Into<String>) -> Self {
        self.organization = Some(org.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentConfig")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("chat_model", &self.chat_model)
            .field("transcribe_model", &self.transcribe_model)
            .field("speech_model", &self.speech_model)
            .field("image_model", &self.image_model)
            .field("embedding_model", &self.embedding_model)
            .field("organization", &self.organization)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
