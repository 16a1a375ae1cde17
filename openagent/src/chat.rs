//! Chat domain types: response formats, per-call options, and replies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response format specification for chat completions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Plain text response.
    Text,
    /// JSON object response.
    JsonObject,
    /// JSON response with schema (structured outputs).
    JsonSchema {
        /// Schema definition.
        json_schema: JsonSchemaSpec,
    },
}

impl ResponseFormat {
    /// Creates a JSON object format.
    #[must_use]
    pub const fn json() -> Self {
        Self::JsonObject
    }

    /// Creates a JSON schema format.
    ///
    /// The schema is forwarded to the chat endpoint as-is; validation
    /// behavior is the endpoint's.
    #[must_use]
    pub fn json_schema(name: impl Into<String>, schema: Value) -> Self {
        Self::JsonSchema {
            json_schema: JsonSchemaSpec {
                name: name.into(),
                schema,
                strict: Some(true),
            },
        }
    }

    /// Whether this format requests structured (JSON) output.
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::JsonObject | Self::JsonSchema { .. })
    }
}

/// JSON schema specification for structured outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchemaSpec {
    /// Schema name.
    pub name: String,
    /// JSON Schema definition.
    pub schema: Value,
    /// Whether to enforce strict validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

/// Per-call options for a chat completion.
#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    /// Optional system instructions, sent before the user message.
    pub instructions: Option<String>,
    /// Optional response format (structured output).
    pub response_format: Option<ResponseFormat>,
}

impl ChatOptions {
    /// Creates empty options (plain text, no instructions).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the system instructions.
    #[must_use]
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Sets the response format.
    #[must_use]
    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }
}

/// The extracted content of a chat completion: plain text, or a JSON value
/// when a structured response format was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatReply {
    /// Plain text reply.
    Text(String),
    /// Structured JSON reply.
    Json(Value),
}

impl ChatReply {
    /// Get the text if this is a plain text reply.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Json(_) => None,
        }
    }

    /// Get the JSON value if this is a structured reply.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Consume the reply and return the text, rendering JSON if necessary.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Json(value) => value.to_string(),
        }
    }

    /// Deserialize a structured reply into a typed value.
    ///
    /// # Errors
    ///
    /// Returns a JSON error if the reply does not match the target type.
    pub fn parse<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        match self {
            Self::Json(value) => serde_json::from_value(value.clone()),
            Self::Text(text) => serde_json::from_str(text),
        }
    }
}

impl std::fmt::Display for ChatReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Json(value) => write!(f, "{value}"),
        }
    }
}
