//! Wire-format request and response types.
//!
//! These types map directly to the OpenAI-compatible HTTP API and are
//! internal to the adapter; the public surface uses the domain types in
//! [`crate::message`], [`crate::chat`], [`crate::audio`] and friends.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chat::ResponseFormat;

/// Chat completion request body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiChatRequest {
    pub model: String,
    pub messages: Vec<ApiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ApiResponseFormat>,
}

/// Wire message format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub role: String,
    pub content: ApiContent,
}

/// Wire message content variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiContent {
    Text(String),
    Array(Vec<ApiContentPart>),
}

/// Wire content part.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApiContentPart {
    Text { text: String },
    ImageUrl { image_url: ApiImageUrl },
}

/// Wire image URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiImageUrl {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Wire response format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApiResponseFormat {
    Text,
    JsonObject,
    JsonSchema { json_schema: Value },
}

impl ApiResponseFormat {
    /// Creates from the domain response format.
    pub fn from_response_format(format: &ResponseFormat) -> Self {
        match format {
            ResponseFormat::Text => Self::Text,
            ResponseFormat::JsonObject => Self::JsonObject,
            ResponseFormat::JsonSchema { json_schema } => Self::JsonSchema {
                json_schema: serde_json::json!({
                    "name": json_schema.name,
                    "schema": json_schema.schema,
                    "strict": json_schema.strict,
                }),
            },
        }
    }
}

/// Chat completion response body.
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
pub struct ApiChatResponse {
    pub id: Option<String>,
    pub model: Option<String>,
    pub choices: Vec<ApiChoice>,
    #[serde(default)]
    pub usage: Option<ApiUsage>,
}

/// Chat response choice.
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
pub struct ApiChoice {
    pub index: usize,
    pub message: ApiResponseMessage,
    pub finish_reason: Option<String>,
}

/// Chat response message.
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
pub struct ApiResponseMessage {
    pub role: String,
    pub content: Option<String>,
    #[serde(default)]
    pub refusal: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[allow(dead_code)]
pub struct ApiUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Provider error response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Provider error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
    pub code: Option<String>,
}

/// Embedding request body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiEmbeddingRequest {
    pub model: String,
    pub input: Vec<String>,
}

/// A single embedding in the response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEmbeddingData {
    pub embedding: Vec<f32>,
    pub index: usize,
}

/// Embedding response body.
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
pub struct ApiEmbeddingResponse {
    pub data: Vec<ApiEmbeddingData>,
    pub model: Option<String>,
}

/// Speech synthesis request body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiSpeechRequest {
    pub model: String,
    pub input: String,
    pub voice: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Transcription response body (verbose JSON format).
#[derive(Debug, Clone, Deserialize)]
pub struct ApiTranscriptionResponse {
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub duration: Option<f32>,
}

/// Image generation request body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiImageRequest {
    pub model: String,
    pub prompt: String,
    pub n: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// A single generated image in the response.
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
pub struct ApiImageData {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub b64_json: Option<String>,
    #[serde(default)]
    pub revised_prompt: Option<String>,
}

/// Image generation response body.
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
pub struct ApiImageResponse {
    #[serde(default)]
    pub created: Option<u64>,
    pub data: Vec<ApiImageData>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    mod chat {
        use super::*;

        #[test]
        fn request_serializes_plain_text_message() {
            let req = ApiChatRequest {
                model: "gpt-4o-mini".to_owned(),
                messages: vec![ApiMessage {
                    role: "user".to_owned(),
                    content: ApiContent::Text("Hello".to_owned()),
                }],
                response_format: None,
            };

            let json: Value = serde_json::to_value(&req).unwrap();

            assert_eq!(json["model"], "gpt-4o-mini");
            assert_eq!(json["messages"][0]["role"], "user");
            assert_eq!(json["messages"][0]["content"], "Hello");
            assert!(json.get("response_format").is_none());
        }

        #[test]
        fn request_serializes_multimodal_parts() {
            let req = ApiChatRequest {
                model: "gpt-4o-mini".to_owned(),
                messages: vec![ApiMessage {
                    role: "user".to_owned(),
                    content: ApiContent::Array(vec![
                        ApiContentPart::Text {
                            text: "what is this?".to_owned(),
                        },
                        ApiContentPart::ImageUrl {
                            image_url: ApiImageUrl {
                                url: "data:image/png;base64,AQID".to_owned(),
                                detail: None,
                            },
                        },
                    ]),
                }],
                response_format: None,
            };

            let json: Value = serde_json::to_value(&req).unwrap();
            let content = json["messages"][0]["content"].as_array().unwrap();

            assert_eq!(content.len(), 2);
            assert_eq!(content[0]["type"], "text");
            assert_eq!(content[1]["type"], "image_url");
            assert!(
                content[1]["image_url"]["url"]
                    .as_str()
                    .unwrap()
                    .starts_with("data:image/png;base64,")
            );
        }

        #[test]
        fn response_deserialization() {
            let json = r#"{
                "id": "chatcmpl-123",
                "object": "chat.completion",
                "created": 1677858242,
                "model": "gpt-4o-mini",
                "choices": [{
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": "Hello!"
                    },
                    "finish_reason": "stop"
                }],
                "usage": {
                    "prompt_tokens": 10,
                    "completion_tokens": 5,
                    "total_tokens": 15
                }
            }"#;

            let response: ApiChatResponse = serde_json::from_str(json).unwrap();
            assert_eq!(response.model.as_deref(), Some("gpt-4o-mini"));
            assert_eq!(response.choices.len(), 1);
            assert_eq!(
                response.choices[0].message.content.as_deref(),
                Some("Hello!")
            );
            assert_eq!(response.usage.unwrap().total_tokens, 15);
        }

        #[test]
        fn response_tolerates_missing_optional_fields() {
            let json = r#"{
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": null},
                    "finish_reason": null
                }]
            }"#;

            let response: ApiChatResponse = serde_json::from_str(json).unwrap();
            assert!(response.choices[0].message.content.is_none());
            assert!(response.usage.is_none());
        }
    }

    mod response_format {
        use super::*;

        #[test]
        fn from_json_schema_wraps_spec() {
            let format = ResponseFormat::json_schema("Label", json!({"type": "object"}));
            let wire = ApiResponseFormat::from_response_format(&format);

            let json: Value = serde_json::to_value(&wire).unwrap();
            assert_eq!(json["type"], "json_schema");
            assert_eq!(json["json_schema"]["name"], "Label");
            assert_eq!(json["json_schema"]["strict"], true);
        }

        #[test]
        fn from_json_object() {
            let wire = ApiResponseFormat::from_response_format(&ResponseFormat::JsonObject);
            let json: Value = serde_json::to_value(&wire).unwrap();
            assert_eq!(json["type"], "json_object");
        }
    }

    mod error_response {
        use super::*;

        #[test]
        fn deserializes_provider_error() {
            let json = r#"{
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": "invalid_api_key"
                }
            }"#;

            let parsed: ApiErrorResponse = serde_json::from_str(json).unwrap();
            assert_eq!(parsed.error.error_type, "invalid_request_error");
            assert_eq!(parsed.error.code.as_deref(), Some("invalid_api_key"));
        }
    }

    mod embedding {
        use super::*;

        #[test]
        fn request_serializes_input_array() {
            let req = ApiEmbeddingRequest {
                model: "text-embedding-3-small".to_owned(),
                input: vec!["hello world".to_owned()],
            };

            let json: Value = serde_json::to_value(&req).unwrap();
            assert_eq!(json["input"].as_array().unwrap().len(), 1);
        }

        #[test]
        fn response_deserialization() {
            let json = r#"{
                "object": "list",
                "data": [{"object": "embedding", "embedding": [0.1, 0.2], "index": 0}],
                "model": "text-embedding-3-small",
                "usage": {"prompt_tokens": 2, "total_tokens": 2}
            }"#;

            let parsed: ApiEmbeddingResponse = serde_json::from_str(json).unwrap();
            assert_eq!(parsed.data.len(), 1);
            assert_eq!(parsed.data[0].embedding, vec![0.1, 0.2]);
        }
    }

    mod speech {
        use super::*;

        #[test]
        fn request_serializes_required_fields() {
            let req = ApiSpeechRequest {
                model: "tts-1".to_owned(),
                input: "Hello world".to_owned(),
                voice: "alloy".to_owned(),
                response_format: None,
                speed: None,
                instructions: None,
            };

            let json: Value = serde_json::to_value(&req).unwrap();
            assert_eq!(json["model"], "tts-1");
            assert_eq!(json["input"], "Hello world");
            assert_eq!(json["voice"], "alloy");
        }

        #[test]
        fn request_skips_none_optionals() {
            let req = ApiSpeechRequest {
                model: "tts-1".to_owned(),
                input: "Test".to_owned(),
                voice: "nova".to_owned(),
                response_format: None,
                speed: None,
                instructions: None,
            };

            let json = serde_json::to_string(&req).unwrap();
            assert!(!json.contains("response_format"));
            assert!(!json.contains("speed"));
            assert!(!json.contains("instructions"));
        }

        #[test]
        fn request_includes_set_optionals() {
            let req = ApiSpeechRequest {
                model: "tts-1-hd".to_owned(),
                input: "Test".to_owned(),
                voice: "onyx".to_owned(),
                response_format: Some("opus".to_owned()),
                speed: Some(1.5),
                instructions: Some("Speak slowly.".to_owned()),
            };

            let json: Value = serde_json::to_value(&req).unwrap();
            assert_eq!(json["response_format"], "opus");
            assert!((json["speed"].as_f64().unwrap() - 1.5).abs() < 1e-6);
            assert_eq!(json["instructions"], "Speak slowly.");
        }
    }

    mod transcription {
        use super::*;

        #[test]
        fn deserializes_minimal_response() {
            let json = r#"{"text": "Hello world"}"#;
            let parsed: ApiTranscriptionResponse = serde_json::from_str(json).unwrap();

            assert_eq!(parsed.text, "Hello world");
            assert!(parsed.language.is_none());
        }

        #[test]
        fn deserializes_verbose_response() {
            // Actual verbose_json response shape; extra fields are ignored
            let json = r#"{
                "task": "transcribe",
                "language": "english",
                "duration": 8.47,
                "text": "The beach was a popular spot.",
                "segments": []
            }"#;

            let parsed: ApiTranscriptionResponse = serde_json::from_str(json).unwrap();
            assert!(parsed.text.contains("beach"));
            assert_eq!(parsed.language.as_deref(), Some("english"));
        }
    }

    mod image {
        use super::*;

        #[test]
        fn request_serializes() {
            let req = ApiImageRequest {
                model: "dall-e-3".to_owned(),
                prompt: "a watercolor fox".to_owned(),
                n: 1,
                size: Some("1024x1024".to_owned()),
            };

            let json: Value = serde_json::to_value(&req).unwrap();
            assert_eq!(json["model"], "dall-e-3");
            assert_eq!(json["n"], 1);
            assert_eq!(json["size"], "1024x1024");
        }

        #[test]
        fn response_deserializes_url_entry() {
            let json = r#"{
                "created": 1700000000,
                "data": [{"url": "https://images.example/gen.png", "revised_prompt": "a fox"}]
            }"#;

            let parsed: ApiImageResponse = serde_json::from_str(json).unwrap();
            assert_eq!(
                parsed.data[0].url.as_deref(),
                Some("https://images.example/gen.png")
            );
        }

        #[test]
        fn response_tolerates_b64_entries() {
            let json = r#"{"data": [{"b64_json": "AQID"}]}"#;
            let parsed: ApiImageResponse = serde_json::from_str(json).unwrap();

            assert!(parsed.data[0].url.is_none());
            assert_eq!(parsed.data[0].b64_json.as_deref(), Some("AQID"));
        }
    }
}
