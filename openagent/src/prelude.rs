//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust,ignore
//! use openagent::prelude::*;
//! ```

pub use crate::agent::Agent;
pub use crate::audio::{
    AudioFormat, AudioSink, MemorySink, SpeechOptions, Transcript, Voice,
};
pub use crate::chat::{ChatOptions, ChatReply, JsonSchemaSpec, ResponseFormat};
pub use crate::config::AgentConfig;
pub use crate::embedding::Embedding;
pub use crate::error::{ApiError, ApiErrorKind, Error, Result};
pub use crate::image::{GeneratedImage, ImageData, ImageFormat};
pub use crate::message::{Content, ContentPart, ImageUrl, Message, Role};
