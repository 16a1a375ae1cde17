//! openagent - a multimodal adapter for OpenAI-compatible APIs
//!
//! This crate provides a single stateless adapter, [`Agent`], holding a
//! credential and per-capability model names. Each method performs one
//! request/response cycle against the vendor API: chat, translation,
//! captioning, classification, speech synthesis (buffered or streamed),
//! transcription, image generation, and embeddings.

pub mod agent;
pub mod audio;
pub mod chat;
pub mod config;
pub mod embedding;
pub mod error;
pub mod image;
pub mod message;
pub mod prelude;

pub use agent::Agent;
pub use config::AgentConfig;
pub use error::{ApiError, ApiErrorKind, Error, Result};
