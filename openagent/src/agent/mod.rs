//! The adapter: one method per vendor capability.
//!
//! This module provides [`Agent`], a thin client over an OpenAI-compatible
//! API supporting:
//! - Chat completions (plain text and structured output)
//! - Translation and image captioning (chat round-trips)
//! - Image classification (vision)
//! - Speech synthesis (whole-file and chunk-streaming)
//! - Audio transcription
//! - Image generation
//! - Text embeddings

mod audio;
mod chat;
mod client;
mod embedding;
mod image;
mod types;

pub use client::Agent;
