//! Chat completion calls: plain chat, translation, captioning, classification.

use crate::chat::{ChatOptions, ChatReply, ResponseFormat};
use crate::error::{ApiError, Result};
use crate::image::ImageData;
use crate::message::{ContentPart, Message};

use super::client::Agent;
use super::types::{ApiChatRequest, ApiChatResponse, ApiResponseFormat};

impl Agent {
    /// Send a plain chat message and return the reply content.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request error for empty input, or a provider,
    /// transport, or response-format error from the round-trip.
    pub async fn chat(&self, text: &str) -> Result<ChatReply> {
        self.chat_with(text, ChatOptions::new()).await
    }

    /// Send a chat message with optional system instructions and a
    /// structured response format.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request error for empty input, or a provider,
    /// transport, or response-format error from the round-trip.
    pub async fn chat_with(&self, text: &str, options: ChatOptions) -> Result<ChatReply> {
        if text.trim().is_empty() {
            return Err(ApiError::invalid_request("chat text must not be empty").into());
        }

        let mut messages = Vec::with_capacity(2);
        if let Some(instructions) = &options.instructions {
            messages.push(Message::system(instructions.clone()));
        }
        messages.push(Message::user(text));

        self.complete(messages, options.response_format).await
    }

    /// Translate text into the target language.
    ///
    /// The system instruction names the target language verbatim, so any
    /// language identifier the chat model understands can be passed.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request error for empty input, or a provider or
    /// transport error from the round-trip.
    pub async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(ApiError::invalid_request("translation text must not be empty").into());
        }

        let messages = vec![
            Message::system(format!(
                "You are a translation engine. Translate the user's message into \
                 {target_language}. Reply with the translation only, no commentary."
            )),
            Message::user(text),
        ];

        let reply = self.complete(messages, None).await?;
        Ok(reply.into_text())
    }

    /// Caption an image in the requested language.
    ///
    /// The image is transmitted base64-encoded as a data URL; the reply is
    /// a caption of one to three sentences.
    ///
    /// # Errors
    ///
    /// Returns a provider or transport error from the round-trip.
    pub async fn caption_image(&self, image: &ImageData, language: &str) -> Result<String> {
        let messages = vec![
            Message::system(format!(
                "Describe the image the user provides. Reply in {language} with a \
                 caption of one to three sentences."
            )),
            Message::user_parts(vec![ContentPart::image_url(image.to_data_url())]),
        ];

        let reply = self.complete(messages, None).await?;
        Ok(reply.into_text())
    }

    /// Caption an image file in the requested language.
    ///
    /// Convenience over [`Agent::caption_image`] that reads and encodes the
    /// file first.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a provider or
    /// transport error from the round-trip.
    pub async fn caption_image_file(
        &self,
        path: impl AsRef<std::path::Path> + Send,
        language: &str,
    ) -> Result<String> {
        let image = ImageData::load(path).await?;
        self.caption_image(&image, language).await
    }

    /// Classify a sequence of images against a prompt.
    ///
    /// One image part is sent per input image, in order, each as a base64
    /// data URL. An optional response format requests structured output.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request error when no images are given, or a
    /// provider, transport, or response-format error from the round-trip.
    pub async fn classify_images(
        &self,
        images: &[ImageData],
        prompt: &str,
        format: Option<ResponseFormat>,
    ) -> Result<ChatReply> {
        if images.is_empty() {
            return Err(ApiError::invalid_request("at least one image is required").into());
        }

        let mut parts = Vec::with_capacity(images.len() + 1);
        parts.push(ContentPart::text(prompt));
        parts.extend(
            images
                .iter()
                .map(|image| ContentPart::image_url(image.to_data_url())),
        );

        self.complete(vec![Message::user_parts(parts)], format).await
    }

    /// Run one chat completion round-trip and extract the first choice.
    pub(crate) async fn complete(
        &self,
        messages: Vec<Message>,
        format: Option<ResponseFormat>,
    ) -> Result<ChatReply> {
        let url = self.chat_url();
        let structured = format.as_ref().is_some_and(ResponseFormat::is_structured);

        let body = ApiChatRequest {
            model: self.config.chat_model.clone(),
            messages: messages.iter().map(Self::convert_message).collect(),
            response_format: format.as_ref().map(ApiResponseFormat::from_response_format),
        };

        tracing::debug!(model = %body.model, messages = body.messages.len(), "chat request");

        let response = self
            .build_request(&url)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let err = Self::parse_error(status.as_u16(), &error_text);
            tracing::warn!(status = status.as_u16(), "chat request failed: {err}");
            return Err(err.into());
        }

        let response_text = response.text().await.map_err(ApiError::from)?;
        let parsed: ApiChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            ApiError::response_format("valid chat completion", format!("parse error: {e}"))
        })?;

        let content = Self::extract_content(parsed)?;

        if structured {
            let value = serde_json::from_str(&content).map_err(|e| {
                ApiError::response_format("structured JSON content", format!("parse error: {e}"))
            })?;
            Ok(ChatReply::Json(value))
        } else {
            Ok(ChatReply::Text(content))
        }
    }

    /// Pull the first choice's content out of a chat response.
    pub(crate) fn extract_content(response: ApiChatResponse) -> Result<String> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::response_format("at least one choice", "empty choices"))?;

        if let Some(refusal) = choice.message.refusal {
            return Err(ApiError::provider(format!("model refused: {refusal}")).into());
        }

        choice
            .message
            .content
            .ok_or_else(|| ApiError::response_format("message content", "null content").into())
    }
}
