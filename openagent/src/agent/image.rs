//! Image generation: one generation round-trip, then a fetch of the result.

use std::path::Path;

use crate::error::{ApiError, Result};
use crate::image::GeneratedImage;

use super::client::Agent;
use super::types::{ApiImageRequest, ApiImageResponse};

/// Default size requested from the image generation endpoint.
const DEFAULT_IMAGE_SIZE: &str = "1024x1024";

impl Agent {
    /// Generate an image from a prompt and persist it to `target`.
    ///
    /// Two sequential round-trips: the generation request returns a URL,
    /// and a second, independent fetch downloads the image bytes. Either
    /// step can fail on its own; the fetch failure surfaces as a transport
    /// or HTTP-status error distinct from the generation call's.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request error for an empty prompt, a provider or
    /// transport error from either round-trip, or an I/O error writing the
    /// target file.
    pub async fn generate_image(
        &self,
        prompt: &str,
        target: impl AsRef<Path> + Send,
    ) -> Result<GeneratedImage> {
        if prompt.trim().is_empty() {
            return Err(ApiError::invalid_request("image prompt must not be empty").into());
        }

        let url = self.images_url();
        let body = ApiImageRequest {
            model: self.config.image_model.clone(),
            prompt: prompt.to_owned(),
            n: 1,
            size: Some(DEFAULT_IMAGE_SIZE.to_owned()),
        };

        tracing::debug!(model = %body.model, "image generation request");

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
            tracing::warn!(status = status.as_u16(), "image generation failed: {err}");
            return Err(err.into());
        }

        let response_text = response.text().await.map_err(ApiError::from)?;
        let parsed: ApiImageResponse = serde_json::from_str(&response_text).map_err(|e| {
            ApiError::response_format("valid image generation response", format!("parse error: {e}"))
        })?;

        let image_url = parsed
            .data
            .into_iter()
            .next()
            .and_then(|d| d.url)
            .ok_or_else(|| ApiError::response_format("an image URL", "no url in response data"))?;

        let bytes = self.fetch_image(&image_url).await?;

        let target = target.as_ref();
        tokio::fs::write(target, &bytes).await?;

        Ok(GeneratedImage {
            path: target.to_path_buf(),
            url: image_url,
            len: bytes.len() as u64,
        })
    }

    /// Fetch generated image bytes from the returned URL.
    ///
    /// This is the second, independent failure point of image generation;
    /// no authorization header is sent since the URL is pre-signed.
    async fn fetch_image(&self, url: &str) -> Result<bytes::Bytes> {
        tracing::debug!("fetching generated image");

        let response = self.client.get(url).send().await.map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "image fetch failed");
            return Err(ApiError::http_status(status.as_u16(), "image fetch failed").into());
        }

        response.bytes().await.map_err(|e| ApiError::from(e).into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;
    use crate::error::ApiErrorKind;

    #[tokio::test]
    async fn generate_rejects_empty_prompt() {
        let agent = Agent::new(AgentConfig::new("test-key")).unwrap();
        let err = agent.generate_image("", "/tmp/out.png").await.unwrap_err();
        assert_eq!(err.api_kind(), Some(ApiErrorKind::InvalidRequest));
    }
}
