//! Text embedding calls.

use crate::embedding::{Embedding, normalize_input};
use crate::error::{ApiError, Result};

use super::client::Agent;
use super::types::{ApiEmbeddingRequest, ApiEmbeddingResponse};

impl Agent {
    /// Embed a text into a vector.
    ///
    /// Newlines in the input are normalized to spaces before submission.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request error for empty input, or a provider,
    /// transport, or response-format error from the round-trip.
    pub async fn embedding(&self, text: &str) -> Result<Embedding> {
        if text.trim().is_empty() {
            return Err(ApiError::invalid_request("embedding text must not be empty").into());
        }

        let url = self.embeddings_url();
        let body = ApiEmbeddingRequest {
            model: self.config.embedding_model.clone(),
            input: vec![normalize_input(text)],
        };

        tracing::debug!(model = %body.model, "embedding request");

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
            tracing::warn!(status = status.as_u16(), "embedding request failed: {err}");
            return Err(err.into());
        }

        let response_text = response.text().await.map_err(ApiError::from)?;
        let parsed: ApiEmbeddingResponse = serde_json::from_str(&response_text).map_err(|e| {
            ApiError::response_format("valid embedding response", format!("parse error: {e}"))
        })?;

        parsed
            .data
            .into_iter()
            .next()
            .map(|d| Embedding::new(d.embedding, d.index))
            .ok_or_else(|| ApiError::response_format("an embedding", "empty data array").into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;
    use crate::error::ApiErrorKind;

    #[tokio::test]
    async fn embedding_rejects_empty_text() {
        let agent = Agent::new(AgentConfig::new("test-key")).unwrap();
        let err = agent.embedding("").await.unwrap_err();
        assert_eq!(err.api_kind(), Some(ApiErrorKind::InvalidRequest));
    }

    #[tokio::test]
    async fn embedding_rejects_newline_only_text() {
        let agent = Agent::new(AgentConfig::new("test-key")).unwrap();
        let err = agent.embedding("\n\n").await.unwrap_err();
        assert_eq!(err.api_kind(), Some(ApiErrorKind::InvalidRequest));
    }
}
