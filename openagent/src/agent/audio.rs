//! Audio calls: transcription and speech synthesis (whole-file and streaming).

use std::path::Path;

use futures::StreamExt;

use crate::audio::{AudioFormat, AudioSink, SpeechOptions, Transcript};
use crate::error::{ApiError, Result};

use super::client::Agent;
use super::types::{ApiSpeechRequest, ApiTranscriptionResponse};

impl Agent {
    /// Transcribe an audio file to text.
    ///
    /// The audio format is detected from the file extension, defaulting to
    /// mp3 when the extension is unknown.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a provider or
    /// transport error from the round-trip.
    pub async fn transcribe(&self, path: impl AsRef<Path> + Send) -> Result<Transcript> {
        let path = path.as_ref();
        let audio = tokio::fs::read(path).await?;
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(AudioFormat::from_extension)
            .unwrap_or_default();

        self.transcribe_bytes(audio, format).await
    }

    /// Transcribe in-memory audio bytes to text.
    ///
    /// # Errors
    ///
    /// Returns a provider or transport error from the round-trip.
    pub async fn transcribe_bytes(&self, audio: Vec<u8>, format: AudioFormat) -> Result<Transcript> {
        let url = self.transcriptions_url();

        let filename = format!("audio.{}", format.extension());
        let file_part = reqwest::multipart::Part::bytes(audio)
            .file_name(filename)
            .mime_str(format.mime_type())
            .map_err(|e| ApiError::internal(format!("Invalid MIME type: {e}")))?;

        let form = reqwest::multipart::Form::new()
            .text("model", self.config.transcribe_model.clone())
            .part("file", file_part)
            .text("response_format", "verbose_json");

        tracing::debug!(model = %self.config.transcribe_model, "transcription request");

        let response = self
            .build_multipart_request(&url)
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let err = Self::parse_error(status.as_u16(), &error_text);
            tracing::warn!(status = status.as_u16(), "transcription failed: {err}");
            return Err(err.into());
        }

        let response_text = response.text().await.map_err(ApiError::from)?;

        // Try the verbose JSON shape first, fall back to plain text
        if let Ok(parsed) = serde_json::from_str::<ApiTranscriptionResponse>(&response_text) {
            Ok(Transcript {
                text: parsed.text,
                language: parsed.language,
                duration: parsed.duration,
            })
        } else {
            Ok(Transcript::new(response_text))
        }
    }

    /// Synthesize speech and write the complete audio file to `target`.
    ///
    /// The file is written only after the full body has been received, so a
    /// provider error leaves no partial file behind.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request error for empty input, a provider or
    /// transport error from the round-trip, or an I/O error writing the
    /// target file.
    pub async fn synthesize_speech(
        &self,
        text: &str,
        target: impl AsRef<Path> + Send,
        options: SpeechOptions,
    ) -> Result<()> {
        let response = self.request_speech(text, &options).await?;
        let audio = response.bytes().await.map_err(ApiError::from)?;
        tokio::fs::write(target, &audio).await?;
        Ok(())
    }

    /// Synthesize speech and stream ordered byte chunks into `sink`.
    ///
    /// Chunks are forwarded as the transport delivers them; the stream is
    /// finite and not restartable. The sink's `finish` is called on every
    /// exit path, so the underlying audio resource is released whether the
    /// stream completed or failed mid-way. Returns the total number of
    /// bytes delivered.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request error for empty input, a provider or
    /// transport error, or the sink's own error.
    pub async fn synthesize_speech_stream(
        &self,
        text: &str,
        sink: &mut dyn AudioSink,
        options: SpeechOptions,
    ) -> Result<u64> {
        let response = self.request_speech(text, &options).await?;

        let mut stream = response.bytes_stream();
        let mut total: u64 = 0;
        let mut failure: Option<ApiError> = None;

        while let Some(next) = stream.next().await {
            match next {
                Ok(chunk) => {
                    total += chunk.len() as u64;
                    if let Err(e) = sink.write_chunk(chunk).await {
                        sink.finish().await.ok();
                        return Err(e);
                    }
                }
                Err(e) => {
                    failure = Some(ApiError::from(e));
                    break;
                }
            }
        }

        sink.finish().await?;

        match failure {
            Some(err) => {
                tracing::warn!("speech stream aborted after {total} bytes: {err}");
                Err(err.into())
            }
            None => Ok(total),
        }
    }

    /// Dispatch a speech synthesis request and check the response status.
    async fn request_speech(
        &self,
        text: &str,
        options: &SpeechOptions,
    ) -> Result<reqwest::Response> {
        if text.trim().is_empty() {
            return Err(ApiError::invalid_request("speech text must not be empty").into());
        }

        let url = self.speech_url();
        let body = ApiSpeechRequest {
            model: self.config.speech_model.clone(),
            input: text.to_owned(),
            voice: options.voice.as_str().to_owned(),
            response_format: Some(options.format.as_str().to_owned()),
            speed: options.speed,
            instructions: options.instructions.clone(),
        };

        tracing::debug!(
            model = %body.model,
            voice = %body.voice,
            format = options.format.as_str(),
            "speech request"
        );

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
            tracing::warn!(status = status.as_u16(), "speech request failed: {err}");
            return Err(err.into());
        }

        Ok(response)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;
    use crate::error::ApiErrorKind;

    fn test_agent() -> Agent {
        Agent::new(AgentConfig::new("test-key")).unwrap()
    }

    #[tokio::test]
    async fn synthesize_rejects_empty_text() {
        let err = test_agent()
            .synthesize_speech("", "/tmp/out.mp3", SpeechOptions::new())
            .await
            .unwrap_err();
        assert_eq!(err.api_kind(), Some(ApiErrorKind::InvalidRequest));
    }

    #[tokio::test]
    async fn stream_rejects_empty_text() {
        let mut sink = crate::audio::MemorySink::new();
        let err = test_agent()
            .synthesize_speech_stream("  ", &mut sink, SpeechOptions::new())
            .await
            .unwrap_err();
        assert_eq!(err.api_kind(), Some(ApiErrorKind::InvalidRequest));
        assert!(sink.as_bytes().is_empty());
    }

    #[tokio::test]
    async fn transcribe_missing_file_is_io_error() {
        let err = test_agent()
            .transcribe("/nonexistent/audio.mp3")
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
