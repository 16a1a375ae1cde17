//! Audio types: formats, voices, synthesis options, and the playback sink.
//!
//! Speech synthesis can either persist a whole audio file or stream ordered
//! byte chunks into an [`AudioSink`]. The sink abstracts the audio output
//! device so playback consumers can be tested without real hardware.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Audio format for input/output operations.
///
/// Not all formats are valid for all operations:
/// - Speech synthesis: mp3, opus, aac, flac, wav, pcm
/// - Transcription input: flac, mp3, m4a, ogg, wav, webm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// MP3 format (default for synthesis).
    #[default]
    Mp3,
    /// Opus format.
    Opus,
    /// AAC format.
    Aac,
    /// FLAC format.
    Flac,
    /// WAV format.
    Wav,
    /// PCM format (raw 24kHz samples, suited to progressive playback).
    Pcm,
    /// OGG format (transcription input only).
    Ogg,
    /// WebM format (transcription input only).
    WebM,
    /// M4A format (transcription input only).
    M4a,
}

impl AudioFormat {
    /// Get the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Opus => "opus",
            Self::Aac => "aac",
            Self::Flac => "flac",
            Self::Wav => "wav",
            Self::Pcm => "pcm",
            Self::Ogg => "ogg",
            Self::WebM => "webm",
            Self::M4a => "m4a",
        }
    }

    /// Get the MIME type for this format.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Opus => "audio/opus",
            Self::Aac => "audio/aac",
            Self::Flac => "audio/flac",
            Self::Wav => "audio/wav",
            Self::Pcm => "audio/pcm",
            Self::Ogg => "audio/ogg",
            Self::WebM => "audio/webm",
            Self::M4a => "audio/m4a",
        }
    }

    /// Get the format string for API requests.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.extension()
    }

    /// Detect format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Some(Self::Mp3),
            "opus" => Some(Self::Opus),
            "aac" => Some(Self::Aac),
            "flac" => Some(Self::Flac),
            "wav" => Some(Self::Wav),
            "pcm" => Some(Self::Pcm),
            "ogg" => Some(Self::Ogg),
            "webm" => Some(Self::WebM),
            "m4a" => Some(Self::M4a),
            _ => None,
        }
    }
}

/// The built-in voice set for speech synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    /// A neutral, balanced voice (default).
    #[default]
    Alloy,
    /// A warm, gentle voice.
    Ash,
    /// A soft, melodic voice.
    Ballad,
    /// A clear, professional voice.
    Coral,
    /// A crisp, energetic voice.
    Echo,
    /// An expressive, storytelling voice.
    Fable,
    /// A deep, authoritative voice.
    Onyx,
    /// A friendly, conversational voice.
    Nova,
    /// A calm, wise voice.
    Sage,
    /// A bright, optimistic voice.
    Shimmer,
}

impl Voice {
    /// All voices, in a stable order.
    pub const ALL: [Self; 10] = [
        Self::Alloy,
        Self::Ash,
        Self::Ballad,
        Self::Coral,
        Self::Echo,
        Self::Fable,
        Self::Onyx,
        Self::Nova,
        Self::Sage,
        Self::Shimmer,
    ];

    /// Get the voice identifier for API requests.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Alloy => "alloy",
            Self::Ash => "ash",
            Self::Ballad => "ballad",
            Self::Coral => "coral",
            Self::Echo => "echo",
            Self::Fable => "fable",
            Self::Onyx => "onyx",
            Self::Nova => "nova",
            Self::Sage => "sage",
            Self::Shimmer => "shimmer",
        }
    }

    /// Parse a voice from its identifier.
    #[must_use]
    pub fn from_str_opt(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|v| v.as_str() == name)
    }
}

/// Per-call options for speech synthesis.
#[derive(Debug, Clone, Default)]
pub struct SpeechOptions {
    /// Voice to use.
    pub voice: Voice,
    /// Output audio format.
    pub format: AudioFormat,
    /// Speaking speed (0.25 to 4.0, default 1.0).
    pub speed: Option<f32>,
    /// Voice control instructions (gpt-4o-mini-tts only).
    pub instructions: Option<String>,
}

impl SpeechOptions {
    /// Creates default options (alloy voice, mp3 output).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the voice.
    #[must_use]
    pub const fn voice(mut self, voice: Voice) -> Self {
        self.voice = voice;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub const fn format(mut self, format: AudioFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the speaking speed (0.25 to 4.0).
    #[must_use]
    pub const fn speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Sets voice control instructions.
    #[must_use]
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }
}

/// A transcription result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    /// The transcribed text.
    pub text: String,
    /// Detected language, when the endpoint reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Duration of the audio in seconds, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f32>,
}

impl Transcript {
    /// Create a transcript with just text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// A sink accepting ordered byte chunks of synthesized audio.
///
/// Implementations wrap an audio output device, a file, or a buffer. The
/// adapter calls [`AudioSink::write_chunk`] for every chunk the transport
/// delivers, in order, and calls [`AudioSink::finish`] exactly once on
/// every exit path so the underlying resource is released whether the
/// stream completed or failed mid-way.
#[async_trait]
pub trait AudioSink: Send {
    /// Accept the next chunk of audio bytes.
    async fn write_chunk(&mut self, chunk: Bytes) -> Result<()>;

    /// Signal the end of the stream and release the underlying resource.
    async fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// An in-memory [`AudioSink`] that accumulates all chunks into a buffer.
#[derive(Debug, Default)]
pub struct MemorySink {
    buffer: Vec<u8>,
    finished: bool,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes received so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Whether the stream was finished.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Consume the sink and return the accumulated bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

#[async_trait]
impl AudioSink for MemorySink {
    async fn write_chunk(&mut self, chunk: Bytes) -> Result<()> {
        self.buffer.extend_from_slice(&chunk);
        Ok(())
    }

    async fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
