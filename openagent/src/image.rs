//! Image data handling for vision and generation calls.
//!
//! [`ImageData`] holds image bytes (or a pre-encoded base64 string) together
//! with a format tag, and converts them to the base64 data URLs the vision
//! endpoints expect.

use std::borrow::Cow;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ImageFormat {
    /// PNG format (default).
    #[default]
    Png,
    /// JPEG format.
    Jpeg,
    /// GIF format.
    Gif,
    /// WebP format.
    Webp,
}

impl ImageFormat {
    /// Get the MIME type for this format.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }

    /// Get the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }

    /// Detect format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }

    /// Detect format from magic bytes (file signature).
    #[must_use]
    pub fn from_magic_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 4 {
            return None;
        }
        match bytes {
            [0x89, 0x50, 0x4E, 0x47, ..] => Some(Self::Png),
            [0xFF, 0xD8, 0xFF, ..] => Some(Self::Jpeg),
            [0x47, 0x49, 0x46, 0x38, ..] => Some(Self::Gif),
            [0x52, 0x49, 0x46, 0x46, ..] if bytes.len() >= 12 && &bytes[8..12] == b"WEBP" => {
                Some(Self::Webp)
            }
            _ => None,
        }
    }
}

/// Internal representation of image data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
enum ImageSource {
    /// Raw bytes data.
    Bytes {
        #[serde(with = "base64_serde")]
        data: Vec<u8>,
    },
    /// Base64 encoded string (already encoded).
    Base64 { data: String },
}

/// An image to be sent to a vision endpoint.
///
/// Images are always transmitted base64-encoded inside a data URL;
/// encoding then decoding reproduces the original bytes exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageData {
    source: ImageSource,
    format: ImageFormat,
}

impl ImageData {
    /// Create an image from raw bytes.
    ///
    /// The format is auto-detected from the magic bytes if `None` is given.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>, format: impl Into<Option<ImageFormat>>) -> Self {
        let format = format
            .into()
            .or_else(|| ImageFormat::from_magic_bytes(&bytes))
            .unwrap_or_default();
        Self {
            source: ImageSource::Bytes { data: bytes },
            format,
        }
    }

    /// Create an image from a base64 encoded string.
    #[must_use]
    pub fn from_base64(base64: impl Into<String>, format: ImageFormat) -> Self {
        Self {
            source: ImageSource::Base64 {
                data: base64.into(),
            },
            format,
        }
    }

    /// Load an image from a file path.
    ///
    /// The format is detected from the extension, falling back to the
    /// file's magic bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub async fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(ImageFormat::from_extension)
            .or_else(|| ImageFormat::from_magic_bytes(&bytes));
        Ok(Self::from_bytes(bytes, format))
    }

    /// Get the image format.
    #[must_use]
    pub const fn format(&self) -> ImageFormat {
        self.format
    }

    /// Convert to a base64 encoded string.
    #[must_use]
    pub fn to_base64(&self) -> Cow<'_, str> {
        match &self.source {
            ImageSource::Bytes { data } => Cow::Owned(BASE64.encode(data)),
            ImageSource::Base64 { data } => Cow::Borrowed(data),
        }
    }

    /// Convert to a data URL (`data:image/png;base64,...`).
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.format.mime_type(), self.to_base64())
    }

    /// Get the raw bytes, decoding base64 if necessary.
    ///
    /// Returns `None` if the stored base64 string is malformed.
    #[must_use]
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        match &self.source {
            ImageSource::Bytes { data } => Some(data.clone()),
            ImageSource::Base64 { data } => BASE64.decode(data).ok(),
        }
    }
}

impl std::fmt::Display for ImageData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            ImageSource::Bytes { data } => {
                write!(f, "[Image: {} bytes, {}]", data.len(), self.format.mime_type())
            }
            ImageSource::Base64 { data } => {
                write!(
                    f,
                    "[Image: ~{} bytes, {}]",
                    data.len() * 3 / 4,
                    self.format.mime_type()
                )
            }
        }
    }
}

/// A generated image persisted to disk.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    /// Path the image was written to.
    pub path: std::path::PathBuf,
    /// The URL the image was fetched from.
    pub url: String,
    /// Size of the written image in bytes.
    pub len: u64,
}

/// Custom serde module for base64 encoding of byte vectors.
mod base64_serde {
    use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&BASE64.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BASE64.decode(&s).map_err(serde::de::Error::custom)
    }
}
