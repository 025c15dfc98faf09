//! Template background image, carried as a data URL.
//!
//! The background anchors the coordinate space every element is positioned
//! in. The editor never inspects pixels: it stores the data URL it was
//! given (or builds one from raw bytes) and hands it back to whatever
//! renders or persists the template. Image format and dimensions are not
//! validated here.

#[cfg(test)]
#[path = "background_test.rs"]
mod background_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Errors raised when constructing or decoding a background.
#[derive(Debug, thiserror::Error)]
pub enum BackgroundError {
    #[error("not an image data url")]
    NotImageDataUrl,
    #[error("invalid base64 payload: {0}")]
    InvalidPayload(#[from] base64::DecodeError),
}

/// An uploaded reference image held as a `data:image/...;base64,` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBackground {
    data_url: String,
}

impl TemplateBackground {
    /// Wrap an existing data URL, checking only its outer shape.
    ///
    /// # Errors
    ///
    /// Returns [`BackgroundError::NotImageDataUrl`] when the string is not
    /// a base64 image data URL.
    pub fn from_data_url(data_url: impl Into<String>) -> Result<Self, BackgroundError> {
        let data_url = data_url.into();
        let Some(rest) = data_url.strip_prefix("data:image/") else {
            return Err(BackgroundError::NotImageDataUrl);
        };
        if !rest.contains(";base64,") {
            return Err(BackgroundError::NotImageDataUrl);
        }
        Ok(Self { data_url })
    }

    /// Encode raw image bytes into a data URL background.
    ///
    /// `subtype` is the image MIME subtype, e.g. `"png"` or `"jpeg"`.
    #[must_use]
    pub fn from_bytes(subtype: &str, bytes: &[u8]) -> Self {
        let payload = STANDARD.encode(bytes);
        Self { data_url: format!("data:image/{subtype};base64,{payload}") }
    }

    /// The full data URL.
    #[must_use]
    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Decode the base64 payload back into image bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BackgroundError::InvalidPayload`] when the payload is not
    /// valid base64.
    pub fn bytes(&self) -> Result<Vec<u8>, BackgroundError> {
        let payload = self
            .data_url
            .split_once(";base64,")
            .map(|(_, p)| p)
            .unwrap_or_default();
        Ok(STANDARD.decode(payload)?)
    }
}
