//! Asset content representation
//!
//! Auxiliary artifacts legitimately carry binary content (compressed
//! sourcemaps, images), so asset content is a two-variant enum rather than
//! a plain string. `Vec<u8>` is the single canonical byte-sequence
//! representation; anything byte-like converts into it at the boundary.

use serde::{Deserialize, Serialize};

/// Content of an [`OutputAsset`](crate::OutputAsset)
///
/// # Invariants
/// - `Text` holds valid UTF-8 by construction
/// - `Raw` bytes are opaque to the model; no encoding is assumed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetSource {
    /// Textual content (e.g. a JSON sourcemap)
    Text(String),
    /// Raw binary content
    Raw(Vec<u8>),
}

impl AssetSource {
    /// View content as bytes regardless of variant
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            AssetSource::Text(text) => text.as_bytes(),
            AssetSource::Raw(bytes) => bytes,
        }
    }

    /// View content as text
    ///
    /// # Errors
    /// Returns [`SourceError::InvalidUtf8`] if raw content is not UTF-8
    #[inline]
    pub fn to_text(&self) -> Result<&str, SourceError> {
        match self {
            AssetSource::Text(text) => Ok(text),
            AssetSource::Raw(bytes) => std::str::from_utf8(bytes).map_err(SourceError::from),
        }
    }

    /// Convert to owned bytes (consumes self)
    #[inline]
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            AssetSource::Text(text) => text.into_bytes(),
            AssetSource::Raw(bytes) => bytes,
        }
    }

    /// Content length in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Check if content is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Check if content is the textual variant
    #[inline]
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, AssetSource::Text(_))
    }

    /// Check if content is the raw binary variant
    #[inline]
    #[must_use]
    pub fn is_raw(&self) -> bool {
        matches!(self, AssetSource::Raw(_))
    }
}

impl From<String> for AssetSource {
    #[inline]
    fn from(text: String) -> Self {
        AssetSource::Text(text)
    }
}

impl From<&str> for AssetSource {
    #[inline]
    fn from(text: &str) -> Self {
        AssetSource::Text(text.to_string())
    }
}

impl From<Vec<u8>> for AssetSource {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        AssetSource::Raw(bytes)
    }
}

impl From<&[u8]> for AssetSource {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        AssetSource::Raw(bytes.to_vec())
    }
}

/// Errors related to asset content access
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Raw content was read as text but is not valid UTF-8
    #[error("asset content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_source_as_bytes() {
        let source = AssetSource::from("{}");
        assert_eq!(source.as_bytes(), b"{}");
        assert!(source.is_text());
        assert!(!source.is_raw());
    }

    #[test]
    fn raw_source_as_bytes() {
        let source = AssetSource::from(vec![0x7b, 0x7d]);
        assert_eq!(source.as_bytes(), &[0x7b, 0x7d]);
        assert!(source.is_raw());
    }

    #[test]
    fn raw_utf8_reads_as_text() {
        let source = AssetSource::from(b"{\"file\":\"a.js\"}".as_slice());
        assert_eq!(source.to_text().unwrap(), "{\"file\":\"a.js\"}");
    }

    #[test]
    fn raw_non_utf8_rejected_as_text() {
        let source = AssetSource::from(vec![0xff, 0xfe, 0x00]);
        assert!(matches!(source.to_text(), Err(SourceError::InvalidUtf8(_))));
    }

    #[test]
    fn into_bytes_preserves_content() {
        assert_eq!(AssetSource::from("ab").into_bytes(), b"ab".to_vec());
        assert_eq!(AssetSource::from(vec![1, 2]).into_bytes(), vec![1, 2]);
    }

    #[test]
    fn len_and_is_empty() {
        assert_eq!(AssetSource::from("abc").len(), 3);
        assert!(AssetSource::from("").is_empty());
        assert!(AssetSource::from(Vec::new()).is_empty());
    }

    #[test]
    fn text_and_raw_with_same_bytes_are_distinct() {
        let text = AssetSource::from("{}");
        let raw = AssetSource::from(vec![0x7b, 0x7d]);
        assert_eq!(text.as_bytes(), raw.as_bytes());
        assert_ne!(text, raw);
    }
}
