//! Output artifact union
//!
//! A finalized build output is either a code chunk (contractually textual)
//! or an auxiliary asset (text or raw bytes). The kind is part of the
//! artifact itself, assigned by the pipeline at emission time; it is never
//! derived from the file name.

use crate::source::AssetSource;
use serde::{Deserialize, Serialize};

/// Artifact classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Compiled code chunk
    Chunk,
    /// Auxiliary file (sourcemap, emitted asset)
    Asset,
}

impl ArtifactKind {
    /// Stable identifier used in diagnostics
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Chunk => "chunk",
            ArtifactKind::Asset => "asset",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled code chunk
///
/// `code` is contractually textual; downstream consumers (sourcemap
/// linkage, execution) depend on it staying a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputChunk {
    /// Output file name, unique within a bundle
    pub file_name: String,
    /// Generated chunk source text
    pub code: String,
    /// Whether this chunk is an entry point
    pub is_entry: bool,
}

impl OutputChunk {
    /// Create a non-entry chunk
    #[inline]
    #[must_use]
    pub fn new(file_name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            code: code.into(),
            is_entry: false,
        }
    }

    /// Create an entry chunk
    #[inline]
    #[must_use]
    pub fn entry(file_name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            is_entry: true,
            ..Self::new(file_name, code)
        }
    }
}

/// An auxiliary output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputAsset {
    /// Output file name, unique within a bundle
    pub file_name: String,
    /// Asset content, text or raw bytes
    pub source: AssetSource,
}

impl OutputAsset {
    /// Create an asset from any content convertible to [`AssetSource`]
    #[inline]
    #[must_use]
    pub fn new(file_name: impl Into<String>, source: impl Into<AssetSource>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }
}

/// A finalized output artifact: chunk or asset
///
/// The two-variant union makes chunk/asset dispatch an exhaustive match
/// instead of a runtime tag probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutputArtifact {
    /// Compiled code chunk
    Chunk(OutputChunk),
    /// Auxiliary file
    Asset(OutputAsset),
}

impl OutputArtifact {
    /// Artifact classification
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ArtifactKind {
        match self {
            OutputArtifact::Chunk(_) => ArtifactKind::Chunk,
            OutputArtifact::Asset(_) => ArtifactKind::Asset,
        }
    }

    /// Output file name
    #[inline]
    #[must_use]
    pub fn file_name(&self) -> &str {
        match self {
            OutputArtifact::Chunk(chunk) => &chunk.file_name,
            OutputArtifact::Asset(asset) => &asset.file_name,
        }
    }

    /// Content viewed as bytes regardless of kind
    #[inline]
    #[must_use]
    pub fn content_bytes(&self) -> &[u8] {
        match self {
            OutputArtifact::Chunk(chunk) => chunk.code.as_bytes(),
            OutputArtifact::Asset(asset) => asset.source.as_bytes(),
        }
    }
}

impl From<OutputChunk> for OutputArtifact {
    #[inline]
    fn from(chunk: OutputChunk) -> Self {
        OutputArtifact::Chunk(chunk)
    }
}

impl From<OutputAsset> for OutputArtifact {
    #[inline]
    fn from(asset: OutputAsset) -> Self {
        OutputArtifact::Asset(asset)
    }
}
