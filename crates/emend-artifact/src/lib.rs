//! Output artifact model for the emend workspace
//!
//! Defines the data exchanged between a bundler pipeline and its output
//! plugins: the [`OutputArtifact`] union (code chunk or auxiliary asset),
//! the per-pass [`Bundle`] collection keyed by file name, and the
//! normalized [`OutputOptions`] the pipeline hands to finalization hooks.
//!
//! This crate is a pure data model: it performs no I/O and drives no
//! pipeline behavior.

pub mod artifact;
pub mod bundle;
pub mod options;
pub mod source;

pub use artifact::{ArtifactKind, OutputArtifact, OutputAsset, OutputChunk};
pub use bundle::Bundle;
pub use options::{OutputFormat, OutputOptions};
pub use source::{AssetSource, SourceError};
