//! Per-pass artifact collection
//!
//! A [`Bundle`] holds every artifact produced by one finalization pass,
//! keyed by output file name. Iteration follows insertion order, which is
//! the pipeline's emission order; plugins rely on visiting artifacts in
//! that order.

use crate::artifact::{ArtifactKind, OutputArtifact};
use indexmap::IndexMap;

/// Ordered collection of output artifacts for one build pass
///
/// # Invariants
/// - File names are unique keys; inserting an existing name replaces
///   the previous artifact
/// - Iteration order is key insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    artifacts: IndexMap<String, OutputArtifact>,
}

impl Bundle {
    /// Create an empty bundle
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an artifact under its own file name
    ///
    /// Returns the artifact previously stored under that name, if any.
    pub fn insert(&mut self, artifact: impl Into<OutputArtifact>) -> Option<OutputArtifact> {
        let artifact = artifact.into();
        self.artifacts.insert(artifact.file_name().to_string(), artifact)
    }

    /// Look up an artifact by file name
    #[inline]
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&OutputArtifact> {
        self.artifacts.get(file_name)
    }

    /// Look up an artifact mutably by file name
    #[inline]
    #[must_use]
    pub fn get_mut(&mut self, file_name: &str) -> Option<&mut OutputArtifact> {
        self.artifacts.get_mut(file_name)
    }

    /// Check whether a file name is present
    #[inline]
    #[must_use]
    pub fn contains(&self, file_name: &str) -> bool {
        self.artifacts.contains_key(file_name)
    }

    /// Iterate file names in insertion order
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.artifacts.keys().map(String::as_str)
    }

    /// Iterate `(file_name, artifact)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OutputArtifact)> {
        self.artifacts.iter().map(|(name, artifact)| (name.as_str(), artifact))
    }

    /// Number of artifacts in the bundle
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Check if the bundle is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Number of code chunks
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.count_kind(ArtifactKind::Chunk)
    }

    /// Number of auxiliary assets
    #[must_use]
    pub fn asset_count(&self) -> usize {
        self.count_kind(ArtifactKind::Asset)
    }

    fn count_kind(&self, kind: ArtifactKind) -> usize {
        self.artifacts.values().filter(|a| a.kind() == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{OutputAsset, OutputChunk};
    use pretty_assertions::assert_eq;

    fn sample() -> Bundle {
        let mut bundle = Bundle::new();
        bundle.insert(OutputChunk::new("index.js", "var x=1;"));
        bundle.insert(OutputAsset::new("index.js.map", "{}"));
        bundle.insert(OutputChunk::new("vendor.js", "var v=2;"));
        bundle
    }

    #[test]
    fn insert_keys_by_file_name() {
        let bundle = sample();
        assert!(bundle.contains("index.js"));
        assert!(bundle.contains("index.js.map"));
        assert_eq!(bundle.len(), 3);
    }

    #[test]
    fn insert_replaces_existing_name() {
        let mut bundle = sample();
        let previous = bundle.insert(OutputChunk::new("index.js", "var x=2;"));
        assert!(previous.is_some());
        assert_eq!(bundle.len(), 3);
        match bundle.get("index.js").unwrap() {
            OutputArtifact::Chunk(chunk) => assert_eq!(chunk.code, "var x=2;"),
            OutputArtifact::Asset(_) => panic!("expected chunk"),
        }
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let bundle = sample();
        let names: Vec<&str> = bundle.file_names().collect();
        assert_eq!(names, vec!["index.js", "index.js.map", "vendor.js"]);
    }

    #[test]
    fn kind_counts() {
        let bundle = sample();
        assert_eq!(bundle.chunk_count(), 2);
        assert_eq!(bundle.asset_count(), 1);
    }

    #[test]
    fn get_mut_rewrites_in_place() {
        let mut bundle = sample();
        if let Some(OutputArtifact::Chunk(chunk)) = bundle.get_mut("vendor.js") {
            chunk.code = "var v=3;".to_string();
        }
        assert_eq!(bundle.get("vendor.js").unwrap().content_bytes(), b"var v=3;");
    }

    #[test]
    fn empty_bundle() {
        let bundle = Bundle::new();
        assert!(bundle.is_empty());
        assert_eq!(bundle.file_names().count(), 0);
    }
}
