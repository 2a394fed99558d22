//! The edit plugin and its finalization pass
//!
//! [`EditPlugin`] hooks the pipeline's bundle-finalization step: it runs
//! once per build pass, after every artifact is generated and before any
//! of them persist. The pass visits artifacts in bundle order, dispatches
//! the handler matching each artifact's kind, and applies the returned
//! directive under the per-kind acceptance rules.

use crate::directive::EditDirective;
use crate::options::EditOptions;
use crate::view::{AssetView, ChunkView, PassContext};
use anyhow::Result;
use async_trait::async_trait;
use emend_artifact::{AssetSource, Bundle, OutputArtifact, OutputOptions};

/// Name the edit plugin registers under
pub const PLUGIN_NAME: &str = "edit";

/// Finalization hook a bundler pipeline invokes for its output plugins
///
/// The pipeline calls [`generate_bundle`](OutputPlugin::generate_bundle)
/// exactly once per build pass and blocks persistence until the returned
/// future resolves. An error fails the whole pass; the pipeline performs
/// no retry.
#[async_trait]
pub trait OutputPlugin: Send + Sync {
    /// Fixed plugin name, reported in pipeline diagnostics
    fn name(&self) -> &'static str;

    /// Process one finalized bundle before it persists
    ///
    /// `is_write` is false when the pass stays in memory (a dry run).
    ///
    /// # Errors
    /// Any error aborts the pass and propagates to the pipeline.
    async fn generate_bundle(
        &self,
        options: &OutputOptions,
        bundle: &mut Bundle,
        is_write: bool,
    ) -> Result<()>;
}

/// Plugin that lets callers rewrite finalized output artifacts
///
/// Construct with [`edit`] or [`EditPlugin::new`], passing the handlers
/// in [`EditOptions`].
#[derive(Debug)]
pub struct EditPlugin {
    options: EditOptions,
}

impl EditPlugin {
    /// Create the plugin from its configuration
    #[inline]
    #[must_use]
    pub fn new(options: EditOptions) -> Self {
        Self { options }
    }

    /// The plugin's configuration
    #[inline]
    #[must_use]
    pub fn options(&self) -> &EditOptions {
        &self.options
    }
}

/// Create an [`EditPlugin`] from its options
#[inline]
#[must_use]
pub fn edit(options: EditOptions) -> EditPlugin {
    EditPlugin::new(options)
}

#[async_trait]
impl OutputPlugin for EditPlugin {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    async fn generate_bundle(
        &self,
        options: &OutputOptions,
        bundle: &mut Bundle,
        is_write: bool,
    ) -> Result<()> {
        if self.options.is_disabled() {
            tracing::debug!("Plugin disabled, skipping {} artifacts", bundle.len());
            return Ok(());
        }
        // Nothing to dispatch; identical observable behavior to iterating.
        if !self.options.has_handlers() {
            return Ok(());
        }

        let file_names: Vec<String> = bundle.file_names().map(str::to_owned).collect();
        for file_name in file_names {
            let directive = {
                let Some(artifact) = bundle.get(&file_name) else {
                    continue;
                };
                let ctx = PassContext { options, is_write };
                match artifact {
                    OutputArtifact::Chunk(chunk) => {
                        let Some(handler) = self.options.chunk_handler() else {
                            continue;
                        };
                        let view = ChunkView {
                            file_name: &file_name,
                            contents: &chunk.code,
                            chunk,
                            bundle,
                            ctx,
                        };
                        handler.handle(view).await?
                    }
                    OutputArtifact::Asset(asset) => {
                        let Some(handler) = self.options.asset_handler() else {
                            continue;
                        };
                        let view = AssetView {
                            file_name: &file_name,
                            contents: &asset.source,
                            asset,
                            bundle,
                            ctx,
                        };
                        handler.handle(view).await?
                    }
                }
            };
            if let Some(artifact) = bundle.get_mut(&file_name) {
                apply(&file_name, artifact, directive);
            }
        }
        Ok(())
    }
}

/// Apply a directive under the per-kind acceptance rules
///
/// Chunks accept only text; assets accept text or raw bytes. A directive
/// the kind does not accept keeps the existing content and is not an
/// error.
fn apply(file_name: &str, artifact: &mut OutputArtifact, directive: EditDirective) {
    match (artifact, directive) {
        (_, EditDirective::Keep) => {}
        (OutputArtifact::Chunk(chunk), EditDirective::Text(code)) => {
            tracing::trace!("Replacing chunk contents: {}", file_name);
            chunk.code = code;
        }
        (OutputArtifact::Chunk(_), EditDirective::Raw(_)) => {
            // Chunk content is contractually textual.
            tracing::debug!("Ignoring binary replacement for chunk: {}", file_name);
        }
        (OutputArtifact::Asset(asset), EditDirective::Text(text)) => {
            tracing::trace!("Replacing asset contents: {}", file_name);
            asset.source = AssetSource::Text(text);
        }
        (OutputArtifact::Asset(asset), EditDirective::Raw(bytes)) => {
            tracing::trace!("Replacing asset contents: {}", file_name);
            asset.source = AssetSource::Raw(bytes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emend_artifact::{OutputAsset, OutputChunk};
    use pretty_assertions::assert_eq;

    fn chunk_artifact(code: &str) -> OutputArtifact {
        OutputArtifact::Chunk(OutputChunk::new("index.js", code))
    }

    fn asset_artifact(source: impl Into<AssetSource>) -> OutputArtifact {
        OutputArtifact::Asset(OutputAsset::new("index.js.map", source))
    }

    #[test]
    fn keep_leaves_chunk_untouched() {
        let mut artifact = chunk_artifact("var x=1;");
        apply("index.js", &mut artifact, EditDirective::Keep);
        assert_eq!(artifact.content_bytes(), b"var x=1;");
    }

    #[test]
    fn text_replaces_chunk_code() {
        let mut artifact = chunk_artifact("var x=1;");
        apply("index.js", &mut artifact, EditDirective::text("var x=2;"));
        assert_eq!(artifact.content_bytes(), b"var x=2;");
    }

    #[test]
    fn raw_is_rejected_for_chunks() {
        let mut artifact = chunk_artifact("var x=1;");
        apply("index.js", &mut artifact, EditDirective::raw(vec![0x00, 0x01]));
        assert_eq!(artifact.content_bytes(), b"var x=1;");
    }

    #[test]
    fn text_replaces_asset_source() {
        let mut artifact = asset_artifact("{}");
        apply("index.js.map", &mut artifact, EditDirective::text("{\"v\":3}"));
        assert_eq!(artifact.content_bytes(), b"{\"v\":3}");
        let OutputArtifact::Asset(asset) = &artifact else {
            panic!("expected asset");
        };
        assert!(asset.source.is_text());
    }

    #[test]
    fn raw_replaces_asset_source() {
        let mut artifact = asset_artifact("{}");
        apply("index.js.map", &mut artifact, EditDirective::raw(vec![0x7b, 0x7d]));
        let OutputArtifact::Asset(asset) = &artifact else {
            panic!("expected asset");
        };
        assert_eq!(asset.source, AssetSource::Raw(vec![0x7b, 0x7d]));
    }

    #[test]
    fn plugin_name_is_fixed() {
        let plugin = edit(EditOptions::new());
        assert_eq!(plugin.name(), PLUGIN_NAME);
        assert_eq!(OutputPlugin::name(&plugin), "edit");
    }
}
