//! Artifact views
//!
//! A view is the read-only snapshot handed to a handler: the artifact's
//! identity and current content, the artifact record itself, the whole
//! bundle (so handlers can inspect sibling artifacts), and ambient pass
//! metadata. Views borrow from the pass and must not outlive it;
//! replacement happens through the editor after the handler returns, never
//! through the view.

use emend_artifact::{AssetSource, Bundle, OutputAsset, OutputChunk, OutputOptions};

/// Ambient metadata for one finalization pass
#[derive(Debug, Clone, Copy)]
pub struct PassContext<'a> {
    /// Normalized output options for this pass
    pub options: &'a OutputOptions,
    /// Whether this pass will persist to storage (false for dry runs)
    pub is_write: bool,
}

/// View of one code chunk during a pass
#[derive(Debug, Clone, Copy)]
pub struct ChunkView<'a> {
    /// Output file name of the chunk
    pub file_name: &'a str,
    /// Current chunk source text
    pub contents: &'a str,
    /// The full chunk record
    pub chunk: &'a OutputChunk,
    /// Every artifact in the pass, keyed by file name
    pub bundle: &'a Bundle,
    /// Pass metadata
    pub ctx: PassContext<'a>,
}

/// View of one auxiliary asset during a pass
#[derive(Debug, Clone, Copy)]
pub struct AssetView<'a> {
    /// Output file name of the asset
    pub file_name: &'a str,
    /// Current asset content
    pub contents: &'a AssetSource,
    /// The full asset record
    pub asset: &'a OutputAsset,
    /// Every artifact in the pass, keyed by file name
    pub bundle: &'a Bundle,
    /// Pass metadata
    pub ctx: PassContext<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use emend_artifact::OutputArtifact;

    #[test]
    fn chunk_view_exposes_siblings() {
        let mut bundle = Bundle::new();
        bundle.insert(OutputChunk::new("index.js", "var x=1;"));
        bundle.insert(OutputAsset::new("index.js.map", "{}"));
        let options = OutputOptions::new();

        let Some(OutputArtifact::Chunk(chunk)) = bundle.get("index.js") else {
            panic!("expected chunk");
        };
        let view = ChunkView {
            file_name: "index.js",
            contents: &chunk.code,
            chunk,
            bundle: &bundle,
            ctx: PassContext {
                options: &options,
                is_write: true,
            },
        };

        assert_eq!(view.contents, "var x=1;");
        assert_eq!(view.bundle.len(), 2);
        assert!(view.bundle.contains("index.js.map"));
        assert!(view.ctx.is_write);
    }
}
