//! Handler traits
//!
//! Callers supply one handler per artifact kind. Handlers may suspend;
//! the pass awaits each invocation before moving to the next artifact.
//! A handler error aborts the rest of the pass and propagates to the
//! pipeline unchanged.

use crate::directive::EditDirective;
use crate::view::{AssetView, ChunkView};
use anyhow::Result;
use async_trait::async_trait;

/// Handler invoked once per code chunk in a pass
///
/// Return [`EditDirective::Text`] to replace the chunk source,
/// [`EditDirective::Keep`] for no change. [`EditDirective::Raw`] is
/// ignored for chunks: chunk content is contractually textual.
#[async_trait]
pub trait ChunkHandler: Send + Sync {
    /// Inspect one chunk and decide its replacement
    async fn handle(&self, view: ChunkView<'_>) -> Result<EditDirective>;
}

/// Handler invoked once per auxiliary asset in a pass
///
/// Both [`EditDirective::Text`] and [`EditDirective::Raw`] replace the
/// asset content; [`EditDirective::Keep`] leaves it untouched.
#[async_trait]
pub trait AssetHandler: Send + Sync {
    /// Inspect one asset and decide its replacement
    async fn handle(&self, view: AssetView<'_>) -> Result<EditDirective>;
}

// Any synchronous closure is a handler; async handlers implement the
// trait directly.
#[async_trait]
impl<F> ChunkHandler for F
where
    F: Fn(ChunkView<'_>) -> Result<EditDirective> + Send + Sync,
{
    async fn handle(&self, view: ChunkView<'_>) -> Result<EditDirective> {
        self(view)
    }
}

#[async_trait]
impl<F> AssetHandler for F
where
    F: Fn(AssetView<'_>) -> Result<EditDirective> + Send + Sync,
{
    async fn handle(&self, view: AssetView<'_>) -> Result<EditDirective> {
        self(view)
    }
}
