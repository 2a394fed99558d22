//! Plugin configuration
//!
//! [`EditOptions`] carries the disable switch and the optional per-kind
//! handlers. A kind without a handler passes through unmodified; that is
//! not an error.

use crate::handler::{AssetHandler, ChunkHandler};
use std::fmt;
use std::sync::Arc;

/// Configuration for [`EditPlugin`](crate::EditPlugin)
#[derive(Default, Clone)]
pub struct EditOptions {
    disabled: bool,
    chunk: Option<Arc<dyn ChunkHandler>>,
    asset: Option<Arc<dyn AssetHandler>>,
}

impl EditOptions {
    /// Create options with no handlers and the plugin enabled
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable or re-enable the plugin
    ///
    /// When disabled the pass short-circuits before any iteration: no
    /// handler runs and no artifact is touched.
    #[inline]
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the handler invoked for every code chunk
    #[must_use]
    pub fn on_chunk(mut self, handler: impl ChunkHandler + 'static) -> Self {
        self.chunk = Some(Arc::new(handler));
        self
    }

    /// Set the handler invoked for every auxiliary asset
    #[must_use]
    pub fn on_asset(mut self, handler: impl AssetHandler + 'static) -> Self {
        self.asset = Some(Arc::new(handler));
        self
    }

    /// Whether the plugin is disabled
    #[inline]
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether at least one handler is configured
    #[inline]
    #[must_use]
    pub fn has_handlers(&self) -> bool {
        self.chunk.is_some() || self.asset.is_some()
    }

    /// The configured chunk handler, if any
    #[inline]
    #[must_use]
    pub fn chunk_handler(&self) -> Option<&Arc<dyn ChunkHandler>> {
        self.chunk.as_ref()
    }

    /// The configured asset handler, if any
    #[inline]
    #[must_use]
    pub fn asset_handler(&self) -> Option<&Arc<dyn AssetHandler>> {
        self.asset.as_ref()
    }
}

impl fmt::Debug for EditOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditOptions")
            .field("disabled", &self.disabled)
            .field("chunk", &self.chunk.is_some())
            .field("asset", &self.asset.is_some())
            .finish()
    }
}
