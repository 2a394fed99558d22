//! Bundle-output editing plugin
//!
//! Intercepts a bundler's finalized output artifacts immediately before
//! they are written and lets caller-supplied handlers replace their
//! contents: banner injection, content rewriting, checksum stamping,
//! without forking the bundler.
//!
//! The plugin does not parse or understand code and never adds or removes
//! artifacts; it only rewrites content fields in place. Chunk handlers may
//! replace content with text; asset handlers may replace content with text
//! or raw bytes. Any other outcome is a silent no-op.
//!
//! # Example
//! ```
//! use emend_artifact::{Bundle, OutputChunk, OutputOptions};
//! use emend_plugin::{edit, ChunkView, EditDirective, EditOptions, OutputPlugin};
//!
//! # fn main() -> anyhow::Result<()> {
//! let plugin = edit(EditOptions::new().on_chunk(|view: ChunkView<'_>| {
//!     Ok(EditDirective::text(format!("/* banner */\n{}", view.contents)))
//! }));
//!
//! let mut bundle = Bundle::new();
//! bundle.insert(OutputChunk::new("index.js", "var x=1;"));
//!
//! let options = OutputOptions::new();
//! futures::executor::block_on(plugin.generate_bundle(&options, &mut bundle, true))?;
//!
//! assert_eq!(
//!     bundle.get("index.js").unwrap().content_bytes(),
//!     b"/* banner */\nvar x=1;"
//! );
//! # Ok(())
//! # }
//! ```

pub mod directive;
pub mod handler;
pub mod options;
pub mod plugin;
pub mod view;

pub use directive::EditDirective;
pub use handler::{AssetHandler, ChunkHandler};
pub use options::EditOptions;
pub use plugin::{edit, EditPlugin, OutputPlugin, PLUGIN_NAME};
pub use view::{AssetView, ChunkView, PassContext};
