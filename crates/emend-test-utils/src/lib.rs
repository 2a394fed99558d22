//! Testing utilities for the emend workspace
//!
//! Shared fixtures: sample chunks, assets, and prebuilt bundles.

#![allow(missing_docs)]

use emend_artifact::{AssetSource, Bundle, OutputAsset, OutputChunk, OutputFormat, OutputOptions};

pub fn chunk(file_name: &str, code: &str) -> OutputChunk {
    OutputChunk::new(file_name, code)
}

pub fn entry_chunk(file_name: &str, code: &str) -> OutputChunk {
    OutputChunk::entry(file_name, code)
}

pub fn text_asset(file_name: &str, text: &str) -> OutputAsset {
    OutputAsset::new(file_name, text)
}

pub fn raw_asset(file_name: &str, bytes: &[u8]) -> OutputAsset {
    OutputAsset::new(file_name, AssetSource::Raw(bytes.to_vec()))
}

/// One entry chunk plus its sourcemap asset
pub fn sample_bundle() -> Bundle {
    let mut bundle = Bundle::new();
    bundle.insert(entry_chunk("index.js", "var x=1;"));
    bundle.insert(text_asset("index.js.map", "{}"));
    bundle
}

/// Two chunks and two assets, in a known insertion order
pub fn mixed_bundle() -> Bundle {
    let mut bundle = Bundle::new();
    bundle.insert(entry_chunk("index.js", "var x=1;"));
    bundle.insert(text_asset("index.js.map", "{}"));
    bundle.insert(chunk("vendor.js", "var v=2;"));
    bundle.insert(raw_asset("logo.png", &[0x89, 0x50, 0x4e, 0x47]));
    bundle
}

/// Options for a persisting pass with sourcemaps enabled
pub fn write_options() -> OutputOptions {
    OutputOptions::new().format(OutputFormat::Esm).dir("dist").sourcemap(true)
}
