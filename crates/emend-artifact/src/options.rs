//! Normalized output options
//!
//! The pipeline normalizes its output configuration before finalization
//! and hands the result to every hook invocation as read-only pass
//! metadata. Plugins inspect these options; they never modify them.

use serde::{Deserialize, Serialize};

/// Output module format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ES module output
    #[default]
    Esm,
    /// CommonJS output
    Cjs,
    /// Immediately-invoked function expression
    Iife,
    /// Universal module definition
    Umd,
}

impl OutputFormat {
    /// Stable identifier used in diagnostics
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Esm => "esm",
            OutputFormat::Cjs => "cjs",
            OutputFormat::Iife => "iife",
            OutputFormat::Umd => "umd",
        }
    }
}

/// Normalized per-pass output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Output module format
    #[serde(default)]
    pub format: OutputFormat,
    /// Target directory for multi-file output
    #[serde(default)]
    pub dir: Option<String>,
    /// Target file for single-file output
    #[serde(default)]
    pub file: Option<String>,
    /// Whether sourcemap assets are emitted
    #[serde(default)]
    pub sourcemap: bool,
}

impl OutputOptions {
    /// Create default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format
    #[inline]
    #[must_use]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the output directory
    #[inline]
    #[must_use]
    pub fn dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Set the single output file
    #[inline]
    #[must_use]
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Enable or disable sourcemap emission
    #[inline]
    #[must_use]
    pub fn sourcemap(mut self, enabled: bool) -> Self {
        self.sourcemap = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = OutputOptions::new();
        assert_eq!(options.format, OutputFormat::Esm);
        assert!(options.dir.is_none());
        assert!(options.file.is_none());
        assert!(!options.sourcemap);
    }

    #[test]
    fn builder_chain() {
        let options = OutputOptions::new()
            .format(OutputFormat::Cjs)
            .dir("dist")
            .sourcemap(true);
        assert_eq!(options.format, OutputFormat::Cjs);
        assert_eq!(options.dir.as_deref(), Some("dist"));
        assert!(options.sourcemap);
    }

    #[test]
    fn serde_round_trip() {
        let options = OutputOptions::new().format(OutputFormat::Iife).file("out.js");
        let json = serde_json::to_string(&options).unwrap();
        let back: OutputOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let options: OutputOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, OutputOptions::default());
    }
}
