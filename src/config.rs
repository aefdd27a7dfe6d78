//! Configuration loading
//!
//! `defaults/astdump.default.toml` is embedded into the library so that the
//! documented defaults and [`ParserOptions::default`] stay in sync. Callers
//! layer their own files and overrides on top via [`Loader`] before
//! deserializing into [`AstDumpConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/astdump.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AstDumpConfig {
    pub parser: ParserOptions,
    pub output: OutputOptions,
}

/// Options that change how dumps are parsed
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParserOptions {
    /// Maximum parenthesis nesting accepted before parsing starts.
    #[serde(default)]
    pub max_depth: Option<usize>,
    pub quirks: QuirkOptions,
}

/// Workarounds for irregularities observed in real dumps
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuirkOptions {
    pub function_ref_paren: bool,
}

impl Default for QuirkOptions {
    fn default() -> Self {
        Self {
            function_ref_paren: true,
        }
    }
}

/// Rendering knobs for the formatters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputOptions {
    pub treeviz_label_width: usize,
    pub json_pretty: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            treeviz_label_width: 30,
            json_pretty: true,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `parser.max_depth`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AstDumpConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AstDumpConfig, ConfigError> {
    Loader::new().build()
}
