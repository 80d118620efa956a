//! Shared configuration loader for the blockmd toolchain.
//!
//! `defaults/blockmd.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`BlockmdConfig`].

use blockmd_babel::faq::{FaqRules, MismatchPolicy};
use blockmd_babel::formats::clean_json::CleanJsonOptions;
use blockmd_babel::formats::markdown::MarkdownRules;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/blockmd.default.toml");

/// Top-level configuration consumed by blockmd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockmdConfig {
    pub markdown: MarkdownConfig,
    pub faq: FaqConfig,
    pub clean_json: CleanJsonConfig,
}

/// Mirrors the knobs exposed by the Markdown serializer.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub unordered_marker: char,
}

impl From<&MarkdownConfig> for MarkdownRules {
    fn from(config: &MarkdownConfig) -> Self {
        MarkdownRules {
            unordered_marker: config.unordered_marker,
        }
    }
}

/// Mirrors the knobs exposed by the FAQ sectioner.
#[derive(Debug, Clone, Deserialize)]
pub struct FaqConfig {
    pub question_level: u8,
    pub mismatch: MismatchConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum MismatchConfig {
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "truncate")]
    Truncate,
}

impl From<&FaqConfig> for FaqRules {
    fn from(config: &FaqConfig) -> Self {
        FaqRules {
            question_level: config.question_level,
            mismatch: match config.mismatch {
                MismatchConfig::Error => MismatchPolicy::Error,
                MismatchConfig::Truncate => MismatchPolicy::Truncate,
            },
        }
    }
}

/// Mirrors the knobs exposed by the clean JSON serializer.
#[derive(Debug, Clone, Deserialize)]
pub struct CleanJsonConfig {
    pub version: String,
    pub pretty: bool,
}

impl From<&CleanJsonConfig> for CleanJsonOptions {
    fn from(config: &CleanJsonConfig) -> Self {
        CleanJsonOptions {
            version: config.version.clone(),
            pretty: config.pretty,
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BlockmdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BlockmdConfig, ConfigError> {
    Loader::new().build()
}
