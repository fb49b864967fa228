//! Configuration loader for the toylang CLI.
//!
//! `defaults/toylang.default.toml` is embedded into the binary so docs and
//! runtime behavior stay in sync. User files are layered on top through
//! [`Loader`] before deserializing into [`ToylangConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/toylang.default.toml");

/// File picked up from the working directory when present
pub const LOCAL_CONFIG_FILE: &str = "toylang.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct ToylangConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Where the program text comes from and how it is normalized
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub path: PathBuf,
    pub lowercase: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// A processing spec string such as `full-simple` or `trace-json`
    pub format: String,
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

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ToylangConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ToylangConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.input.path, PathBuf::from("code.txt"));
        assert!(config.input.lowercase);
        assert_eq!(config.output.format, "full-simple");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "trace-json")
            .expect("override to apply")
            .set_override("input.lowercase", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "trace-json");
        assert!(!config.input.lowercase);
    }

    #[test]
    fn user_file_layers_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[input]\npath = \"programs/main.toy\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.input.path, PathBuf::from("programs/main.toy"));
        assert!(config.input.lowercase);
        assert_eq!(config.output.format, "full-simple");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("definitely/not/here/toylang.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "full-simple");
    }

    #[test]
    fn missing_required_file_errors() {
        let result = Loader::new()
            .with_file("definitely/not/here/toylang.toml")
            .build();
        assert!(result.is_err());
    }
}
