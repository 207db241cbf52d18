//! Configuration for the y2p converter.
//!
//! Settings resolve in four layers, later ones winning:
//!
//! 1. `defaults/y2p.default.toml`, compiled into the crate
//! 2. `y2p.toml` in the working directory, if present ([`LOCAL_CONFIG_FILE`])
//! 3. the file passed with `--config`, which must exist
//! 4. command-line flags such as `--debug`, applied as overrides
//!
//! [`Loader`] adds the layers in that order and deserializes into [`Y2pConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/y2p.default.toml");

/// Name of the optional per-directory configuration file
pub const LOCAL_CONFIG_FILE: &str = "y2p.toml";

/// Resolved settings for one run of the converter
#[derive(Debug, Clone, Deserialize)]
pub struct Y2pConfig {
    pub convert: ConvertConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Emit the parse trace instead of the PLIST document
    pub debug: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Terminate the printed document with a newline
    pub trailing_newline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub filter: String,
}

/// Stacks configuration layers on top of the compiled-in defaults
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Layer 1 only
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a file the user asked for explicitly; `build` fails if it is missing
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add a file that is only read when it exists, like the local `y2p.toml`
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key, e.g. `convert.debug`, above every file layer
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<Y2pConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings with no file or flag applied
pub fn load_defaults() -> Result<Y2pConfig, ConfigError> {
    Loader::new().build()
}
