//! Project configuration management for `pagepack.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [source], [output], [compress]
//! ├── error.rs       # ConfigError
//! ├── util.rs        # config file lookup, path resolution
//! └── mod.rs         # PackConfig (this file)
//! ```
//!
//! The config file is optional: without one every section uses its
//! defaults, resolved against the current directory.

mod error;
pub mod section;
mod util;

pub use error::ConfigError;
pub use section::{CompressConfig, OutputConfig, SourceConfig};

use util::{find_config_file, resolve_against};

use crate::cli::{Cli, Commands, CompileArgs};
use crate::compiler::CompileOptions;
use crate::{debug, warn};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing pagepack.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub compress: CompressConfig,
}

impl PackConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's directory, or cwd if there is none.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self {
                    root: cwd.clone(),
                    ..Self::default()
                }
            }
        };

        config.resolve_paths();
        config.apply_cli(cli, &cwd);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, _) = Self::parse_with_ignored(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            warn!(
                "unknown fields in {} ignored: {}",
                path.display(),
                ignored.join(", ")
            );
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Make config-file paths absolute, relative to the project root.
    fn resolve_paths(&mut self) {
        self.source.web = resolve_against(&self.root, &self.source.web);
        self.source.minified = resolve_against(&self.root, &self.source.minified);
        self.output.dir = resolve_against(&self.root, &self.output.dir);
    }

    /// Apply CLI overrides. CLI paths are relative to cwd.
    fn apply_cli(&mut self, cli: &Cli, cwd: &Path) {
        if let Some(web) = &cli.web {
            self.source.web = resolve_against(cwd, web);
        }
        if let Some(minified) = &cli.minified {
            self.source.minified = resolve_against(cwd, minified);
        }
        if let Some(output) = &cli.output {
            self.output.dir = resolve_against(cwd, output);
        }

        if let Commands::Compile { args } | Commands::Build { args } = &cli.command {
            self.apply_compile_args(args);
        }
    }

    fn apply_compile_args(&mut self, args: &CompileArgs) {
        if let Some(format) = args.format {
            self.output.format = format;
        }
        if let Some(runtime) = &args.runtime {
            self.output.runtime.clone_from(runtime);
        }
        if let Some(marker) = &args.marker {
            self.compress.marker.clone_from(marker);
        }
    }

    /// Validate all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.output.validate().map_err(ConfigError::Validation)?;
        self.compress.validate().map_err(ConfigError::Validation)?;
        Ok(())
    }

    /// Options for one compiler run.
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            source: self.source.minified.clone(),
            output: self.output.dir.clone(),
            format: self.output.format,
            runtime: self.output.runtime.clone(),
            marker: self.compress.marker.clone(),
        }
    }
}

/// Parse a config snippet, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> PackConfig {
    let (parsed, ignored) = PackConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
