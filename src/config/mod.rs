//! Runner configuration management for `pge.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── deploy     # [deploy]
//! │   └── render     # [render]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # RunnerConfig (this file)
//! ```
//!
//! The file is optional: without it every section takes its defaults.
//! CLI flags override file values.

pub mod section;
pub mod types;

pub use section::{DeployConfig, RenderConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, debug, launch::ResolutionScale, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing pge.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Absolute path to the config file, whether or not it exists
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory relative paths resolve against
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

impl RunnerConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// A missing config file is not an error; defaults apply.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = std::path::absolute(cwd.join(&cli.config))
            .with_context(|| format!("cannot resolve {}", cli.config.display()))?;

        let mut config = if config_path.is_file() {
            Self::from_path(&config_path)?
        } else {
            debug!("config"; "{} not found, using defaults", config_path.display());
            Self::default()
        };

        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(cwd);

        config.config_path = config_path;
        config.apply_cli(cli)?;
        config.finalize(&root);
        config.validate()?;

        Ok(config)
    }

    /// Resolve relative paths against `root`.
    fn finalize(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        self.deploy.normalize(root);
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
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

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("config"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    fn apply_cli(&mut self, cli: &Cli) -> Result<(), ConfigError> {
        let args = cli.deploy_args();
        Self::update_option(&mut self.deploy.source, args.source.as_ref());
        Self::update_option(&mut self.deploy.files_dir, args.files_dir.as_ref());
        Self::update_option(&mut self.deploy.buffer_size, args.buffer_size.as_ref());

        if let Some(factor) = cli.scale() {
            self.render.scale = ResolutionScale::from_factor(factor)
                .map_err(|e| ConfigError::Validation(format!("--scale: {e}")))?;
        }
        Ok(())
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.deploy.validate(&mut diag);
        diag.check()
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> RunnerConfig {
    let (parsed, ignored) = RunnerConfig::parse_with_ignored(content).unwrap();
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
