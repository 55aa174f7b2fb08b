//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/evenodd/evenodd.toml`
//! 3. Explicit config file (`--config <FILE>`)
//! 4. Environment variables: `EVENODD_*` prefix
//! 5. Command-line flags (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::SortStrategy;

/// Unified configuration for evenodd.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Seed for a reproducible random source (default: OS entropy)
    pub seed: Option<u64>,
    /// Sorting algorithm for the parity subsets
    pub sort: SortStrategy,
    /// Largest count accepted before reporting an allocation failure
    pub max_count: Option<usize>,
}

/// Raw settings for intermediate parsing (every field optional).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub seed: Option<u64>,
    pub sort: Option<SortStrategy>,
    pub max_count: Option<usize>,
}

/// Get the XDG config directory for evenodd.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "evenodd").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("evenodd.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Read an optional key, treating "not set" as `None` and bad values as errors.
fn optional<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            seed: overlay.seed.or(self.seed),
            sort: overlay.sort.unwrap_or(self.sort),
            max_count: overlay.max_count.or(self.max_count),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional extra config file; it must exist when given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|p| p.exists());
        Self::load_from(global.as_deref(), config_file)
    }

    /// Layered load with an explicit global file path (no XDG lookup).
    pub fn load_from(
        global: Option<&Path>,
        config_file: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(path) = global {
            debug!("loading global config: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            debug!("loading config file: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        Ok(current)
    }

    /// Apply EVENODD_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("EVENODD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        let sort = optional(config.get_string("sort"))?
            .map(|s| s.parse::<SortStrategy>())
            .transpose()?;

        let raw = RawSettings {
            seed: optional(config.get::<u64>("seed"))?,
            sort,
            max_count: optional(config.get::<usize>("max_count"))?,
        };
        Ok(settings.merge_with(&raw))
    }

    /// Render settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
