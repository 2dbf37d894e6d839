// crates/rulefire-config/src/config.rs
// ============================================================================
// Module: Rulefire Configuration
// Description: Configuration loading and validation for rulefire.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: rulefire-core, serde, thiserror, toml, tracing
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Unknown keys, oversized files, and non-UTF-8 content are rejected rather
//! than ignored.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use rulefire_core::RulesEngine;
use rulefire_core::RulesEngineParameters;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::logging::LoggingConfig;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub(crate) const DEFAULT_CONFIG_NAME: &str = "rulefire.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "RULEFIRE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Top-level rulefire configuration.
///
/// # Invariants
/// - Every section is optional and falls back to its defaults.
/// - Unknown keys are rejected at every level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulefireConfig {
    /// Engine parameters (`[engine]`).
    pub engine: RulesEngineParameters,
    /// Logging settings (`[logging]`).
    pub logging: LoggingConfig,
}

impl RulefireConfig {
    /// Loads configuration from disk using the default resolution rules:
    /// the explicit `path`, else `RULEFIRE_CONFIG`, else `rulefire.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = config_path(path, env::var(CONFIG_ENV_VAR).ok())?;
        let content = read_config_text(&path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "Loaded rulefire config");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.validate()
    }

    /// Builds a rules engine with the configured parameters and no listeners.
    #[must_use]
    pub fn build_engine(&self) -> RulesEngine {
        RulesEngine::with_parameters(self.engine)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading, validation, or logging setup errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// The logging subscriber could not be installed.
    #[error("logging init error: {0}")]
    Logging(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Picks the config path (explicit, then environment, then the default name)
/// and checks it against the length limits.
pub(crate) fn config_path(
    explicit: Option<&Path>,
    env_path: Option<String>,
) -> Result<PathBuf, ConfigError> {
    let path = match (explicit, env_path) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(env_path)) => PathBuf::from(env_path),
        (None, None) => PathBuf::from(DEFAULT_CONFIG_NAME),
    };
    if path.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "rulefire config path is longer than {MAX_TOTAL_PATH_LENGTH} bytes"
        )));
    }
    let oversized = path
        .components()
        .any(|component| component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH);
    if oversized {
        return Err(ConfigError::Invalid(format!(
            "rulefire config path has a segment longer than {MAX_PATH_COMPONENT_LENGTH} bytes"
        )));
    }
    Ok(path)
}

/// Reads the config file as UTF-8 text, refusing files over the size cap
/// before reading them.
fn read_config_text(path: &Path) -> Result<String, ConfigError> {
    let io_error = |err: std::io::Error| ConfigError::Io(format!("{}: {err}", path.display()));
    let size = fs::metadata(path).map_err(io_error)?.len();
    if size > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::Invalid(format!(
            "rulefire config is larger than {MAX_CONFIG_FILE_SIZE} bytes"
        )));
    }
    let bytes = fs::read(path).map_err(io_error)?;
    String::from_utf8(bytes)
        .map_err(|_| ConfigError::Invalid("rulefire config is not valid UTF-8".to_string()))
}
