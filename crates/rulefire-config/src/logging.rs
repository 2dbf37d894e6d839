// crates/rulefire-config/src/logging.rs
// ============================================================================
// Module: Rulefire Logging Setup
// Description: Logging settings and global `tracing` subscriber installation.
// Purpose: Route engine diagnostics to stderr as text or JSON lines.
// Dependencies: serde, tracing, tracing-subscriber
// ============================================================================

//! ## Overview
//! The engine only emits `tracing` events; the host decides where they go.
//! [`init_logging`] installs a process-wide `fmt` subscriber driven by
//! [`LoggingConfig`]. An explicit `filter` directive takes precedence over
//! `level`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::ConfigError;

// ============================================================================
// SECTION: Logging Types
// ============================================================================

/// Minimum severity emitted when no filter directive is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Every event, including the per-rule decisions of a pass.
    Trace,
    /// Debug and above.
    Debug,
    /// Info and above.
    #[default]
    Info,
    /// Warnings and errors.
    Warn,
    /// Errors only.
    Error,
}

impl LogLevel {
    /// Returns the matching `tracing` level.
    #[must_use]
    pub const fn as_level(self) -> Level {
        match self {
            Self::Trace => Level::TRACE,
            Self::Debug => Level::DEBUG,
            Self::Info => Level::INFO,
            Self::Warn => Level::WARN,
            Self::Error => Level::ERROR,
        }
    }
}

/// Output encoding for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Logging configuration (`[logging]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level when `filter` is unset.
    pub level: LogLevel,
    /// Output encoding.
    pub format: LogFormat,
    /// Optional `EnvFilter` directive, e.g. `rulefire_core=trace`.
    pub filter: Option<String>,
}

impl LoggingConfig {
    /// Validates the filter directive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the directive is empty or does
    /// not parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.env_filter().map(|_| ())
    }

    /// Builds the subscriber filter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the directive is empty or does
    /// not parse.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        match self.filter.as_deref() {
            Some(directive) if directive.trim().is_empty() => {
                Err(ConfigError::Invalid("logging.filter must be non-empty".to_string()))
            }
            Some(directive) => EnvFilter::try_new(directive).map_err(|err| {
                ConfigError::Invalid(format!("logging.filter is invalid: {err}"))
            }),
            None => Ok(EnvFilter::default()
                .add_directive(LevelFilter::from_level(self.level.as_level()).into())),
        }
    }
}

// ============================================================================
// SECTION: Subscriber Installation
// ============================================================================

/// Installs the global `tracing` subscriber described by `config`.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] for a bad filter directive and
/// [`ConfigError::Logging`] when a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_writer(std::io::stderr);
    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|err| ConfigError::Logging(err.to_string()))
}
