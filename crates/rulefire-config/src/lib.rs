// crates/rulefire-config/src/lib.rs
// ============================================================================
// Module: Rulefire Config Library
// Description: Configuration model, load guards, and logging setup.
// Purpose: Single source of truth for rulefire.toml semantics.
// Dependencies: rulefire-core, serde, toml, tracing-subscriber
// ============================================================================

//! ## Overview
//! `rulefire-config` reads engine parameters and logging settings from a TOML
//! file, validates them fail-closed, and turns them into a ready
//! [`rulefire_core::RulesEngine`] plus an installed `tracing` subscriber.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod logging;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ConfigError;
pub use config::RulefireConfig;
pub use logging::LogFormat;
pub use logging::LogLevel;
pub use logging::LoggingConfig;
pub use logging::init_logging;
