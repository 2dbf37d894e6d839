// crates/rulefire-config/tests/logging.rs
// =============================================================================
// Module: Logging Setup Tests
// Description: Global subscriber installation from logging config.
// Purpose: Ensure a second installation is reported instead of ignored.
// =============================================================================
//! Logging setup tests for rulefire-config. This binary holds a single test
//! because the subscriber is process-global.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use rulefire_config::ConfigError;
use rulefire_config::LogFormat;
use rulefire_config::LoggingConfig;
use rulefire_config::init_logging;
use support::TestResult;
use support::ensure;

#[test]
fn subscriber_installs_once() -> TestResult {
    let config = LoggingConfig {
        format: LogFormat::Json,
        filter: Some("rulefire_core=trace".to_string()),
        ..LoggingConfig::default()
    };
    init_logging(&config)?;
    tracing::info!(target: "rulefire_core", "subscriber installed");
    let second = init_logging(&LoggingConfig::default());
    ensure(matches!(second, Err(ConfigError::Logging(_))), "Second install must fail")
}
