// crates/rulefire-config/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers for rulefire-config tests.
// ============================================================================
//! ## Overview
//! Shared test helpers for consistent Result-based assertions.

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
#![allow(dead_code, reason = "Not every test binary uses every helper.")]

use std::error::Error;
use std::fmt;

use rulefire_config::ConfigError;
use rulefire_config::RulefireConfig;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across rulefire integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl TestError {
    /// Creates a new test error with the provided message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { Err(Box::new(TestError::new(message))) }
}

/// Returns an error unless `result` failed with a message containing `needle`.
///
/// # Errors
/// Returns a `TestError` when the result succeeded or the message differs.
pub fn ensure_invalid(result: Result<RulefireConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            ensure(message.contains(needle), format!("error {message} did not contain {needle}"))
        }
        Ok(_) => Err(Box::new(TestError::new("expected invalid config"))),
    }
}
