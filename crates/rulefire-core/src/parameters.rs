// crates/rulefire-core/src/parameters.rs
// ============================================================================
// Module: Rules Engine Parameters
// Description: Termination policies and priority threshold for a firing pass.
// Purpose: Let callers stop a pass early without reshaping the rule set.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Parameters layer four independent short-circuit policies over the linear
//! scan performed by [`crate::RulesEngine::fire`]: a priority threshold and
//! three skip flags. They are read-only for the duration of a pass.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default priority threshold: every representable priority is eligible.
pub const DEFAULT_RULE_PRIORITY_THRESHOLD: i32 = i32::MAX;

// ============================================================================
// SECTION: Parameters
// ============================================================================

/// Engine parameters controlling loop termination.
///
/// # Invariants
/// - Rules with `priority > priority_threshold` are never evaluated by `fire`;
///   the first such rule ends the pass.
/// - Skip flags are independent and may be combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesEngineParameters {
    /// Highest priority still eligible for evaluation.
    pub priority_threshold: i32,
    /// Stop after the first rule whose action succeeds.
    pub skip_on_first_applied_rule: bool,
    /// Stop after the first rule whose action fails.
    pub skip_on_first_failed_rule: bool,
    /// Stop at the first rule that evaluates to false or fails to evaluate.
    pub skip_on_first_non_triggered_rule: bool,
}

impl RulesEngineParameters {
    /// Returns parameters with the default threshold and all skip flags off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            priority_threshold: DEFAULT_RULE_PRIORITY_THRESHOLD,
            skip_on_first_applied_rule: false,
            skip_on_first_failed_rule: false,
            skip_on_first_non_triggered_rule: false,
        }
    }

    /// Sets the priority threshold.
    #[must_use]
    pub const fn with_priority_threshold(mut self, priority_threshold: i32) -> Self {
        self.priority_threshold = priority_threshold;
        self
    }

    /// Sets the skip-on-first-applied-rule flag.
    #[must_use]
    pub const fn with_skip_on_first_applied_rule(mut self, skip: bool) -> Self {
        self.skip_on_first_applied_rule = skip;
        self
    }

    /// Sets the skip-on-first-failed-rule flag.
    #[must_use]
    pub const fn with_skip_on_first_failed_rule(mut self, skip: bool) -> Self {
        self.skip_on_first_failed_rule = skip;
        self
    }

    /// Sets the skip-on-first-non-triggered-rule flag.
    #[must_use]
    pub const fn with_skip_on_first_non_triggered_rule(mut self, skip: bool) -> Self {
        self.skip_on_first_non_triggered_rule = skip;
        self
    }
}

impl Default for RulesEngineParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RulesEngineParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Engine parameters {{ skip_on_first_applied_rule = {}, skip_on_first_non_triggered_rule = {}, skip_on_first_failed_rule = {}, priority_threshold = {} }}",
            self.skip_on_first_applied_rule,
            self.skip_on_first_non_triggered_rule,
            self.skip_on_first_failed_rule,
            self.priority_threshold
        )
    }
}
