// crates/rulefire-core/tests/support/mocks.rs
// ============================================================================
// Module: Mock Rules and Listeners
// Description: Scripted rules and recording listeners for engine tests.
// ============================================================================
//! ## Overview
//! Every mock writes into a shared [`Journal`] so tests can assert the exact
//! interleaving of rule calls and listener callbacks.

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
#![allow(dead_code, reason = "Not every test binary uses every mock.")]

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use rulefire_core::Facts;
use rulefire_core::ListenerError;
use rulefire_core::Rule;
use rulefire_core::RuleError;
use rulefire_core::RuleListener;
use rulefire_core::RuleResult;
use rulefire_core::Rules;
use rulefire_core::RulesEngineListener;

// ========================================================================
// Journal
// ========================================================================

/// Shared, ordered record of calls.
#[derive(Clone, Default)]
pub struct Journal {
    /// Recorded entries in call order.
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    /// Creates an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).push(entry.into());
    }

    /// Returns a snapshot of every entry.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Returns entries starting with `prefix`, with the prefix stripped.
    pub fn with_prefix(&self, prefix: &str) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|entry| entry.strip_prefix(prefix).map(str::to_string))
            .collect()
    }
}

// ========================================================================
// Scripted Rule
// ========================================================================

/// Rule with a scripted evaluation and execution outcome.
///
/// Evaluations are journaled as `evaluate:<name>` and executions as
/// `execute:<name>`; a successful execution also sets the fact
/// `executed.<name>` to `true`.
pub struct ScriptedRule {
    /// Rule name.
    name: String,
    /// Rule priority.
    priority: i32,
    /// Scripted evaluation outcome.
    evaluation: RuleResult<bool>,
    /// Scripted execution outcome.
    execution: RuleResult,
    /// Shared call journal.
    journal: Journal,
}

impl ScriptedRule {
    /// Creates a rule that evaluates to true and executes successfully.
    pub fn new(name: &str, priority: i32, journal: &Journal) -> Self {
        Self {
            name: name.to_string(),
            priority,
            evaluation: Ok(true),
            execution: Ok(()),
            journal: journal.clone(),
        }
    }

    /// Makes the rule evaluate to `result`.
    pub fn evaluating(mut self, result: bool) -> Self {
        self.evaluation = Ok(result);
        self
    }

    /// Makes the rule condition fail with `message`.
    pub fn failing_evaluation(mut self, message: &str) -> Self {
        self.evaluation = Err(RuleError::condition(message));
        self
    }

    /// Makes the rule action fail with `message`.
    pub fn failing_execution(mut self, message: &str) -> Self {
        self.execution = Err(RuleError::action(message));
        self
    }
}

impl Rule for ScriptedRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "scripted rule"
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn evaluate(&self, _facts: &Facts) -> RuleResult<bool> {
        self.journal.record(format!("evaluate:{}", self.name));
        self.evaluation.clone()
    }

    fn execute(&self, facts: &mut Facts) -> RuleResult {
        self.journal.record(format!("execute:{}", self.name));
        self.execution.clone()?;
        facts.put(format!("executed.{}", self.name), true)?;
        Ok(())
    }
}

/// Builds a rule set from scripted rules, in registration order.
pub fn rule_set(rules: Vec<ScriptedRule>) -> Rules {
    let mut set = Rules::new();
    for rule in rules {
        set.register(rule).unwrap();
    }
    set
}

// ========================================================================
// Recording Rule Listener
// ========================================================================

/// Rule listener that journals every callback.
///
/// Entries look like `before_evaluate:<rule>`, `after_evaluate:<rule>:<bool>`,
/// `on_evaluation_error:<rule>`, `before_execute:<rule>`, `on_success:<rule>`
/// and `on_failure:<rule>`.
pub struct RecordingListener {
    /// Shared call journal.
    journal: Journal,
    /// Rules vetoed in `before_evaluate`.
    vetoed: BTreeSet<String>,
    /// Callback name that returns an error instead of recording.
    failing_callback: Option<&'static str>,
}

impl RecordingListener {
    /// Creates a listener that allows every rule.
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            vetoed: BTreeSet::new(),
            failing_callback: None,
        }
    }

    /// Vetoes evaluation of the named rule.
    pub fn vetoing(mut self, rule: &str) -> Self {
        self.vetoed.insert(rule.to_string());
        self
    }

    /// Makes the named callback fail.
    pub fn failing_on(mut self, callback: &'static str) -> Self {
        self.failing_callback = Some(callback);
        self
    }

    /// Journals a callback or fails when it is the scripted failure.
    fn visit(&self, callback: &'static str, entry: String) -> Result<(), ListenerError> {
        if self.failing_callback == Some(callback) {
            return Err(ListenerError::new(format!("{callback} failed")));
        }
        self.journal.record(entry);
        Ok(())
    }
}

impl RuleListener for RecordingListener {
    fn before_evaluate(&self, rule: &dyn Rule, _facts: &Facts) -> Result<bool, ListenerError> {
        self.visit("before_evaluate", format!("before_evaluate:{}", rule.name()))?;
        Ok(!self.vetoed.contains(rule.name()))
    }

    fn after_evaluate(
        &self,
        rule: &dyn Rule,
        _facts: &Facts,
        evaluation_result: bool,
    ) -> Result<(), ListenerError> {
        self.visit("after_evaluate", format!("after_evaluate:{}:{evaluation_result}", rule.name()))
    }

    fn on_evaluation_error(
        &self,
        rule: &dyn Rule,
        _facts: &Facts,
        _error: &RuleError,
    ) -> Result<(), ListenerError> {
        self.visit("on_evaluation_error", format!("on_evaluation_error:{}", rule.name()))
    }

    fn before_execute(&self, rule: &dyn Rule, _facts: &Facts) -> Result<(), ListenerError> {
        self.visit("before_execute", format!("before_execute:{}", rule.name()))
    }

    fn on_success(&self, rule: &dyn Rule, _facts: &Facts) -> Result<(), ListenerError> {
        self.visit("on_success", format!("on_success:{}", rule.name()))
    }

    fn on_failure(
        &self,
        rule: &dyn Rule,
        _facts: &Facts,
        _error: &RuleError,
    ) -> Result<(), ListenerError> {
        self.visit("on_failure", format!("on_failure:{}", rule.name()))
    }
}

// ========================================================================
// Recording Engine Listener
// ========================================================================

/// Engine listener that journals `engine_before:<n>` and `engine_after:<n>`,
/// where `<n>` is the number of rules in the pass.
pub struct RecordingEngineListener {
    /// Shared call journal.
    journal: Journal,
    /// Whether `before_evaluate` fails.
    fail_before: bool,
}

impl RecordingEngineListener {
    /// Creates a recording engine listener.
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            fail_before: false,
        }
    }

    /// Makes `before_evaluate` fail.
    pub fn failing_before(mut self) -> Self {
        self.fail_before = true;
        self
    }
}

impl RulesEngineListener for RecordingEngineListener {
    fn before_evaluate(&self, rules: &Rules, _facts: &Facts) -> Result<(), ListenerError> {
        if self.fail_before {
            return Err(ListenerError::new("engine before failed"));
        }
        self.journal.record(format!("engine_before:{}", rules.len()));
        Ok(())
    }

    fn after_execute(&self, rules: &Rules, _facts: &Facts) -> Result<(), ListenerError> {
        self.journal.record(format!("engine_after:{}", rules.len()));
        Ok(())
    }
}
