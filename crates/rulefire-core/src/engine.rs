// crates/rulefire-core/src/engine.rs
// ============================================================================
// Module: Rulefire Engine
// Description: Priority-ordered dispatch loop with listener hooks.
// Purpose: Fire or check a rule set against facts under engine parameters.
// Dependencies: crate::{error, facts, listener, parameters, rule, rules}, tracing
// ============================================================================

//! ## Overview
//! [`RulesEngine`] walks a [`Rules`] set in firing order and, for each rule,
//! applies the priority threshold, the listener veto, evaluation and
//! execution. Skip flags in [`RulesEngineParameters`] end the scan early.
//!
//! Error containment differs between the two passes:
//! - `fire` contains condition and action errors: they are logged, reported
//!   to rule listeners, and the loop continues or stops per parameters.
//! - `check` returns condition errors to the caller.
//!
//! Listener errors end either pass immediately; the engine "after" listeners
//! do not run for that pass.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::Level;
use tracing::debug_span;
use tracing::error;
use tracing::trace;
use tracing::warn;

use crate::error::EngineError;
use crate::error::ListenerError;
use crate::facts::Facts;
use crate::listener::RuleListener;
use crate::listener::RuleListeners;
use crate::listener::RulesEngineListener;
use crate::listener::RulesEngineListeners;
use crate::parameters::RulesEngineParameters;
use crate::rule::Rule;
use crate::rule::RuleSummary;
use crate::rules::Rules;

// ============================================================================
// SECTION: Check Results
// ============================================================================

/// Evaluation results of a `check` pass keyed by rule name.
pub type CheckResults = BTreeMap<String, bool>;

// ============================================================================
// SECTION: Rules Engine
// ============================================================================

/// Synchronous rules engine.
///
/// # Invariants
/// - Parameters are fixed at construction.
/// - Listener lists are append-only and dispatched in registration order.
/// - Registration needs `&mut self`, so it cannot interleave with a pass.
#[derive(Clone, Default)]
pub struct RulesEngine {
    /// Termination policies for every pass.
    parameters: RulesEngineParameters,
    /// Observers around each rule.
    rule_listeners: RuleListeners,
    /// Observers around each pass.
    rules_engine_listeners: RulesEngineListeners,
}

impl RulesEngine {
    /// Creates an engine with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given parameters.
    #[must_use]
    pub fn with_parameters(parameters: RulesEngineParameters) -> Self {
        Self {
            parameters,
            ..Self::default()
        }
    }

    /// Returns the engine parameters.
    #[must_use]
    pub const fn parameters(&self) -> &RulesEngineParameters {
        &self.parameters
    }

    /// Returns the registered rule listeners in dispatch order.
    #[must_use]
    pub fn rule_listeners(&self) -> &[Arc<dyn RuleListener>] {
        self.rule_listeners.as_slice()
    }

    /// Returns the registered engine listeners in dispatch order.
    #[must_use]
    pub fn rules_engine_listeners(&self) -> &[Arc<dyn RulesEngineListener>] {
        self.rules_engine_listeners.as_slice()
    }

    /// Appends a rule listener.
    pub fn add_rule_listener(&mut self, listener: Arc<dyn RuleListener>) {
        self.rule_listeners.push(listener);
    }

    /// Appends rule listeners, preserving their order.
    pub fn add_rule_listeners(
        &mut self,
        listeners: impl IntoIterator<Item = Arc<dyn RuleListener>>,
    ) {
        for listener in listeners {
            self.rule_listeners.push(listener);
        }
    }

    /// Appends an engine listener.
    pub fn add_rules_engine_listener(&mut self, listener: Arc<dyn RulesEngineListener>) {
        self.rules_engine_listeners.push(listener);
    }

    /// Appends engine listeners, preserving their order.
    pub fn add_rules_engine_listeners(
        &mut self,
        listeners: impl IntoIterator<Item = Arc<dyn RulesEngineListener>>,
    ) {
        for listener in listeners {
            self.rules_engine_listeners.push(listener);
        }
    }

    // ------------------------------------------------------------------------
    // Fire
    // ------------------------------------------------------------------------

    /// Fires `rules` against `facts`.
    ///
    /// Triggered rules execute in firing order and may mutate `facts`; later
    /// rules see those changes. Condition and action errors are contained.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidArgument`] when `rules` or `facts` is
    /// `None` (before any listener runs) and [`EngineError::Listener`] when a
    /// listener fails.
    pub fn fire<'r, 'f>(
        &self,
        rules: impl Into<Option<&'r Rules>>,
        facts: impl Into<Option<&'f mut Facts>>,
    ) -> Result<(), EngineError> {
        let rules = rules.into().ok_or(EngineError::InvalidArgument {
            argument: "rules",
        })?;
        let facts = facts.into().ok_or(EngineError::InvalidArgument {
            argument: "facts",
        })?;
        let _span = debug_span!("rules_fire", rules = rules.len(), facts = facts.len()).entered();

        self.rules_engine_listeners.before_evaluate(rules, facts)?;
        self.do_fire(rules, facts)?;
        self.rules_engine_listeners.after_execute(rules, facts)?;
        Ok(())
    }

    /// Runs the fire loop between the engine listener calls.
    fn do_fire(&self, rules: &Rules, facts: &mut Facts) -> Result<(), ListenerError> {
        if rules.is_empty() {
            warn!("No rules registered! Nothing to apply");
            return Ok(());
        }
        self.log_all(rules, facts);
        trace!("Rules evaluation started");

        let parameters = &self.parameters;
        for rule in rules {
            let rule: &dyn Rule = rule.as_ref();
            let name = rule.name();
            let priority = rule.priority();
            if priority > parameters.priority_threshold {
                trace!(
                    rule = name,
                    priority,
                    threshold = parameters.priority_threshold,
                    "Rule priority threshold exceeded, next rules will be skipped"
                );
                break;
            }
            if !self.rule_listeners.before_evaluate(rule, facts)? {
                trace!(rule = name, "Rule has been skipped before being evaluated");
                continue;
            }

            match rule.evaluate(facts) {
                Err(err) => {
                    error!(rule = name, error = %err, "Rule evaluated with error");
                    self.rule_listeners.on_evaluation_error(rule, facts, &err)?;
                    if parameters.skip_on_first_non_triggered_rule {
                        trace!(
                            "Next rules will be skipped since parameter \
                             skip_on_first_non_triggered_rule is set"
                        );
                        break;
                    }
                }
                Ok(true) => {
                    trace!(rule = name, "Rule triggered");
                    self.rule_listeners.after_evaluate(rule, facts, true)?;
                    self.rule_listeners.before_execute(rule, facts)?;
                    match rule.execute(facts) {
                        Ok(()) => {
                            trace!(rule = name, "Rule performed successfully");
                            self.rule_listeners.on_success(rule, facts)?;
                            if parameters.skip_on_first_applied_rule {
                                trace!(
                                    "Next rules will be skipped since parameter \
                                     skip_on_first_applied_rule is set"
                                );
                                break;
                            }
                        }
                        Err(err) => {
                            error!(rule = name, error = %err, "Rule performed with error");
                            self.rule_listeners.on_failure(rule, facts, &err)?;
                            if parameters.skip_on_first_failed_rule {
                                trace!(
                                    "Next rules will be skipped since parameter \
                                     skip_on_first_failed_rule is set"
                                );
                                break;
                            }
                        }
                    }
                }
                Ok(false) => {
                    trace!(rule = name, "Rule has been evaluated to false, it has not been executed");
                    self.rule_listeners.after_evaluate(rule, facts, false)?;
                    if parameters.skip_on_first_non_triggered_rule {
                        trace!(
                            "Next rules will be skipped since parameter \
                             skip_on_first_non_triggered_rule is set"
                        );
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Emits one trace entry with parameters, registered rules, and known facts.
    fn log_all(&self, rules: &Rules, facts: &Facts) {
        if !tracing::enabled!(Level::TRACE) {
            return;
        }
        let registered: String =
            rules.iter().map(|rule| format!("\n{}", RuleSummary(rule.as_ref()))).collect();
        let known: String = facts
            .iter()
            .map(|(name, value)| format!("\nFact {{ name = '{name}', value = {value} }}"))
            .collect();
        trace!(
            "\n{}\nRegistered rules:{registered}\nKnown facts:{known}",
            self.parameters
        );
    }

    // ------------------------------------------------------------------------
    // Check
    // ------------------------------------------------------------------------

    /// Evaluates every non-vetoed rule without executing any action.
    ///
    /// Returns the evaluation result of each rule that was not vetoed by a
    /// rule listener, keyed by rule name. No threshold or skip policy applies.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidArgument`] when `rules` or `facts` is
    /// `None`, [`EngineError::Evaluation`] for the first condition error, and
    /// [`EngineError::Listener`] when a listener fails.
    pub fn check<'r, 'f>(
        &self,
        rules: impl Into<Option<&'r Rules>>,
        facts: impl Into<Option<&'f Facts>>,
    ) -> Result<CheckResults, EngineError> {
        let rules = rules.into().ok_or(EngineError::InvalidArgument {
            argument: "rules",
        })?;
        let facts = facts.into().ok_or(EngineError::InvalidArgument {
            argument: "facts",
        })?;
        let _span = debug_span!("rules_check", rules = rules.len(), facts = facts.len()).entered();

        self.rules_engine_listeners.before_evaluate(rules, facts)?;
        let results = self.do_check(rules, facts)?;
        self.rules_engine_listeners.after_execute(rules, facts)?;
        Ok(results)
    }

    /// Runs the check loop between the engine listener calls.
    fn do_check(&self, rules: &Rules, facts: &Facts) -> Result<CheckResults, EngineError> {
        trace!("Checking rules");
        let mut results = CheckResults::new();
        for rule in rules {
            let rule: &dyn Rule = rule.as_ref();
            if !self.rule_listeners.before_evaluate(rule, facts)? {
                continue;
            }
            let evaluation = rule.evaluate(facts).map_err(|source| EngineError::Evaluation {
                rule: rule.name().to_string(),
                source,
            })?;
            results.insert(rule.name().to_string(), evaluation);
        }
        Ok(results)
    }
}

impl fmt::Debug for RulesEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RulesEngine")
            .field("parameters", &self.parameters)
            .field("rule_listeners", &self.rule_listeners.as_slice().len())
            .field("rules_engine_listeners", &self.rules_engine_listeners.as_slice().len())
            .finish()
    }
}
