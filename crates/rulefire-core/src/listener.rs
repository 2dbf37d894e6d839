// crates/rulefire-core/src/listener.rs
// ============================================================================
// Module: Rulefire Listeners
// Description: Rule-level and engine-level observer contracts and dispatch.
// Purpose: Let callers observe every step of a pass and veto rule evaluation.
// Dependencies: crate::{error, facts, rule, rules}
// ============================================================================

//! ## Overview
//! Two independent observer chains run synchronously on the calling thread in
//! registration order:
//! - [`RuleListener`] brackets each rule (veto, evaluation, execution, outcome).
//! - [`RulesEngineListener`] brackets the whole pass.
//!
//! Every callback returns a `Result`. Listener errors are not isolated: the
//! first error stops the chain and ends the pass.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use crate::error::ListenerError;
use crate::error::RuleError;
use crate::facts::Facts;
use crate::rule::Rule;
use crate::rules::Rules;

// ============================================================================
// SECTION: Listener Contracts
// ============================================================================

/// Observer around each rule in a pass. All callbacks default to no-ops.
pub trait RuleListener: Send + Sync {
    /// Called before a rule is evaluated. Returning `false` vetoes the rule:
    /// it is skipped without being treated as "evaluated to false".
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError`] to abort the pass.
    fn before_evaluate(&self, _rule: &dyn Rule, _facts: &Facts) -> Result<bool, ListenerError> {
        Ok(true)
    }

    /// Called after a rule evaluated to `evaluation_result`.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError`] to abort the pass.
    fn after_evaluate(
        &self,
        _rule: &dyn Rule,
        _facts: &Facts,
        _evaluation_result: bool,
    ) -> Result<(), ListenerError> {
        Ok(())
    }

    /// Called when a rule condition returned an error.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError`] to abort the pass.
    fn on_evaluation_error(
        &self,
        _rule: &dyn Rule,
        _facts: &Facts,
        _error: &RuleError,
    ) -> Result<(), ListenerError> {
        Ok(())
    }

    /// Called right before a triggered rule executes.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError`] to abort the pass.
    fn before_execute(&self, _rule: &dyn Rule, _facts: &Facts) -> Result<(), ListenerError> {
        Ok(())
    }

    /// Called after a rule action completed.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError`] to abort the pass.
    fn on_success(&self, _rule: &dyn Rule, _facts: &Facts) -> Result<(), ListenerError> {
        Ok(())
    }

    /// Called after a rule action returned an error.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError`] to abort the pass.
    fn on_failure(
        &self,
        _rule: &dyn Rule,
        _facts: &Facts,
        _error: &RuleError,
    ) -> Result<(), ListenerError> {
        Ok(())
    }
}

/// Observer around a whole `fire`/`check` pass. All callbacks default to no-ops.
pub trait RulesEngineListener: Send + Sync {
    /// Called once before any rule is considered.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError`] to abort the pass.
    fn before_evaluate(&self, _rules: &Rules, _facts: &Facts) -> Result<(), ListenerError> {
        Ok(())
    }

    /// Called once after the pass finished, including early termination.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError`] to report a failure to the caller.
    fn after_execute(&self, _rules: &Rules, _facts: &Facts) -> Result<(), ListenerError> {
        Ok(())
    }
}

// ============================================================================
// SECTION: Rule Listener Dispatch
// ============================================================================

/// Registration-ordered chain of rule listeners.
///
/// # Invariants
/// - Append-only; dispatch order equals registration order.
#[derive(Clone, Default)]
pub(crate) struct RuleListeners {
    /// Registered listeners.
    listeners: Vec<Arc<dyn RuleListener>>,
}

impl RuleListeners {
    /// Appends a listener.
    pub(crate) fn push(&mut self, listener: Arc<dyn RuleListener>) {
        self.listeners.push(listener);
    }

    /// Returns the registered listeners.
    pub(crate) fn as_slice(&self) -> &[Arc<dyn RuleListener>] {
        &self.listeners
    }

    /// AND-reduces `before_evaluate`, stopping at the first veto.
    pub(crate) fn before_evaluate(
        &self,
        rule: &dyn Rule,
        facts: &Facts,
    ) -> Result<bool, ListenerError> {
        for listener in &self.listeners {
            if !listener.before_evaluate(rule, facts)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Dispatches `after_evaluate`.
    pub(crate) fn after_evaluate(
        &self,
        rule: &dyn Rule,
        facts: &Facts,
        evaluation_result: bool,
    ) -> Result<(), ListenerError> {
        self.listeners
            .iter()
            .try_for_each(|listener| listener.after_evaluate(rule, facts, evaluation_result))
    }

    /// Dispatches `on_evaluation_error`.
    pub(crate) fn on_evaluation_error(
        &self,
        rule: &dyn Rule,
        facts: &Facts,
        error: &RuleError,
    ) -> Result<(), ListenerError> {
        self.listeners
            .iter()
            .try_for_each(|listener| listener.on_evaluation_error(rule, facts, error))
    }

    /// Dispatches `before_execute`.
    pub(crate) fn before_execute(&self, rule: &dyn Rule, facts: &Facts) -> Result<(), ListenerError> {
        self.listeners.iter().try_for_each(|listener| listener.before_execute(rule, facts))
    }

    /// Dispatches `on_success`.
    pub(crate) fn on_success(&self, rule: &dyn Rule, facts: &Facts) -> Result<(), ListenerError> {
        self.listeners.iter().try_for_each(|listener| listener.on_success(rule, facts))
    }

    /// Dispatches `on_failure`.
    pub(crate) fn on_failure(
        &self,
        rule: &dyn Rule,
        facts: &Facts,
        error: &RuleError,
    ) -> Result<(), ListenerError> {
        self.listeners.iter().try_for_each(|listener| listener.on_failure(rule, facts, error))
    }
}

// ============================================================================
// SECTION: Engine Listener Dispatch
// ============================================================================

/// Registration-ordered chain of engine listeners.
///
/// # Invariants
/// - Append-only; dispatch order equals registration order.
#[derive(Clone, Default)]
pub(crate) struct RulesEngineListeners {
    /// Registered listeners.
    listeners: Vec<Arc<dyn RulesEngineListener>>,
}

impl RulesEngineListeners {
    /// Appends a listener.
    pub(crate) fn push(&mut self, listener: Arc<dyn RulesEngineListener>) {
        self.listeners.push(listener);
    }

    /// Returns the registered listeners.
    pub(crate) fn as_slice(&self) -> &[Arc<dyn RulesEngineListener>] {
        &self.listeners
    }

    /// Dispatches `before_evaluate`.
    pub(crate) fn before_evaluate(&self, rules: &Rules, facts: &Facts) -> Result<(), ListenerError> {
        self.listeners.iter().try_for_each(|listener| listener.before_evaluate(rules, facts))
    }

    /// Dispatches `after_execute`.
    pub(crate) fn after_execute(&self, rules: &Rules, facts: &Facts) -> Result<(), ListenerError> {
        self.listeners.iter().try_for_each(|listener| listener.after_execute(rules, facts))
    }
}
