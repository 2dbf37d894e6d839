// crates/rulefire-core/src/rule.rs
// ============================================================================
// Module: Rulefire Rule Abstraction
// Description: The rule contract plus closure-backed conditions and actions.
// Purpose: Define the unit of evaluation consumed by the rules engine.
// Dependencies: crate::{error, facts}
// ============================================================================

//! ## Overview
//! A rule is a named, prioritized condition/action pair. The engine only sees
//! the [`Rule`] trait; [`DefaultRule`] is a ready-made implementation built
//! from a [`Condition`] and a list of [`Action`]s (usually via
//! [`crate::RuleBuilder`]).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use crate::error::RuleResult;
use crate::facts::Facts;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Priority given to rules that do not set one. Sits just below the default
/// engine threshold so unprioritized rules still fire.
pub const DEFAULT_RULE_PRIORITY: i32 = i32::MAX - 1;

/// Name given to rules built without one.
pub const DEFAULT_RULE_NAME: &str = "rule";

/// Description given to rules built without one.
pub const DEFAULT_RULE_DESCRIPTION: &str = "description";

// ============================================================================
// SECTION: Rule Trait
// ============================================================================

/// Unit of evaluation: identity fields plus a condition and an action.
///
/// # Invariants
/// - `name` is unique within a [`crate::Rules`] set.
/// - `priority` does not change while a pass is running; lower values fire
///   first.
pub trait Rule: Send + Sync {
    /// Returns the rule name.
    fn name(&self) -> &str;

    /// Returns the rule description.
    fn description(&self) -> &str {
        DEFAULT_RULE_DESCRIPTION
    }

    /// Returns the rule priority.
    fn priority(&self) -> i32 {
        DEFAULT_RULE_PRIORITY
    }

    /// Evaluates the rule condition against the facts.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::RuleError`] when the condition cannot be evaluated.
    fn evaluate(&self, facts: &Facts) -> RuleResult<bool>;

    /// Runs the rule action, possibly mutating the facts.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::RuleError`] when the action fails.
    fn execute(&self, facts: &mut Facts) -> RuleResult;
}

// ============================================================================
// SECTION: Condition + Action
// ============================================================================

/// Predicate half of a rule.
pub trait Condition: Send + Sync {
    /// Evaluates the predicate against the facts.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::RuleError`] when the predicate cannot be evaluated.
    fn evaluate(&self, facts: &Facts) -> RuleResult<bool>;
}

impl<F> Condition for F
where
    F: Fn(&Facts) -> RuleResult<bool> + Send + Sync,
{
    fn evaluate(&self, facts: &Facts) -> RuleResult<bool> {
        self(facts)
    }
}

/// Effect half of a rule.
pub trait Action: Send + Sync {
    /// Applies the effect to the facts.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::RuleError`] when the effect fails.
    fn execute(&self, facts: &mut Facts) -> RuleResult;
}

impl<F> Action for F
where
    F: Fn(&mut Facts) -> RuleResult + Send + Sync,
{
    fn execute(&self, facts: &mut Facts) -> RuleResult {
        self(facts)
    }
}

/// Condition that never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl Condition for Never {
    fn evaluate(&self, _facts: &Facts) -> RuleResult<bool> {
        Ok(false)
    }
}

/// Condition that always matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl Condition for Always {
    fn evaluate(&self, _facts: &Facts) -> RuleResult<bool> {
        Ok(true)
    }
}

// ============================================================================
// SECTION: Default Rule
// ============================================================================

/// Rule assembled from a boxed condition and an ordered list of actions.
///
/// # Invariants
/// - Actions run in insertion order; the first failing action stops the rest.
pub struct DefaultRule {
    /// Rule name.
    pub(crate) name: String,
    /// Rule description.
    pub(crate) description: String,
    /// Rule priority.
    pub(crate) priority: i32,
    /// Rule condition.
    pub(crate) condition: Box<dyn Condition>,
    /// Rule actions in execution order.
    pub(crate) actions: Vec<Box<dyn Action>>,
}

impl DefaultRule {
    /// Returns the number of actions attached to the rule.
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }
}

impl Rule for DefaultRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn evaluate(&self, facts: &Facts) -> RuleResult<bool> {
        self.condition.evaluate(facts)
    }

    fn execute(&self, facts: &mut Facts) -> RuleResult {
        for action in &self.actions {
            action.execute(facts)?;
        }
        Ok(())
    }
}

impl fmt::Debug for DefaultRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultRule")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("priority", &self.priority)
            .field("actions", &self.actions.len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// SECTION: Rule Summary
// ============================================================================

/// Display adapter that renders a rule's identity fields.
pub struct RuleSummary<'a>(pub &'a dyn Rule);

impl fmt::Display for RuleSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rule {{ name = '{}', description = '{}', priority = '{}' }}",
            self.0.name(),
            self.0.description(),
            self.0.priority()
        )
    }
}
