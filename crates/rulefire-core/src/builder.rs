// crates/rulefire-core/src/builder.rs
// ============================================================================
// Module: Rule Builder
// Description: Fluent builder for closure-backed rules.
// Purpose: Provide an ergonomic way to author rules without a custom type.
// Dependencies: crate::{error, facts, rule}
// ============================================================================

//! ## Overview
//! [`RuleBuilder`] assembles a [`DefaultRule`] from identity fields, one
//! condition, and any number of actions. Unset fields fall back to
//! [`DEFAULT_RULE_NAME`], [`DEFAULT_RULE_DESCRIPTION`], and
//! [`DEFAULT_RULE_PRIORITY`]; a rule without a condition never fires.
//!
//! ```
//! use rulefire_core::Facts;
//! use rulefire_core::RuleBuilder;
//!
//! let rule = RuleBuilder::new("adult")
//!     .priority(1)
//!     .when(|facts: &Facts| Ok(facts.get_as::<u32>("age")?.unwrap_or(0) >= 18))
//!     .then(|facts: &mut Facts| {
//!         facts.put("adult", true)?;
//!         Ok(())
//!     })
//!     .build();
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::RuleResult;
use crate::facts::Facts;
use crate::rule::Action;
use crate::rule::Condition;
use crate::rule::DEFAULT_RULE_DESCRIPTION;
use crate::rule::DEFAULT_RULE_NAME;
use crate::rule::DEFAULT_RULE_PRIORITY;
use crate::rule::DefaultRule;
use crate::rule::Never;

// ============================================================================
// SECTION: Rule Builder
// ============================================================================

/// Fluent builder for [`DefaultRule`].
pub struct RuleBuilder {
    /// Rule name.
    name: String,
    /// Rule description.
    description: String,
    /// Rule priority.
    priority: i32,
    /// Rule condition; `None` builds a rule that never fires.
    condition: Option<Box<dyn Condition>>,
    /// Rule actions in execution order.
    actions: Vec<Box<dyn Action>>,
}

impl RuleBuilder {
    /// Creates a builder for a rule with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the rule name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the rule description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the rule priority (lower fires first).
    #[must_use]
    pub const fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the rule condition from a closure, replacing any previous one.
    #[must_use]
    pub fn when<F>(self, condition: F) -> Self
    where
        F: Fn(&Facts) -> RuleResult<bool> + Send + Sync + 'static,
    {
        self.when_condition(condition)
    }

    /// Sets the rule condition from any [`Condition`], replacing any previous one.
    #[must_use]
    pub fn when_condition(mut self, condition: impl Condition + 'static) -> Self {
        self.condition = Some(Box::new(condition));
        self
    }

    /// Appends an action closure.
    #[must_use]
    pub fn then<F>(self, action: F) -> Self
    where
        F: Fn(&mut Facts) -> RuleResult + Send + Sync + 'static,
    {
        self.then_action(action)
    }

    /// Appends any [`Action`].
    #[must_use]
    pub fn then_action(mut self, action: impl Action + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    /// Builds the rule.
    #[must_use]
    pub fn build(self) -> DefaultRule {
        DefaultRule {
            name: self.name,
            description: self.description,
            priority: self.priority,
            condition: self.condition.unwrap_or_else(|| Box::new(Never)),
            actions: self.actions,
        }
    }
}

impl Default for RuleBuilder {
    fn default() -> Self {
        Self {
            name: DEFAULT_RULE_NAME.to_string(),
            description: DEFAULT_RULE_DESCRIPTION.to_string(),
            priority: DEFAULT_RULE_PRIORITY,
            condition: None,
            actions: Vec::new(),
        }
    }
}
