// crates/rulefire-core/src/rules.rs
// ============================================================================
// Module: Rulefire Rule Set
// Description: Name-unique rule collection with priority-ordered traversal.
// Purpose: Resolve evaluation order once per pass so the dispatch loop stays
//          a linear scan.
// Dependencies: crate::{error, rule}
// ============================================================================

//! ## Overview
//! [`Rules`] stores rules in registration order and hands out a traversal
//! sorted by ascending priority. The sort is stable, so rules with equal
//! priority keep their registration order. Registering a second rule with an
//! existing name is rejected and leaves the set untouched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use crate::error::RulesError;
use crate::rule::Rule;

// ============================================================================
// SECTION: Rule Set
// ============================================================================

/// Ordered collection of uniquely named rules.
///
/// # Invariants
/// - No two rules share a name; names are non-empty.
/// - `entries` holds rules in registration order; unregistering keeps the
///   relative order of the remaining rules.
/// - [`Rules::iter`] yields ascending priority, ties in registration order.
#[derive(Clone, Default)]
pub struct Rules {
    /// Registered rules in registration order.
    entries: Vec<Arc<dyn Rule>>,
}

impl Rules {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::EmptyName`] or [`RulesError::DuplicateName`];
    /// the set is unchanged on error.
    pub fn register(&mut self, rule: impl Rule + 'static) -> Result<(), RulesError> {
        self.register_shared(Arc::new(rule))
    }

    /// Registers a shared rule handle.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::EmptyName`] or [`RulesError::DuplicateName`];
    /// the set is unchanged on error.
    pub fn register_shared(&mut self, rule: Arc<dyn Rule>) -> Result<(), RulesError> {
        let name = rule.name();
        if name.is_empty() {
            return Err(RulesError::EmptyName);
        }
        if self.contains(name) {
            return Err(RulesError::DuplicateName(name.to_string()));
        }
        self.entries.push(rule);
        Ok(())
    }

    /// Removes the rule named `name`, returning it when present.
    pub fn unregister(&mut self, name: &str) -> Option<Arc<dyn Rule>> {
        let index = self.entries.iter().position(|rule| rule.name() == name)?;
        Some(self.entries.remove(index))
    }

    /// Returns the rule named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Rule>> {
        self.entries.iter().find(|rule| rule.name() == name)
    }

    /// Returns true when a rule named `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every rule.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates rules in firing order: ascending priority, then registration
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Rule>> {
        self.ordered().into_iter()
    }

    /// Returns rule references sorted into firing order.
    fn ordered(&self) -> Vec<&Arc<dyn Rule>> {
        let mut ordered: Vec<&Arc<dyn Rule>> = self.entries.iter().collect();
        ordered.sort_by_key(|rule| rule.priority());
        ordered
    }
}

impl<'a> IntoIterator for &'a Rules {
    type Item = &'a Arc<dyn Rule>;
    type IntoIter = std::vec::IntoIter<&'a Arc<dyn Rule>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered().into_iter()
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|rule| rule.name())).finish()
    }
}
