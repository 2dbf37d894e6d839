// crates/rulefire-core/src/error.rs
// ============================================================================
// Module: Rulefire Error Definitions
// Description: Structured errors for rules, facts, listeners, and the engine.
// Purpose: Separate rule-authored failures (contained by `fire`) from fatal
//          invocation and listener failures (returned to the caller).
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Errors are split by who raises them. [`RuleError`] comes from user-supplied
//! conditions and actions and is the only kind the dispatch loop recovers from.
//! [`ListenerError`] and [`EngineError`] always end the current pass.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Facts Errors
// ============================================================================

/// Errors raised by the facts container.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Serde failures are captured as messages so the error stays `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactsError {
    /// Fact names must be non-empty.
    #[error("fact name must not be empty")]
    EmptyName,
    /// A value could not be converted into a fact value.
    #[error("fact '{name}' could not be serialized: {message}")]
    Serialize {
        /// Fact name.
        name: String,
        /// Serializer message.
        message: String,
    },
    /// A stored fact value could not be read back as the requested type.
    #[error("fact '{name}' has an unexpected type: {message}")]
    Deserialize {
        /// Fact name.
        name: String,
        /// Deserializer message.
        message: String,
    },
}

// ============================================================================
// SECTION: Rule Errors
// ============================================================================

/// Errors returned by rule conditions and actions.
///
/// # Invariants
/// - Raised only by rule-authored code; the engine never constructs these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A fact required by the rule was not present.
    #[error("missing fact: {0}")]
    MissingFact(String),
    /// Facts access failed while evaluating or executing.
    #[error(transparent)]
    Facts(#[from] FactsError),
    /// The condition could not be evaluated.
    #[error("condition error: {0}")]
    Condition(String),
    /// The action failed while running.
    #[error("action error: {0}")]
    Action(String),
}

impl RuleError {
    /// Creates a condition error with a custom message.
    pub fn condition(message: impl Into<String>) -> Self {
        Self::Condition(message.into())
    }

    /// Creates an action error with a custom message.
    pub fn action(message: impl Into<String>) -> Self {
        Self::Action(message.into())
    }

    /// Creates a missing-fact error for the given fact name.
    pub fn missing_fact(name: impl Into<String>) -> Self {
        Self::MissingFact(name.into())
    }
}

// ============================================================================
// SECTION: Rule Set Errors
// ============================================================================

/// Errors raised while registering rules.
///
/// # Invariants
/// - A failed registration leaves the rule set unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// Rule names must be non-empty.
    #[error("rule name must not be empty")]
    EmptyName,
    /// A rule with the same name is already registered.
    #[error("rule '{0}' is already registered")]
    DuplicateName(String),
}

// ============================================================================
// SECTION: Listener Errors
// ============================================================================

/// Error raised by a rule or engine listener.
///
/// Listener failures are never contained: they end the pass and are returned
/// to the caller wrapped in [`EngineError::Listener`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("listener error: {message}")]
pub struct ListenerError {
    /// Human-readable failure message.
    message: String,
}

impl ListenerError {
    /// Creates a listener error with the provided message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// SECTION: Engine Errors
// ============================================================================

/// Errors returned from [`crate::RulesEngine::fire`] and
/// [`crate::RulesEngine::check`].
///
/// # Invariants
/// - `InvalidArgument` is returned before any listener or rule runs.
/// - `Evaluation` is only produced by `check`; `fire` contains evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A required argument was absent.
    #[error("{argument} are not allowed to be absent")]
    InvalidArgument {
        /// Name of the missing argument.
        argument: &'static str,
    },
    /// A rule condition failed during `check`.
    #[error("rule '{rule}' evaluated with error: {source}")]
    Evaluation {
        /// Name of the failing rule.
        rule: String,
        /// Underlying rule error.
        source: RuleError,
    },
    /// A listener failed and aborted the pass.
    #[error(transparent)]
    Listener(#[from] ListenerError),
}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Convenient result type for rule conditions and actions.
pub type RuleResult<T = ()> = Result<T, RuleError>;
