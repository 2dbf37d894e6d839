// crates/rulefire-core/src/lib.rs
// ============================================================================
// Module: Rulefire Core Library
// Description: Embeddable rule-evaluation engine with listener hooks.
// Purpose: Expose rules, facts, parameters, listeners, and the engine.
// Dependencies: indexmap, serde, serde_json, thiserror, tracing
// ============================================================================

//! ## Overview
//! Rulefire evaluates a priority-ordered [`Rules`] set against a mutable
//! [`Facts`] container and executes the actions of rules whose conditions
//! hold. [`RuleListener`] and [`RulesEngineListener`] observers see every
//! step and may veto individual rules.
//! Invariants:
//! - Rules fire in ascending priority; equal priorities keep registration order.
//! - Only rule-authored errors are contained, and only by `fire`.
//! - A pass runs to completion on the caller's thread.
//!
//! ```
//! use rulefire_core::Facts;
//! use rulefire_core::RuleBuilder;
//! use rulefire_core::Rules;
//! use rulefire_core::RulesEngine;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rules = Rules::new();
//! rules.register(
//!     RuleBuilder::new("weather")
//!         .description("if it rains then take an umbrella")
//!         .when(|facts: &Facts| Ok(facts.get_as::<bool>("rain")?.unwrap_or(false)))
//!         .then(|facts: &mut Facts| {
//!             facts.put("umbrella", true)?;
//!             Ok(())
//!         })
//!         .build(),
//! )?;
//!
//! let mut facts = Facts::new();
//! facts.put("rain", true)?;
//!
//! RulesEngine::new().fire(&rules, &mut facts)?;
//! assert_eq!(facts.get_as::<bool>("umbrella")?, Some(true));
//! # Ok(())
//! # }
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod builder;
pub mod engine;
pub mod error;
pub mod facts;
pub mod listener;
pub mod parameters;
pub mod rule;
pub mod rules;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use builder::RuleBuilder;
pub use engine::CheckResults;
pub use engine::RulesEngine;
pub use error::EngineError;
pub use error::FactsError;
pub use error::ListenerError;
pub use error::RuleError;
pub use error::RuleResult;
pub use error::RulesError;
pub use facts::Fact;
pub use facts::Facts;
pub use listener::RuleListener;
pub use listener::RulesEngineListener;
pub use parameters::DEFAULT_RULE_PRIORITY_THRESHOLD;
pub use parameters::RulesEngineParameters;
pub use rule::Action;
pub use rule::Always;
pub use rule::Condition;
pub use rule::DEFAULT_RULE_DESCRIPTION;
pub use rule::DEFAULT_RULE_NAME;
pub use rule::DEFAULT_RULE_PRIORITY;
pub use rule::DefaultRule;
pub use rule::Never;
pub use rule::Rule;
pub use rule::RuleSummary;
pub use rules::Rules;
