// crates/rulefire-core/src/facts.rs
// ============================================================================
// Module: Rulefire Facts
// Description: Ordered, uniquely-named fact container shared across a pass.
// Purpose: Give rules typed read/write access to named values.
// Dependencies: indexmap, serde, serde_json, crate::error
// ============================================================================

//! ## Overview
//! [`Facts`] is an insertion-ordered map from fact name to a JSON value.
//! Typed access goes through serde so rules can store and read their own
//! types. The engine borrows facts for the duration of one pass and never
//! keeps them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::de;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FactsError;

// ============================================================================
// SECTION: Fact
// ============================================================================

/// A single named fact.
///
/// # Invariants
/// - `name` is non-empty when the fact comes from a [`Facts`] container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    /// Fact name.
    pub name: String,
    /// Fact value.
    pub value: Value,
}

impl Fact {
    /// Creates a fact from a name and a JSON value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fact {{ name = '{}', value = {} }}", self.name, self.value)
    }
}

// ============================================================================
// SECTION: Facts Container
// ============================================================================

/// Ordered set of uniquely named facts.
///
/// # Invariants
/// - No two facts share a name.
/// - Names are non-empty.
/// - Iteration follows insertion order; overwriting a fact keeps its position
///   and removing a fact preserves the order of the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Facts {
    /// Fact values keyed by name in insertion order.
    entries: IndexMap<String, Value>,
}

impl Facts {
    /// Creates an empty facts container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a serializable value under `name`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`FactsError::EmptyName`] for an empty name and
    /// [`FactsError::Serialize`] when the value cannot be represented.
    pub fn put<T: Serialize>(
        &mut self,
        name: impl Into<String>,
        value: T,
    ) -> Result<Option<Value>, FactsError> {
        let name = name.into();
        let value = serde_json::to_value(value).map_err(|err| FactsError::Serialize {
            name: name.clone(),
            message: err.to_string(),
        })?;
        self.put_value(name, value)
    }

    /// Stores a raw JSON value under `name`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`FactsError::EmptyName`] for an empty name.
    pub fn put_value(
        &mut self,
        name: impl Into<String>,
        value: Value,
    ) -> Result<Option<Value>, FactsError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FactsError::EmptyName);
        }
        Ok(self.entries.insert(name, value))
    }

    /// Stores a [`Fact`], returning the previous value under its name.
    ///
    /// # Errors
    ///
    /// Returns [`FactsError::EmptyName`] for an empty name.
    pub fn add(&mut self, fact: Fact) -> Result<Option<Value>, FactsError> {
        self.put_value(fact.name, fact.value)
    }

    /// Returns the raw value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Reads the fact stored under `name` as `T`.
    ///
    /// Returns `Ok(None)` when no fact has that name.
    ///
    /// # Errors
    ///
    /// Returns [`FactsError::Deserialize`] when the stored value is not a `T`.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, FactsError> {
        self.entries
            .get(name)
            .map(|value| {
                T::deserialize(value).map_err(|err| FactsError::Deserialize {
                    name: name.to_string(),
                    message: err.to_string(),
                })
            })
            .transpose()
    }

    /// Removes the fact stored under `name`, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.shift_remove(name)
    }

    /// Returns true when a fact named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when there are no facts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every fact.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates facts as `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns owned copies of every fact in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Fact> {
        self.iter().map(|(name, value)| Fact::new(name, value.clone())).collect()
    }
}

impl TryFrom<IndexMap<String, Value>> for Facts {
    type Error = FactsError;

    fn try_from(entries: IndexMap<String, Value>) -> Result<Self, Self::Error> {
        if entries.keys().any(String::is_empty) {
            return Err(FactsError::EmptyName);
        }
        Ok(Self {
            entries,
        })
    }
}

impl<'de> Deserialize<'de> for Facts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = IndexMap::<String, Value>::deserialize(deserializer)?;
        Self::try_from(entries).map_err(de::Error::custom)
    }
}

impl fmt::Display for Facts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, (name, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        f.write_str("]")
    }
}
