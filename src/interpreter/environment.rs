use std::collections::HashMap;

use crate::interpreter::error::EngineError;
use crate::interpreter::value::Value;

/// The word table: a flat mapping from symbol to value. No nested scopes,
/// no frames; later definitions overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            bindings: HashMap::new(),
        }
    }

    /// Bind `key` to `value`, replacing any prior binding. Takes and returns
    /// the environment by value so definitions chain and compose with
    /// builder functions.
    pub fn define(mut self, key: impl Into<String>, value: Value) -> Self {
        self.bindings.insert(key.into(), value);
        self
    }

    /// The value bound to `symbol`.
    pub fn lookup(&self, symbol: &str) -> Result<Value, EngineError> {
        self.bindings
            .get(symbol)
            .cloned()
            .ok_or_else(|| EngineError::UnboundWord(symbol.to_string()))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.bindings.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
