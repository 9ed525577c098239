use std::collections::HashMap;

use crate::treewalk::Value;

/// The outer (global) symbol table. This is the environment visible before a statement begins;
/// assignment statements write here, named expressions never do.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Scope {
    symbol_table: HashMap<String, Value>,
}

impl Scope {
    pub fn get(&self, name: &str) -> Option<Value> {
        self.symbol_table.get(name).cloned()
    }

    /// Insert a `Value` into this `Scope`. The `Scope` is returned to allow calls to be chained.
    pub fn insert(&mut self, name: &str, value: Value) -> &mut Self {
        self.symbol_table.insert(name.to_string(), value);
        self
    }

    /// Return a list of all the symbols available in this `Scope`.
    pub fn symbols(&self) -> Vec<String> {
        self.symbol_table.keys().cloned().collect()
    }
}
