use crate::{domain::Identifier, treewalk::Value};

/// The bindings created by named expressions while one statement is being evaluated.
///
/// Shadowing here is temporal, not lexical: a binding exists from the moment its named-expression
/// node is evaluated, and every later lookup of that name within the same statement resolves to
/// it. Before that moment, lookups fall through to the outer scope. The whole set is discarded
/// when statement evaluation completes, normally or via an error.
///
/// A small ordered list is used rather than a hash map so that insertion/overwrite order is
/// preserved, which keeps the binding set inspectable in evaluation order.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct StatementScope {
    bindings: Vec<(Identifier, Value)>,
}

impl StatementScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings
            .iter()
            .find(|(ident, _)| ident.as_str() == name)
            .map(|(_, value)| value)
    }

    /// Bind `name` to `value` from this point forward. A later binding for the same name
    /// overwrites the earlier one in place.
    pub fn bind(&mut self, name: &Identifier, value: Value) {
        if let Some((_, existing)) = self.bindings.iter_mut().find(|(ident, _)| ident == name) {
            *existing = value;
        } else {
            self.bindings.push((name.clone(), value));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Identifier {
        Identifier::new(name).expect("Invalid identifier in test!")
    }

    #[test]
    fn bindings_are_visible_after_creation() {
        let mut scope = StatementScope::new();
        assert!(scope.is_empty());
        assert_eq!(scope.get("x"), None);

        scope.bind(&ident("x"), Value::Int(1));
        assert_eq!(scope.get("x"), Some(&Value::Int(1)));
    }

    #[test]
    fn later_bindings_overwrite_earlier_ones() {
        let mut scope = StatementScope::new();
        scope.bind(&ident("y"), Value::Int(1));
        scope.bind(&ident("y"), Value::Int(2));

        assert_eq!(scope.get("y"), Some(&Value::Int(2)));
        assert_eq!(scope.len(), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut scope = StatementScope::new();
        scope.bind(&ident("a"), Value::Int(1));
        scope.bind(&ident("b"), Value::Int(2));
        scope.bind(&ident("a"), Value::Int(3));

        let names: Vec<&str> = scope
            .bindings
            .iter()
            .map(|(ident, _)| ident.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
