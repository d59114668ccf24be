//! Scoped variable tables
//!
//! A [`ScopeChain`] is an ordered sequence of symbol-to-text maps. Lookup
//! walks the scopes in push order and the first map containing the key wins,
//! so earlier scopes shadow later ones.
//!
//! The chain is owned by the caller and passed explicitly into every
//! resolution call; the engine never mutates it, and independent evaluations
//! may run concurrently as long as each supplies its own chain.

use ahash::AHashMap;

/// An ordered chain of symbol scopes with first-match-wins lookup.
#[derive(Debug, Clone, Default)]
pub struct ScopeChain {
    scopes: Vec<AHashMap<String, String>>,
}

impl ScopeChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scope. Scopes pushed earlier take priority on lookup.
    pub fn push_scope(&mut self, scope: AHashMap<String, String>) {
        self.scopes.push(scope);
    }

    /// Builder form of [`push_scope`](Self::push_scope).
    pub fn with_scope(mut self, scope: AHashMap<String, String>) -> Self {
        self.scopes.push(scope);
        self
    }

    /// Look up `name`, returning the value from the first scope containing it.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.scopes
            .iter()
            .find_map(|scope| scope.get(name).map(String::as_str))
    }

    /// Number of scopes in the chain.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Whether the chain has no scopes.
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl From<Vec<AHashMap<String, String>>> for ScopeChain {
    fn from(scopes: Vec<AHashMap<String, String>>) -> Self {
        Self { scopes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(pairs: &[(&str, &str)]) -> AHashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let chain = ScopeChain::new().with_scope(scope(&[("A", "1")]));
        assert_eq!(chain.lookup("A"), Some("1"));
        assert_eq!(chain.lookup("B"), None);
    }

    #[test]
    fn test_earlier_scope_shadows_later() {
        let chain = ScopeChain::new()
            .with_scope(scope(&[("A", "inner")]))
            .with_scope(scope(&[("A", "outer"), ("B", "2")]));
        assert_eq!(chain.lookup("A"), Some("inner"));
        assert_eq!(chain.lookup("B"), Some("2"));
    }

    #[test]
    fn test_empty_chain() {
        let chain = ScopeChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.lookup("A"), None);
    }
}
