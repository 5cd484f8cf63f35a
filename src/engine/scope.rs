//! Scope - Context bindings threaded through a render pass.
//!
//! A scope is an explicit parameter, not ambient state: each provider
//! extends the scope for exactly its subtree, and siblings never observe
//! each other's bindings.

use crate::context::ContextKey;
use crate::types::Value;

/// Context bindings visible at one point in the tree.
///
/// Bindings are a small ordered list searched back to front, so the nearest
/// enclosing provider wins. Cloning on extension keeps sibling subtrees
/// isolated; binding lists are short in practice.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: Vec<(ContextKey, Value)>,
}

impl Scope {
    /// The root scope, with no bindings.
    pub fn root() -> Self {
        Self::default()
    }

    /// A new scope with one more binding, shadowing any earlier binding for
    /// the same key.
    pub fn bind(&self, key: ContextKey, value: Value) -> Scope {
        let mut bindings = self.bindings.clone();
        bindings.push((key, value));
        Scope { bindings }
    }

    /// The nearest binding for a key.
    pub fn lookup(&self, key: &ContextKey) -> Option<&Value> {
        self.bindings
            .iter()
            .rev()
            .find(|(bound, _)| bound == key)
            .map(|(_, value)| value)
    }
}
