//! Context - Scoped value propagation.
//!
//! A provider binds a value for its subtree; a consumer, when rendered,
//! invokes its own continuation slot with the nearest enclosing binding.
//! This moves ambient values down the tree without threading them through
//! every prop list - and because a consumer reports its value through the
//! continuation slot, a coroutine can simply yield one to read a context.
//!
//! Keys are identity, not names: two keys created with the same name are
//! distinct bindings. The name exists for diagnostics only.
//!
//! # Example
//!
//! ```ignore
//! use coro_tui::{ContextKey, provider, consumer, Node};
//!
//! let greeting = ContextKey::new("greeting");
//! let tree = provider(
//!     &greeting,
//!     "hello",
//!     Node::component(move |_| { /* somewhere below: consumer(&greeting) */ Ok(Node::empty()) }),
//! );
//! ```

use std::cell::RefCell;

use crate::node::{Component, Node, Props};
use crate::types::Value;

thread_local! {
    /// Counter for generating unique context key ids.
    static KEY_COUNTER: RefCell<u64> = const { RefCell::new(0) };
}

// =============================================================================
// ContextKey
// =============================================================================

/// Identifies one scoped binding.
///
/// Cheap to clone; equality is by allocation identity, never by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContextKey {
    id: u64,
    name: &'static str,
}

impl ContextKey {
    /// Allocate a fresh key. The name only appears in errors and debug
    /// output.
    pub fn new(name: &'static str) -> Self {
        let id = KEY_COUNTER.with(|counter| {
            let mut counter = counter.borrow_mut();
            *counter += 1;
            *counter
        });
        ContextKey { id, name }
    }

    /// Diagnostic name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

// =============================================================================
// Provider / Consumer Nodes
// =============================================================================

/// Bind `value` for the subtree rooted at `child`.
pub fn provider(key: &ContextKey, value: impl Into<Value>, child: Node) -> Node {
    Node::with_component(
        Component::Provider(key.clone()),
        Props::new().with("value", value),
    )
    .children(vec![child])
}

/// A node that resolves to the nearest enclosing binding for `key`.
///
/// Rendering it invokes its continuation slot with the bound value; with no
/// enclosing provider, rendering fails with
/// [`RenderError::MissingContext`](crate::RenderError::MissingContext).
pub fn consumer(key: &ContextKey) -> Node {
    Node::with_component(Component::Consumer(key.clone()), Props::new())
}
