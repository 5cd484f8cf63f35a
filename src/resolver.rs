//! Resolver - Drives coroutines through the tree, one suspension at a time.
//!
//! [`wrap`] turns a component body that may return a coroutine into an
//! ordinary node-producing function. When the body returns a plain node the
//! wrapped function degenerates to the body itself; when it returns a
//! coroutine, the resolver advances it, and at every suspension returns the
//! yielded node with its continuation slot rebound to "advance again".
//!
//! The host engine's only extension point for "produce a value relative to
//! rendering" is the continuation slot: whoever renders the yielded node
//! and invokes that slot is, from the coroutine's point of view, returning
//! the resolved value of the yielded subtree. Rebinding the slot at every
//! suspension encodes the whole multi-step coroutine as a chain of nodes
//! linked through continuation slots, indistinguishable to the engine from
//! ordinary nested render-prop composition.
//!
//! # Example
//!
//! ```ignore
//! use coro_tui::{wrap, Node, Props, Render, Sequence, Value};
//!
//! let body = |props: &Props| -> Result<Render, _> {
//!     let base = props.int_or("value", 0);
//!     Ok(Sequence::new()
//!         .step(move |_| Ok(add_two(base)))
//!         .finish(|received| Ok(Some(Node::text(received[0].to_string()))))
//!         .into_render())
//! };
//! let component = wrap(body); // Fn(&Props) -> Result<Node, RenderError>
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::coroutine::{Coroutine, Iteration, Render};
use crate::error::RenderError;
use crate::node::{Node, Props};
use crate::types::Value;

// =============================================================================
// wrap
// =============================================================================

/// Wrap a coroutine-producing-or-plain component body into an ordinary
/// node-producing function.
///
/// The wrapped function has the same calling convention as any render
/// function and can be used anywhere one is accepted - including inside
/// another coroutine's yielded tree, or as the body passed to `wrap` again.
///
/// A body that fails propagates its error out of the wrapped function
/// unchanged. A coroutine whose `advance` fails propagates out of whichever
/// continuation invocation triggered it; the coroutine is dropped and any
/// later invocation of its continuations reports
/// [`RenderError::ResumedAfterCompletion`].
pub fn wrap<F>(body: F) -> impl Fn(&Props) -> Result<Node, RenderError>
where
    F: Fn(&Props) -> Result<Render, RenderError> + 'static,
{
    move |props| match body(props)? {
        Render::Node(node) => Ok(node),
        Render::Coroutine(coroutine) => {
            // One driver per invocation; its lifetime spans every render
            // pass that touches one of its continuations.
            let driver = Rc::new(Driver::new(coroutine));
            Driver::resume(&driver, Value::Absent)
        }
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Holds one live coroutine across suspensions.
///
/// The slot becomes `None` once the coroutine terminates or errors, which
/// is how stale continuation invocations are detected.
struct Driver {
    coroutine: RefCell<Option<Box<dyn Coroutine>>>,
}

impl Driver {
    fn new(coroutine: Box<dyn Coroutine>) -> Self {
        Driver {
            coroutine: RefCell::new(Some(coroutine)),
        }
    }

    /// Advance the coroutine once and translate the iteration into a node.
    ///
    /// On `Yield` the yielded node comes back with its continuation slot
    /// rebound to this same function, so the next slot invocation - in this
    /// call stack or a later render pass - drives the next step. On `Done`
    /// the terminal node is the resolved subtree for whichever caller
    /// invoked the continuation last.
    fn resume(driver: &Rc<Driver>, value: Value) -> Result<Node, RenderError> {
        let mut slot = driver.coroutine.borrow_mut();
        let Some(coroutine) = slot.as_mut() else {
            return Err(RenderError::ResumedAfterCompletion);
        };

        match coroutine.advance(value) {
            Ok(Iteration::Yield(node)) => {
                trace!("coroutine suspended, rebinding continuation slot");
                let next = Rc::clone(driver);
                Ok(node.with_continuation(Rc::new(move |resumed| Driver::resume(&next, resumed))))
            }
            Ok(Iteration::Done(result)) => {
                trace!("coroutine completed");
                *slot = None;
                Ok(result.unwrap_or_else(Node::empty))
            }
            Err(err) => {
                // Non-resumable from here on.
                *slot = None;
                Err(err)
            }
        }
    }
}
