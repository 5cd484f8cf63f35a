//! Coroutines - Resumable component bodies.
//!
//! A component body can return an ordinary [`Node`], or a [`Coroutine`]: a
//! computation that suspends at points where it needs a value only the tree
//! can produce (a context lookup, a render-prop result), and resumes with
//! that value once the surrounding renderer supplies it.
//!
//! The body's return type is the tagged [`Render`] enum, so "is this a
//! coroutine?" is a total pattern match rather than a runtime probe.
//!
//! Rust has no native resumable functions on stable, so [`Sequence`]
//! provides the explicit state machine: a step index, the values received
//! so far, one closure per suspension point, and a finishing closure for
//! the terminal result.
//!
//! # Example
//!
//! ```ignore
//! use coro_tui::{Node, Render, Sequence, Value};
//!
//! // yield AddTwo(value: 2); then return a text node built from the result.
//! let coroutine = Sequence::new()
//!     .step(|_| Ok(add_two_node(2)))
//!     .finish(|received| {
//!         let four = received[0].as_int().unwrap_or(0);
//!         Ok(Some(Node::text(format!("2 + 2 = {four}"))))
//!     });
//! Render::Coroutine(Box::new(coroutine))
//! ```

use crate::error::RenderError;
use crate::node::Node;
use crate::types::Value;

// =============================================================================
// Iteration
// =============================================================================

/// The result of one [`Coroutine::advance`] call.
#[derive(Debug)]
pub enum Iteration {
    /// Suspended. The yielded node must be rendered to produce the next
    /// resume value.
    Yield(Node),
    /// Terminated. The final node to return to the caller, or `None` to
    /// render nothing.
    Done(Option<Node>),
}

// =============================================================================
// Coroutine
// =============================================================================

/// A resumable computation.
///
/// Coroutines are not restartable: once an `advance` returns
/// [`Iteration::Done`] or an error, the instance is spent. The resolver
/// creates a fresh coroutine per invocation of the wrapped function and
/// enforces the spent-instance rule with
/// [`RenderError::ResumedAfterCompletion`].
pub trait Coroutine {
    /// Advance past the current suspension point.
    ///
    /// The first call ignores `resumed` (there is no suspension to resume
    /// yet); every later call receives the resolved value of the node the
    /// coroutine last yielded.
    fn advance(&mut self, resumed: Value) -> Result<Iteration, RenderError>;
}

// =============================================================================
// Render - Tagged body result
// =============================================================================

/// What a component body produced.
pub enum Render {
    /// An ordinary node; the wrapped function returns it unchanged.
    Node(Node),
    /// A coroutine for the resolver to drive.
    Coroutine(Box<dyn Coroutine>),
}

impl Render {
    /// True if this is a coroutine.
    pub fn is_coroutine(&self) -> bool {
        matches!(self, Render::Coroutine(_))
    }
}

impl From<Node> for Render {
    fn from(node: Node) -> Self {
        Render::Node(node)
    }
}

impl From<Option<Node>> for Render {
    fn from(node: Option<Node>) -> Self {
        Render::Node(node.unwrap_or_else(Node::empty))
    }
}

impl<C: Coroutine + 'static> From<Box<C>> for Render {
    fn from(coroutine: Box<C>) -> Self {
        Render::Coroutine(coroutine)
    }
}

// =============================================================================
// Sequence - Step-machine coroutine
// =============================================================================

/// A closure yielding the node for one suspension point. Receives every
/// value resumed so far, in order.
type StepFn = Box<dyn Fn(&[Value]) -> Result<Node, RenderError>>;

/// The finishing closure producing the terminal node.
type FinishFn = Box<dyn FnOnce(&[Value]) -> Result<Option<Node>, RenderError>>;

/// A coroutine defined as a fixed sequence of suspension points.
///
/// Each step closure builds the node to yield, given the values received
/// from all earlier steps; the finish closure builds the final node from
/// all received values. A `Sequence` with no steps terminates on its first
/// advance (the yield-less coroutine case).
pub struct Sequence {
    steps: Vec<StepFn>,
    finish: Option<FinishFn>,
    received: Vec<Value>,
    index: usize,
    started: bool,
    done: bool,
}

impl Sequence {
    /// An empty sequence; terminates immediately with no output unless
    /// steps and a finish are added.
    pub fn new() -> Self {
        Sequence {
            steps: Vec::new(),
            finish: None,
            received: Vec::new(),
            index: 0,
            started: false,
            done: false,
        }
    }

    /// Add a suspension point (builder style).
    pub fn step<F>(mut self, step: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Node, RenderError> + 'static,
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Set the finishing closure (builder style).
    pub fn finish<F>(mut self, finish: F) -> Self
    where
        F: FnOnce(&[Value]) -> Result<Option<Node>, RenderError> + 'static,
    {
        self.finish = Some(Box::new(finish));
        self
    }

    /// Wrap into the tagged body result.
    pub fn into_render(self) -> Render {
        Render::Coroutine(Box::new(self))
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Coroutine for Sequence {
    fn advance(&mut self, resumed: Value) -> Result<Iteration, RenderError> {
        if self.done {
            return Err(RenderError::ResumedAfterCompletion);
        }

        if self.started {
            self.received.push(resumed);
        } else {
            // First advance ignores its argument.
            self.started = true;
        }

        if self.index < self.steps.len() {
            let node = (self.steps[self.index])(&self.received)?;
            self.index += 1;
            Ok(Iteration::Yield(node))
        } else {
            self.done = true;
            match self.finish.take() {
                Some(finish) => Ok(Iteration::Done(finish(&self.received)?)),
                None => Ok(Iteration::Done(None)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_terminates_immediately() {
        let mut seq = Sequence::new();
        match seq.advance(Value::Absent).unwrap() {
            Iteration::Done(None) => {}
            other => panic!("expected Done(None), got {other:?}"),
        }
    }

    #[test]
    fn test_first_advance_ignores_its_argument() {
        let mut seq = Sequence::new()
            .step(|received| {
                assert!(received.is_empty());
                Ok(Node::text("first"))
            })
            .finish(|received| {
                assert_eq!(received, &[Value::Int(10)]);
                Ok(Some(Node::text("done")))
            });

        // The kick-off value never reaches the steps.
        match seq.advance(Value::Int(999)).unwrap() {
            Iteration::Yield(_) => {}
            other => panic!("expected Yield, got {other:?}"),
        }
        match seq.advance(Value::Int(10)).unwrap() {
            Iteration::Done(Some(node)) => {
                assert_eq!(node.props().str_or("content", ""), "done");
            }
            other => panic!("expected Done, got {other:?}"),
        }
    }

    #[test]
    fn test_steps_see_all_received_values() {
        let mut seq = Sequence::new()
            .step(|_| Ok(Node::text("a")))
            .step(|received| {
                assert_eq!(received.len(), 1);
                Ok(Node::text("b"))
            })
            .finish(|received| {
                assert_eq!(received, &[Value::Int(1), Value::Int(2)]);
                Ok(None)
            });

        seq.advance(Value::Absent).unwrap();
        seq.advance(Value::Int(1)).unwrap();
        match seq.advance(Value::Int(2)).unwrap() {
            Iteration::Done(None) => {}
            other => panic!("expected Done(None), got {other:?}"),
        }
    }

    #[test]
    fn test_resumed_after_completion_fails() {
        let mut seq = Sequence::new().finish(|_| Ok(None));
        seq.advance(Value::Absent).unwrap();
        assert_eq!(
            seq.advance(Value::Absent).unwrap_err(),
            RenderError::ResumedAfterCompletion
        );
    }

    #[test]
    fn test_step_error_propagates() {
        let mut seq = Sequence::new()
            .step(|_| Err(RenderError::render("step exploded")))
            .finish(|_| Ok(None));
        assert_eq!(
            seq.advance(Value::Absent).unwrap_err(),
            RenderError::render("step exploded")
        );
    }

    #[test]
    fn test_render_classification_is_total() {
        assert!(!Render::from(Node::text("plain")).is_coroutine());
        assert!(!Render::from(None::<Node>).is_coroutine());
        assert!(Sequence::new().into_render().is_coroutine());
    }
}
