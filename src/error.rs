//! Error type for tree resolution.
//!
//! Every failure surfaces immediately at the nearest caller: a component
//! body that fails propagates out of the wrapped function, and an `advance`
//! that fails propagates out of whichever continuation invocation triggered
//! it. There is no local recovery and no fallback rendering.

use thiserror::Error;

/// Errors produced while building or rendering a node tree.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    /// A continuation slot was invoked after its coroutine already reached
    /// its terminal state.
    #[error("coroutine resumed after completion")]
    ResumedAfterCompletion,

    /// A consumer was rendered with no enclosing provider for its key.
    #[error("no value bound for context `{0}`")]
    MissingContext(String),

    /// A prop held a value of an unexpected type.
    #[error("prop `{name}` is not {expected}")]
    PropType {
        /// Prop name as looked up.
        name: String,
        /// Human-readable expected type ("an integer", "a string", ...).
        expected: &'static str,
    },

    /// A component body or coroutine step failed.
    #[error("render failed: {0}")]
    Render(String),
}

impl RenderError {
    /// Convenience constructor for component-level failures.
    pub fn render(message: impl Into<String>) -> Self {
        RenderError::Render(message.into())
    }
}
