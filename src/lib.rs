//! # coro-tui
//!
//! Coroutine components for declarative terminal UI trees.
//!
//! A unit of UI logic that needs values from the tree - a context lookup, a
//! render-prop result - usually ends up as nested callbacks. coro-tui lets
//! it be written as a sequential coroutine instead: the body suspends by
//! yielding the node that can produce the value, and resumes with that
//! value once the tree supplies it.
//!
//! ## Architecture
//!
//! ```text
//! component body -> wrap -> node-producing function -> engine::render -> Rendered
//!        |                        ^
//!        +-- Coroutine -- resolver drives advance/yield through
//!                         continuation slots, one suspension per subtree
//! ```
//!
//! The resolver rebinds each yielded node's continuation slot to "advance
//! again", so a multi-step coroutine becomes a chain of nodes linked
//! through continuation slots, indistinguishable to the engine from
//! ordinary nested render-prop composition.
//!
//! ## Modules
//!
//! - [`types`] - `Value` and `Style`
//! - [`node`] - immutable nodes, props, the continuation slot
//! - [`coroutine`] - `Coroutine`, `Iteration`, the `Sequence` step machine
//! - [`resolver`] - `wrap`, the coroutine-driven tree resolver
//! - [`context`] - scoped value propagation (provider/consumer)
//! - [`engine`] - the synchronous host renderer
//! - [`terminal`] - raw-mode painting for interactive programs

pub mod context;
pub mod coroutine;
pub mod engine;
pub mod error;
pub mod node;
pub mod resolver;
pub mod terminal;
pub mod types;

pub use context::{ContextKey, consumer, provider};
pub use coroutine::{Coroutine, Iteration, Render, Sequence};
pub use engine::{Rendered, Scope, render};
pub use error::RenderError;
pub use node::{Children, Component, Continuation, Node, Props, RenderFn};
pub use resolver::wrap;
pub use terminal::Screen;
pub use types::{Style, Value};
