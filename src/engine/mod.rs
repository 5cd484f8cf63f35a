//! Host engine - The synchronous tree walker.
//!
//! This is the collaborator the resolver hands nodes to. It walks a node
//! tree once, top to bottom:
//!
//! ```text
//! Node tree → (render functions, providers/consumers, continuations) → Rendered
//! ```
//!
//! [`Rendered`](render::Rendered) is a continuation-free output tree -
//! every render function has been called, every consumer resolved against
//! its scope, every value-producing continuation invoked. There is no
//! diffing and no retained state: each pass starts from the root node.

mod render;
mod scope;

pub use render::{render, Rendered};
pub use scope::Scope;
