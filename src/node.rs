//! Node model - Immutable descriptions of renderable units.
//!
//! A [`Node`] is a component reference plus its props. Nodes are values:
//! building a tree allocates no engine state, and rendering never mutates a
//! node. The one structural convention is the `children` slot, which holds
//! either static child nodes or a one-argument continuation - invoking the
//! continuation is how a rendered subtree reports its resolved value upward.
//!
//! # Example
//!
//! ```ignore
//! use coro_tui::{Node, Props, Style, Value};
//!
//! // A render-prop component: computes a value, hands it to its children.
//! let add_two = Node::component(|props: &Props| {
//!     props.resume(Value::Int(props.int_or("value", 0) + 2))
//! })
//! .prop("value", 2);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::context::ContextKey;
use crate::error::RenderError;
use crate::types::{Style, Value};

// =============================================================================
// Callback Types
// =============================================================================

/// A render function: props in, node out.
///
/// `Rc<dyn Fn>` rather than `Box<dyn Fn>` so the same function can be
/// referenced from many nodes across render passes.
pub type RenderFn = Rc<dyn Fn(&Props) -> Result<Node, RenderError>>;

/// A continuation: the resolved value of a subtree in, the next node out.
pub type Continuation = Rc<dyn Fn(Value) -> Result<Node, RenderError>>;

// =============================================================================
// Component
// =============================================================================

/// What a node renders as.
#[derive(Clone)]
pub enum Component {
    /// Groups children without visual output of its own.
    Fragment,
    /// Text leaf; content lives in the `content` prop.
    Text(Style),
    /// Styled container.
    Block(Style),
    /// A render function invoked with the node's props.
    Render(RenderFn),
    /// Binds the `value` prop for the child subtree under the given key.
    Provider(ContextKey),
    /// When rendered, invokes its continuation slot with the nearest
    /// enclosing binding for the given key.
    Consumer(ContextKey),
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Fragment => write!(f, "Fragment"),
            Component::Text(style) => write!(f, "Text({style:?})"),
            Component::Block(style) => write!(f, "Block({style:?})"),
            Component::Render(_) => write!(f, "Render(..)"),
            Component::Provider(key) => write!(f, "Provider({})", key.name()),
            Component::Consumer(key) => write!(f, "Consumer({})", key.name()),
        }
    }
}

// =============================================================================
// Children Slot
// =============================================================================

/// The `children` slot of a node.
#[derive(Clone)]
pub enum Children {
    /// Static child nodes, rendered in order.
    Nodes(Vec<Node>),
    /// A one-argument continuation. Whoever renders this node and computes a
    /// value invokes it; the returned node is the resolved subtree.
    Continuation(Continuation),
}

impl fmt::Debug for Children {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Children::Nodes(nodes) => f.debug_tuple("Nodes").field(nodes).finish(),
            Children::Continuation(_) => write!(f, "Continuation(..)"),
        }
    }
}

// =============================================================================
// Props
// =============================================================================

/// Named values plus the `children` slot.
///
/// Props are cloneable by design: overriding the continuation slot of a node
/// clones its props and replaces only `children`.
#[derive(Clone, Debug, Default)]
pub struct Props {
    values: BTreeMap<String, Value>,
    children: Option<Children>,
}

impl Props {
    /// Empty props.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a named value (builder style).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Look up a named value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Named value, or `Absent` when unset.
    pub fn value(&self, name: &str) -> Value {
        self.values.get(name).cloned().unwrap_or_default()
    }

    /// Integer prop with a default for unset. Errors on a non-integer value.
    ///
    /// An unset or absent prop takes the default, matching the "missing
    /// input means zero-ish" convention of render props.
    pub fn int_or(&self, name: &str, default: i64) -> i64 {
        match self.values.get(name) {
            Some(Value::Int(n)) => *n,
            _ => default,
        }
    }

    /// String prop, or the default for unset / non-string values.
    pub fn str_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        match self.values.get(name) {
            Some(Value::Str(s)) => s,
            _ => default,
        }
    }

    /// Integer prop. Errors when unset or not an integer.
    pub fn int(&self, name: &str) -> Result<i64, RenderError> {
        self.values
            .get(name)
            .and_then(Value::as_int)
            .ok_or_else(|| RenderError::PropType {
                name: name.to_string(),
                expected: "an integer",
            })
    }

    /// The children slot, if any.
    pub fn children(&self) -> Option<&Children> {
        self.children.as_ref()
    }

    /// Invoke the continuation slot with a resolved value.
    ///
    /// This is how render-prop components hand their computed value to the
    /// subtree below them. With static or no children the value has nowhere
    /// to go and the result is the empty node.
    pub fn resume(&self, value: Value) -> Result<Node, RenderError> {
        match &self.children {
            Some(Children::Continuation(continuation)) => continuation(value),
            _ => Ok(Node::empty()),
        }
    }

    /// True if the children slot holds a continuation.
    pub fn has_continuation(&self) -> bool {
        matches!(self.children, Some(Children::Continuation(_)))
    }

    fn set_children(&mut self, children: Children) {
        self.children = Some(children);
    }
}

// =============================================================================
// Node
// =============================================================================

/// An immutable description of a renderable unit.
#[derive(Clone, Debug)]
pub struct Node {
    component: Component,
    props: Props,
}

impl Node {
    /// Renders nothing.
    pub fn empty() -> Node {
        Node {
            component: Component::Fragment,
            props: Props::new(),
        }
    }

    /// A fragment grouping children.
    pub fn fragment(children: Vec<Node>) -> Node {
        Node::empty().children(children)
    }

    /// An unstyled text leaf.
    pub fn text(content: impl Into<String>) -> Node {
        Node::styled_text(content, Style::NONE)
    }

    /// A text leaf with attributes.
    pub fn styled_text(content: impl Into<String>, style: Style) -> Node {
        Node {
            component: Component::Text(style),
            props: Props::new().with("content", content.into()),
        }
    }

    /// A styled container with children.
    pub fn block(style: Style, children: Vec<Node>) -> Node {
        Node {
            component: Component::Block(style),
            props: Props::new(),
        }
        .children(children)
    }

    /// A node backed by a render function.
    pub fn component<F>(render: F) -> Node
    where
        F: Fn(&Props) -> Result<Node, RenderError> + 'static,
    {
        Node {
            component: Component::Render(Rc::new(render)),
            props: Props::new(),
        }
    }

    /// A node backed by an already-shared render function.
    pub fn from_render_fn(render: RenderFn) -> Node {
        Node {
            component: Component::Render(render),
            props: Props::new(),
        }
    }

    pub(crate) fn with_component(component: Component, props: Props) -> Node {
        Node { component, props }
    }

    /// Set a prop (builder style).
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Node {
        self.props = self.props.with(name, value);
        self
    }

    /// Set static children (builder style).
    pub fn children(mut self, children: Vec<Node>) -> Node {
        self.props.set_children(Children::Nodes(children));
        self
    }

    /// Set a continuation child (builder style).
    pub fn continuation<F>(mut self, continuation: F) -> Node
    where
        F: Fn(Value) -> Result<Node, RenderError> + 'static,
    {
        self.props
            .set_children(Children::Continuation(Rc::new(continuation)));
        self
    }

    /// Clone this node with its continuation slot overridden.
    ///
    /// This is the one structural operation the resolver performs on yielded
    /// nodes: everything is copied except `children`, which becomes the
    /// given continuation. The original node is untouched.
    pub fn with_continuation(&self, continuation: Continuation) -> Node {
        let mut copy = self.clone();
        copy.props.set_children(Children::Continuation(continuation));
        copy
    }

    /// The component this node renders as.
    pub fn component_ref(&self) -> &Component {
        &self.component
    }

    /// This node's props.
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// True if this node renders nothing at all.
    pub fn is_empty(&self) -> bool {
        matches!(self.component, Component::Fragment) && self.props.children.is_none()
    }
}
