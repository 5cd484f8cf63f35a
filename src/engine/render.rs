//! Render pass - Node tree in, output tree out.
//!
//! One synchronous walk. Render functions are invoked with their props,
//! providers extend the scope for their subtree, consumers invoke their
//! continuation slot with the nearest binding, and whatever node comes back
//! from a continuation is walked in turn. The output is a [`Rendered`]
//! tree with no functions left in it.

use tracing::debug;

use crate::engine::scope::Scope;
use crate::error::RenderError;
use crate::node::{Children, Component, Node, Props};
use crate::types::Style;

// =============================================================================
// Rendered - Continuation-free output tree
// =============================================================================

/// The output of a render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Nothing.
    Empty,
    /// A styled text run.
    Text {
        /// Text content.
        content: String,
        /// Text attributes.
        style: Style,
    },
    /// Children with no box of their own (fragments, providers).
    Group(Vec<Rendered>),
    /// A styled container.
    Block {
        /// Border/padding/attribute flags.
        style: Style,
        /// Rendered children, in order.
        children: Vec<Rendered>,
    },
}

impl Rendered {
    /// Flatten to display rows with the text attributes each row carries.
    /// Borders and padding are applied here; attribute flags on a block
    /// spread to every row inside it. Frame rows are unstyled.
    pub fn to_rows(&self) -> Vec<(String, Style)> {
        match self {
            Rendered::Empty => Vec::new(),
            Rendered::Text { content, style } => content
                .split('\n')
                .map(|line| (line.to_string(), *style))
                .collect(),
            Rendered::Group(children) => {
                children.iter().flat_map(Rendered::to_rows).collect()
            }
            Rendered::Block { style, children } => {
                let attrs = *style & (Style::BOLD | Style::DIM | Style::ITALIC | Style::UNDERLINE);
                let mut rows: Vec<(String, Style)> = children
                    .iter()
                    .flat_map(Rendered::to_rows)
                    .map(|(line, row_style)| (line, row_style | attrs))
                    .collect();

                if style.contains(Style::PADDED) {
                    let width = row_width(&rows);
                    rows = rows
                        .into_iter()
                        .map(|(line, row_style)| (format!(" {line} "), row_style))
                        .collect();
                    rows.insert(0, (" ".repeat(width + 2), Style::NONE));
                    rows.push((" ".repeat(width + 2), Style::NONE));
                }

                if style.contains(Style::BORDER) {
                    let width = row_width(&rows);
                    let mut framed = Vec::with_capacity(rows.len() + 2);
                    framed.push((format!("┌{}┐", "─".repeat(width)), Style::NONE));
                    for (line, row_style) in rows {
                        let pad = width - line.chars().count();
                        framed.push((format!("│{line}{}│", " ".repeat(pad)), row_style));
                    }
                    framed.push((format!("└{}┘", "─".repeat(width)), Style::NONE));
                    rows = framed;
                }

                rows
            }
        }
    }

    /// Display lines without attributes.
    pub fn to_lines(&self) -> Vec<String> {
        self.to_rows().into_iter().map(|(line, _)| line).collect()
    }

    /// All text content, concatenated with newlines. Assertion helper.
    pub fn plain_text(&self) -> String {
        self.to_lines().join("\n")
    }
}

fn row_width(rows: &[(String, Style)]) -> usize {
    rows.iter().map(|(line, _)| line.chars().count()).max().unwrap_or(0)
}

// =============================================================================
// Render Pass
// =============================================================================

/// Render a node tree from the root scope.
pub fn render(node: &Node) -> Result<Rendered, RenderError> {
    render_node(node, &Scope::root())
}

fn render_node(node: &Node, scope: &Scope) -> Result<Rendered, RenderError> {
    match node.component_ref() {
        Component::Fragment => {
            let children = render_children(node.props(), scope)?;
            if children.is_empty() {
                Ok(Rendered::Empty)
            } else {
                Ok(Rendered::Group(children))
            }
        }
        Component::Text(style) => Ok(Rendered::Text {
            content: node.props().str_or("content", "").to_string(),
            style: *style,
        }),
        Component::Block(style) => Ok(Rendered::Block {
            style: *style,
            children: render_children(node.props(), scope)?,
        }),
        Component::Render(render_fn) => {
            // The function may invoke its continuation slot itself; either
            // way it hands back the node to walk next.
            let next = render_fn(node.props())?;
            render_node(&next, scope)
        }
        Component::Provider(key) => {
            let bound = scope.bind(key.clone(), node.props().value("value"));
            Ok(Rendered::Group(render_children(node.props(), &bound)?))
        }
        Component::Consumer(key) => {
            let value = scope
                .lookup(key)
                .cloned()
                .ok_or_else(|| RenderError::MissingContext(key.name().to_string()))?;
            let next = node.props().resume(value)?;
            render_node(&next, scope)
        }
    }
}

fn render_children(props: &Props, scope: &Scope) -> Result<Vec<Rendered>, RenderError> {
    match props.children() {
        None => Ok(Vec::new()),
        Some(Children::Nodes(nodes)) => {
            nodes.iter().map(|child| render_node(child, scope)).collect()
        }
        Some(Children::Continuation(_)) => {
            // A plain element computes no value, so there is nothing to
            // resume this continuation with. Render nothing there.
            debug!("continuation child of a non-producing node, skipping");
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{consumer, provider, ContextKey};
    use crate::types::Value;

    #[test]
    fn test_render_text_and_block() {
        let tree = Node::block(
            Style::NONE,
            vec![Node::text("one"), Node::styled_text("two", Style::BOLD)],
        );
        let rendered = render(&tree).unwrap();
        assert_eq!(rendered.to_lines(), vec!["one", "two"]);
    }

    #[test]
    fn test_render_function_is_invoked_with_props() {
        let node = Node::component(|props: &Props| {
            Ok(Node::text(format!("value is {}", props.int_or("value", 0))))
        })
        .prop("value", 7);

        assert_eq!(render(&node).unwrap().plain_text(), "value is 7");
    }

    #[test]
    fn test_render_prop_component_resumes_its_children() {
        // AddTwo-style: compute, then hand the result to the continuation.
        let add_two = Node::component(|props: &Props| {
            props.resume(Value::Int(props.int_or("value", 0) + 2))
        })
        .prop("value", 2)
        .continuation(|value| {
            Ok(Node::text(format!("got {}", value.as_int().unwrap_or(-1))))
        });

        assert_eq!(render(&add_two).unwrap().plain_text(), "got 4");
    }

    #[test]
    fn test_provider_consumer_roundtrip() {
        let key = ContextKey::new("greeting");
        let tree = provider(
            &key,
            "hello",
            consumer(&key).continuation(|value| {
                Ok(Node::text(format!("said: {value}")))
            }),
        );
        assert_eq!(render(&tree).unwrap().plain_text(), "said: hello");
    }

    #[test]
    fn test_nested_providers_shadow() {
        let key = ContextKey::new("depth");
        let inner = provider(
            &key,
            "inner",
            consumer(&key).continuation(|value| Ok(Node::text(value.to_string()))),
        );
        let tree = provider(&key, "outer", inner);
        assert_eq!(render(&tree).unwrap().plain_text(), "inner");
    }

    #[test]
    fn test_consumer_without_provider_fails() {
        let key = ContextKey::new("missing");
        let tree = consumer(&key).continuation(|_| Ok(Node::empty()));
        assert_eq!(
            render(&tree).unwrap_err(),
            RenderError::MissingContext("missing".to_string())
        );
    }

    #[test]
    fn test_continuation_child_of_block_is_skipped() {
        let tree = Node::block(Style::NONE, vec![])
            .continuation(|_| Ok(Node::text("never rendered")));
        assert_eq!(render(&tree).unwrap(), Rendered::Block {
            style: Style::NONE,
            children: vec![],
        });
    }

    #[test]
    fn test_border_and_padding() {
        let tree = Node::block(Style::BORDER, vec![Node::text("hi")]);
        assert_eq!(render(&tree).unwrap().to_lines(), vec!["┌──┐", "│hi│", "└──┘"]);

        let padded = Node::block(Style::PADDED, vec![Node::text("hi")]);
        assert_eq!(render(&padded).unwrap().to_lines(), vec!["    ", " hi ", "    "]);
    }

    #[test]
    fn test_empty_fragment_renders_nothing() {
        assert_eq!(render(&Node::empty()).unwrap(), Rendered::Empty);
        assert_eq!(render(&Node::empty()).unwrap().to_lines(), Vec::<String>::new());
    }
}
