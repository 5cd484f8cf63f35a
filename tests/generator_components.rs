//! End-to-end: generator components driven through a full render pass.
//!
//! These tests exercise the whole chain - wrap, yielded render props,
//! context consumers, recursive composition - the way an application uses
//! it, asserting on the rendered output tree.

use std::rc::Rc;

use coro_tui::{
    ContextKey, Node, Props, Render, RenderError, Sequence, Style, Value, consumer, provider,
    render, wrap,
};

/// `value + 2` handed to the continuation slot.
fn add_two(value: i64) -> Node {
    Node::component(|props: &Props| {
        props.resume(Value::Int(props.int_or("value", 0) + 2))
    })
    .prop("value", value)
}

/// A generator component node: reads the render-prop result and a context,
/// then renders a summary line.
fn summary_node(key: &ContextKey) -> Node {
    let key = key.clone();
    let component = wrap(move |props: &Props| {
        let base = props.int_or("value", 0);
        let key = key.clone();
        Ok(Sequence::new()
            .step(move |_| Ok(add_two(base)))
            .step(move |_| Ok(consumer(&key)))
            .finish(|received| {
                let sum = received[0].as_int().unwrap_or(-1);
                let greeting = received[1].to_string();
                Ok(Some(Node::text(format!("{greeting}: {sum}"))))
            })
            .into_render())
    });
    Node::from_render_fn(Rc::new(component))
}

#[test]
fn generator_resolves_through_one_render_pass() {
    let key = ContextKey::new("greeting");
    let tree = provider(&key, "hello", summary_node(&key).prop("value", 2));
    assert_eq!(render(&tree).unwrap().plain_text(), "hello: 4");
}

#[test]
fn generator_sees_nearest_provider() {
    let key = ContextKey::new("greeting");
    let inner = provider(&key, "inner", summary_node(&key));
    let tree = provider(&key, "outer", inner);
    assert_eq!(render(&tree).unwrap().plain_text(), "inner: 2");
}

#[test]
fn generator_without_provider_fails_at_render() {
    let key = ContextKey::new("greeting");
    let tree = summary_node(&key);
    assert_eq!(
        render(&tree).unwrap_err(),
        RenderError::MissingContext("greeting".to_string())
    );
}

#[test]
fn recursive_composition_is_transparent() {
    // An outer coroutine yields a node whose renderer is itself wrapped.
    // The outer resolver never learns the inner node is coroutine-backed.
    let key = ContextKey::new("greeting");
    let inner = summary_node(&key).prop("value", 10);

    let outer = wrap(move |_: &Props| {
        let inner = inner.clone();
        Ok(Sequence::new()
            .step(move |_| Ok(add_two(0)))
            .finish(move |received| {
                let two = received[0].as_int().unwrap_or(-1);
                Ok(Some(Node::block(
                    Style::NONE,
                    vec![Node::text(format!("outer got {two}")), inner.clone()],
                )))
            })
            .into_render())
    });

    let tree = provider(&key, "deep", Node::from_render_fn(Rc::new(outer)));
    let text = render(&tree).unwrap().plain_text();
    assert_eq!(text, "outer got 2\ndeep: 12");
}

#[test]
fn plain_and_yieldless_components_render_alike() {
    let plain = wrap(|_: &Props| Ok(Node::text("plain").into()));
    let yieldless = wrap(|_: &Props| {
        Ok(Sequence::new()
            .finish(|_| Ok(Some(Node::text("yieldless"))))
            .into_render())
    });

    let tree = Node::fragment(vec![
        Node::from_render_fn(Rc::new(plain)),
        Node::from_render_fn(Rc::new(yieldless)),
    ]);
    assert_eq!(render(&tree).unwrap().to_lines(), vec!["plain", "yieldless"]);
}

#[test]
fn early_return_skips_later_suspensions() {
    // A wrong render-prop result short-circuits: later consumers are never
    // yielded, so no provider is required for them.
    let unused = ContextKey::new("never read");
    let component = wrap(move |props: &Props| {
        let expected = props.int_or("value", 0);
        let unused = unused.clone();
        Ok(Sequence::new()
            .step(move |_| Ok(add_two(expected)))
            .finish(move |received| {
                let sum = received[0].as_int().unwrap_or(-1);
                if sum != 4 {
                    return Ok(Some(Node::text("unexpected sum")));
                }
                // Would need a provider; only reached when sum == 4.
                Ok(Some(consumer(&unused)))
            })
            .into_render())
    });

    let tree = Node::from_render_fn(Rc::new(component)).prop("value", 7);
    assert_eq!(render(&tree).unwrap().plain_text(), "unexpected sum");
}

#[test]
fn bordered_output_matches_layout() {
    let key = ContextKey::new("greeting");
    let tree = provider(
        &key,
        "hi",
        Node::block(Style::BORDER, vec![summary_node(&key)]),
    );
    assert_eq!(
        render(&tree).unwrap().to_lines(),
        vec!["┌─────┐", "│hi: 2│", "└─────┘"]
    );
}
