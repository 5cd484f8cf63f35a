//! Generators demo - Sequential UI logic over render props and contexts.
//!
//! Interactive port of the coroutine-component showcase: a generator
//! component reads a render-prop result and two context values as if they
//! were plain sequential statements, a sub-generator recurses through the
//! same `wrap`, and a yield-less generator and a plain component sit next
//! to them under the identical calling convention.
//!
//! Type to edit the message context, watch the tree re-render. Esc quits.
//!
//! Run with: cargo run --example generators

use std::error::Error;
use std::rc::Rc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use coro_tui::{
    ContextKey, Coroutine, Iteration, Node, Props, Render, RenderError, Screen, Sequence,
    Style, Value, consumer, provider, render, wrap,
};

// =============================================================================
// AddTwo - A render-prop component
// =============================================================================

/// Computes `value + 2` and hands it to its continuation slot.
fn add_two(value: i64) -> Node {
    Node::component(|props: &Props| {
        props.resume(Value::Int(props.int_or("value", 0) + 2))
    })
    .prop("value", value)
}

// =============================================================================
// MyGenerator - Hand-written coroutine with an early return
// =============================================================================

/// The sequential body, written as an explicit state machine:
///
/// ```text
/// let four = yield AddTwo(2 + value);
/// if four != 4 { return "How the hell isn't 2 + 2 = 4?"; }
/// let message = yield Consumer(message);
/// let now = yield Consumer(clock);
/// return styled block built from four, message, now;
/// ```
struct MyGenerator {
    base: i64,
    message_key: ContextKey,
    clock_key: ContextKey,
    state: GeneratorState,
    four: i64,
    message: String,
}

enum GeneratorState {
    Start,
    AwaitSum,
    AwaitMessage,
    AwaitClock,
    Finished,
}

impl MyGenerator {
    fn new(base: i64, message_key: ContextKey, clock_key: ContextKey) -> Self {
        MyGenerator {
            base,
            message_key,
            clock_key,
            state: GeneratorState::Start,
            four: 0,
            message: String::new(),
        }
    }
}

impl Coroutine for MyGenerator {
    fn advance(&mut self, resumed: Value) -> Result<Iteration, RenderError> {
        match self.state {
            GeneratorState::Start => {
                self.state = GeneratorState::AwaitSum;
                Ok(Iteration::Yield(add_two(2 + self.base)))
            }
            GeneratorState::AwaitSum => {
                self.four = resumed.as_int().unwrap_or(0);
                if self.four != 4 {
                    self.state = GeneratorState::Finished;
                    return Ok(Iteration::Done(Some(Node::text(
                        "How the hell isn't 2 + 2 = 4?",
                    ))));
                }
                self.state = GeneratorState::AwaitMessage;
                Ok(Iteration::Yield(consumer(&self.message_key)))
            }
            GeneratorState::AwaitMessage => {
                self.message = resumed.to_string();
                self.state = GeneratorState::AwaitClock;
                Ok(Iteration::Yield(consumer(&self.clock_key)))
            }
            GeneratorState::AwaitClock => {
                self.state = GeneratorState::Finished;
                let now = resumed.to_string();
                Ok(Iteration::Done(Some(Node::block(
                    Style::BORDER | Style::PADDED,
                    vec![
                        Node::text(format!(
                            "I use generators. I got \"{}\", and it is now \"{now}\", \
                             according to my context.",
                            self.message
                        )),
                        Node::text(format!("2 + 2 = {}", self.four)),
                        // Works even with subcomponents that are themselves
                        // generators, provided they go through `wrap`.
                        Node::block(
                            Style::BORDER,
                            vec![
                                Node::text("Sub-component, recursing..."),
                                my_generator_node(
                                    self.message_key.clone(),
                                    self.clock_key.clone(),
                                )
                                .prop("value", 5),
                            ],
                        ),
                    ],
                ))))
            }
            GeneratorState::Finished => Err(RenderError::ResumedAfterCompletion),
        }
    }
}

/// A fresh wrapped generator component node. Each render pass gets its own
/// coroutine instance, so recursion just builds a new one.
fn my_generator_node(message_key: ContextKey, clock_key: ContextKey) -> Node {
    let component = wrap(move |props: &Props| {
        Ok(Render::Coroutine(Box::new(MyGenerator::new(
            props.int_or("value", 0),
            message_key.clone(),
            clock_key.clone(),
        ))))
    });
    Node::from_render_fn(Rc::new(component))
}

// =============================================================================
// Application
// =============================================================================

fn app(message_key: &ContextKey, clock_key: &ContextKey, message: &str, now: &str) -> Node {
    // A plain component under the same wrapper.
    let non_generator = wrap(|_: &Props| Ok(Node::text("Nothing to see here.").into()));

    // A generator that yields nothing, as a test.
    let no_yield = wrap(|_: &Props| {
        Ok(Sequence::new()
            .finish(|_| Ok(Some(Node::text("I am a generator that yields nothing."))))
            .into_render())
    });

    provider(
        message_key,
        message,
        provider(
            clock_key,
            now,
            Node::fragment(vec![
                Node::styled_text("Hello coro-tui", Style::BOLD),
                Node::text("Type to edit the message. Esc quits."),
                Node::text(format!("> {message}_")),
                Node::text(""),
                my_generator_node(message_key.clone(), clock_key.clone()),
                Node::from_render_fn(Rc::new(non_generator)),
                Node::from_render_fn(Rc::new(no_yield)),
            ]),
        ),
    )
}

fn clock_now() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02} UTC")
}

fn main() -> Result<(), Box<dyn Error>> {
    let message_key = ContextKey::new("message");
    let clock_key = ContextKey::new("clock");
    let mut message = String::from("Hello world");

    let mut screen = Screen::enter()?;
    loop {
        let tree = app(&message_key, &clock_key, &message, &clock_now());
        let rendered = render(&tree)?;
        screen.paint(&rendered)?;

        // Tick even without input so the clock context stays fresh.
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Backspace => {
                    message.pop();
                }
                KeyCode::Char(c) => message.push(c),
                _ => {}
            }
        }
    }
    screen.leave()?;
    Ok(())
}
