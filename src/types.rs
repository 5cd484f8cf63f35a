//! Core types for coro-tui.
//!
//! These types define what flows through the tree: dynamic [`Value`]s move
//! through props and continuation slots, and [`Style`] carries the visual
//! attributes the renderer understands.

use std::fmt;

// =============================================================================
// Value - Dynamic prop / resume value
// =============================================================================

/// A dynamic value carried by props and continuation slots.
///
/// Continuation slots are untyped by design: a rendered subtree can resolve
/// to whatever its producer computed (a number from a render-prop component,
/// a string from a context consumer, ...). `Value` is that common currency.
///
/// `Absent` is a real value, not an error: it is what the very first
/// coroutine advance receives, and what a subtree that produces nothing
/// resolves to.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value (first resume, or a subtree that produces nothing).
    #[default]
    Absent,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point.
    Float(f64),
    /// Owned string.
    Str(String),
    /// Ordered list of values.
    List(Vec<Value>),
}

impl Value {
    /// True if this is `Absent`.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Integer content, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean content, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// String content, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// List content, if this is a `List`.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

// =============================================================================
// Style (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Visual attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Style::BORDER | Style::PADDED`.
    /// Text attributes (BOLD and friends) apply to text content; BORDER and
    /// PADDED apply to blocks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Style: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        /// Draw a single-line border around the block.
        const BORDER = 1 << 4;
        /// One cell of inner padding on each side of the block.
        const PADDED = 1 << 5;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from(4), Value::Int(4));
        assert_eq!(Value::from("hi"), Value::Str("hi".to_string()));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert!(Value::default().is_absent());
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Str("x".into()).as_int(), None);
        assert_eq!(Value::Str("x".into()).as_str(), Some("x"));
        assert_eq!(Value::Absent.as_str(), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Absent.to_string(), "");
        assert_eq!(Value::Int(42).to_string(), "42");
        let list = Value::List(vec![Value::Int(1), Value::Str("two".into())]);
        assert_eq!(list.to_string(), "1, two");
    }

    #[test]
    fn test_style_flags() {
        let style = Style::BORDER | Style::PADDED;
        assert!(style.contains(Style::BORDER));
        assert!(!style.contains(Style::BOLD));
    }
}
