use chrono::{DateTime, Utc};
use derive_more::IsVariant;

#[cfg(feature = "deque")]
use crate::collections::Deque;
#[cfg(feature = "list")]
use crate::collections::List;
#[cfg(feature = "queue")]
use crate::collections::Queue;
#[cfg(feature = "stack")]
use crate::collections::Stack;
use crate::collections::traits::{Sequence, SequenceKind, element_eq};

/// A single element of a container.
///
/// Sequences nest: [`Value::Array`] holds a plain sequence and the container variants hold a whole
/// container. Both are owned, so copying a Value copies everything beneath it.
#[derive(Debug, Clone, Default, IsVariant)]
pub enum Value {
    /// The absence of a value, produced when reading past the end of a sequence or when a gap is
    /// created by writing past the end.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(DateTime<Utc>),
    Array(Vec<Value>),
    #[cfg(feature = "list")]
    List(List),
    #[cfg(feature = "queue")]
    Queue(Queue),
    #[cfg(feature = "stack")]
    Stack(Stack),
    #[cfg(feature = "deque")]
    Deque(Deque),
}

impl Value {
    /// Returns the broad category of the value: `"undefined"`, `"boolean"`, `"number"`,
    /// `"string"` or `"object"`. Null, dates and every kind of sequence are objects.
    pub const fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            _ => "object",
        }
    }

    /// Returns a specific name for the type of the value, used when reporting errors.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "Boolean",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Date(_) => "Date",
            Value::Array(_) => "Array",
            #[cfg(feature = "list")]
            Value::List(_) => "List",
            #[cfg(feature = "queue")]
            Value::Queue(_) => "Queue",
            #[cfg(feature = "stack")]
            Value::Stack(_) => "Stack",
            #[cfg(feature = "deque")]
            Value::Deque(_) => "Deque",
        }
    }

    /// Views the value as a [`Sequence`] if it is a plain array or any container.
    pub fn as_sequence(&self) -> Option<&dyn Sequence> {
        match self {
            Value::Array(items) => Some(items as &dyn Sequence),
            #[cfg(feature = "list")]
            Value::List(list) => Some(list as &dyn Sequence),
            #[cfg(feature = "queue")]
            Value::Queue(queue) => Some(queue as &dyn Sequence),
            #[cfg(feature = "stack")]
            Value::Stack(stack) => Some(stack as &dyn Sequence),
            #[cfg(feature = "deque")]
            Value::Deque(deque) => Some(deque as &dyn Sequence),
            _ => None,
        }
    }

    /// Returns the kind of sequence this value is, if it is one.
    pub fn sequence_kind(&self) -> Option<SequenceKind> {
        self.as_sequence().map(Sequence::kind)
    }

    /// Strict equality. Scalars are compared without coercion, numbers follow IEEE-754 (`NaN`
    /// isn't equal to itself, `0` equals `-0`) and sequences are compared structurally when they
    /// are of the same kind.
    pub fn strict_eq(&self, other: &Value) -> bool {
        element_eq(self, other)
    }

    /// Equal to [`strict_eq`](Value::strict_eq), except that `NaN` is considered equal to `NaN`.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) if a.is_nan() && b.is_nan() => true,
            _ => self.strict_eq(other),
        }
    }

    /// Strict equality between two values that aren't sequences. Any sequence compares unequal.
    pub(crate) fn scalar_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            _ => false,
        }
    }

    /// Returns the contained number, if this is a [`Value::Number`].
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the contained string, if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}
