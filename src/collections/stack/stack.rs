use crate::collections::Value;
use crate::collections::container::{Container, Variant};
use crate::collections::traits::SequenceKind;

/// The last-in first-out [`Variant`].
#[derive(Debug)]
pub enum StackKind {}

impl Variant for StackKind {
    const KIND: SequenceKind = SequenceKind::Stack;
    const REVERSED: bool = true;

    fn into_value(container: Stack) -> Value {
        Value::Stack(container)
    }

    fn from_value(value: &Value) -> Option<&Stack> {
        match value {
            Value::Stack(stack) => Some(stack),
            _ => None,
        }
    }
}

/// A last-in first-out stack of [`Value`]s.
///
/// The backing sequence is stored bottom first, which is the order used by
/// [`to_array`](Container::to_array), equality and stringification. Iteration runs from the top
/// down, without changing the Stack.
///
/// # Examples
/// ```
/// # use collection_adapters::{stack, collections::Value};
/// let stack = stack!["a", "b"];
/// let items: Vec<_> = stack.iter().collect();
/// assert_eq!(items, [&Value::from("b"), &Value::from("a")]);
/// assert_eq!(stack.to_string(), r#"["a","b"]"#);
/// ```
pub type Stack = Container<StackKind>;

impl Stack {
    /// Returns true if `value` holds a Stack.
    pub fn is_stack(value: &Value) -> bool {
        Self::is_instance(value)
    }

    /// Pushes `value` onto the top of the Stack.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Pushes all of the provided elements onto the Stack, in order, so that the last one ends up
    /// on top.
    pub fn push_all<I, V>(&mut self, elements: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.extend(elements);
    }

    /// Removes and returns the element on top of the Stack, if there is one.
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Returns a reference to the element on top of the Stack, if there is one.
    pub fn peek(&self) -> Option<&Value> {
        self.items.last()
    }
}
