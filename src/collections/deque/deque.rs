use crate::collections::Value;
use crate::collections::container::{Container, Variant};
use crate::collections::traits::SequenceKind;

/// The double-ended [`Variant`].
#[derive(Debug)]
pub enum DequeKind {}

impl Variant for DequeKind {
    const KIND: SequenceKind = SequenceKind::Deque;

    fn into_value(container: Deque) -> Value {
        Value::Deque(container)
    }

    fn from_value(value: &Value) -> Option<&Deque> {
        match value {
            Value::Deque(deque) => Some(deque),
            _ => None,
        }
    }
}

/// A double-ended queue of [`Value`]s, with symmetric access to both the first and last elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Deque.
/// - `m`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_first` | `O(n+m)` |
/// | `add_last` | `O(m)`* |
/// | `remove_first` | `O(n)` |
/// | `remove_last` | `O(1)` |
/// | `peek_first/last` | `O(1)` |
///
/// \* Amortized, growing the backing sequence takes `O(n)`.
pub type Deque = Container<DequeKind>;

impl Deque {
    /// Returns true if `value` holds a Deque.
    pub fn is_deque(value: &Value) -> bool {
        Self::is_instance(value)
    }

    /// Adds `value` to the front of the Deque.
    pub fn add_first(&mut self, value: impl Into<Value>) {
        self.items.insert(0, value.into());
    }

    /// Adds all of the provided elements to the front of the Deque, keeping their order, so the
    /// first provided element becomes the first element of the Deque.
    ///
    /// # Examples
    /// ```
    /// # use collection_adapters::deque;
    /// let mut deque = deque![3];
    /// deque.add_first_all([1, 2]);
    /// assert_eq!(deque.to_string(), "[1,2,3]");
    /// ```
    pub fn add_first_all<I, V>(&mut self, elements: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.items.splice(0..0, elements.into_iter().map(Into::<Value>::into));
    }

    /// Adds `value` to the back of the Deque.
    pub fn add_last(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Adds all of the provided elements to the back of the Deque, in order.
    pub fn add_last_all<I, V>(&mut self, elements: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.extend(elements);
    }

    /// Removes and returns the first element, if there is one.
    pub fn remove_first(&mut self) -> Option<Value> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Removes and returns the last element, if there is one.
    pub fn remove_last(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Returns a reference to the first element, if there is one.
    pub fn peek_first(&self) -> Option<&Value> {
        self.items.first()
    }

    /// Returns a reference to the last element, if there is one.
    pub fn peek_last(&self) -> Option<&Value> {
        self.items.last()
    }
}
