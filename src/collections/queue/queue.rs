use crate::collections::Value;
use crate::collections::container::{Container, Variant};
use crate::collections::traits::SequenceKind;

/// The first-in first-out [`Variant`].
#[derive(Debug)]
pub enum QueueKind {}

impl Variant for QueueKind {
    const KIND: SequenceKind = SequenceKind::Queue;

    fn into_value(container: Queue) -> Value {
        Value::Queue(container)
    }

    fn from_value(value: &Value) -> Option<&Queue> {
        match value {
            Value::Queue(queue) => Some(queue),
            _ => None,
        }
    }
}

/// A first-in first-out queue of [`Value`]s. Elements are enqueued at the tail and dequeued from
/// the head, which is also where iteration starts.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)`* |
/// | `dequeue` | `O(n)` |
/// | `peek` | `O(1)` |
///
/// \* Amortized, growing the backing sequence takes `O(n)`.
pub type Queue = Container<QueueKind>;

impl Queue {
    /// Returns true if `value` holds a Queue.
    pub fn is_queue(value: &Value) -> bool {
        Self::is_instance(value)
    }

    /// Adds `value` to the tail of the Queue.
    pub fn enqueue(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Adds all of the provided elements to the tail of the Queue, in order.
    pub fn enqueue_all<I, V>(&mut self, elements: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.extend(elements);
    }

    /// Removes and returns the element at the head of the Queue, if there is one.
    ///
    /// # Examples
    /// ```
    /// # use collection_adapters::{queue, collections::Value};
    /// let mut queue = queue![1, 2, 3];
    /// assert_eq!(queue.dequeue(), Some(Value::from(1)));
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn dequeue(&mut self) -> Option<Value> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Returns a reference to the element at the head of the Queue, if there is one.
    pub fn peek(&self) -> Option<&Value> {
        self.items.first()
    }
}
