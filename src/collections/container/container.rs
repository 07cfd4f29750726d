use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use serde::{Serialize, Serializer};
use tracing::trace;

use super::{IntoIter, Iter};
use crate::collections::Value;
use crate::collections::value::write_canonical_json;
use crate::collections::traits::{Sequence, SequenceKind, structural_eq};
use crate::util::error::{ContainerError, SEQUENCE_LIKE, TypeMismatch};
use crate::util::fmt::JsonDebug;

/// A marker for one of the container variants. Implementors are uninhabited types that only
/// select an access discipline for [`Container`].
pub trait Variant: Sized + 'static {
    /// The kind reported by containers of this variant.
    const KIND: SequenceKind;

    /// Whether iteration runs from the end of the backing sequence to the start.
    const REVERSED: bool = false;

    /// Wraps a container of this variant as a [`Value`].
    fn into_value(container: Container<Self>) -> Value;

    /// Returns the container held by `value` if it is of this variant.
    fn from_value(value: &Value) -> Option<&Container<Self>>;
}

/// An adapter around a single, owned, contiguous sequence of [`Value`]s.
///
/// Containers can be built from plain arrays or from any other container, regardless of variant,
/// in which case the source's elements are copied in order. Every variant can also be compared
/// structurally, filtered, iterated and rendered as JSON.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Container.
/// - `m`: The number of items in the other sequence.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `from_sequence` | `O(m)` |
/// | `filter` | `O(n)` |
/// | `equals` | `O(n)`* |
/// | `to_array` | `O(n)` |
///
/// \* Per level of nesting, nested sequences are compared element by element as well.
pub struct Container<K: Variant> {
    pub(crate) items: Vec<Value>,
    _variant: PhantomData<K>,
}

impl<K: Variant> Container<K> {
    /// Creates a new, empty Container.
    pub const fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    pub(crate) const fn from_vec(items: Vec<Value>) -> Self {
        Container {
            items,
            _variant: PhantomData,
        }
    }

    /// Creates a Container from a dynamically typed source, which must be a [`Value::Array`] or a
    /// container of any variant. The source's elements are copied in order.
    ///
    /// # Errors
    /// Returns [`ContainerError::TypeMismatch`] for any other value, including strings.
    ///
    /// # Examples
    /// ```
    /// # use collection_adapters::collections::{List, Queue, Value};
    /// let queue = Queue::of([1, 2, 3]);
    /// let list = List::try_new(&Value::from(queue)).unwrap();
    /// assert_eq!(list.to_string(), "[1,2,3]");
    /// assert!(List::try_new(&Value::from("abc")).is_err());
    /// ```
    pub fn try_new(source: &Value) -> Result<Self, ContainerError> {
        match source.as_sequence() {
            Some(sequence) => Ok(Self::from_sequence(sequence)),
            None => Err(Self::not_sequence_like("new", source)),
        }
    }

    /// Creates a Container by copying the elements of any [`Sequence`], such as a slice of
    /// values or a container of another variant.
    pub fn from_sequence<S: Sequence + ?Sized>(source: &S) -> Self {
        trace!(from = %source.kind(), to = %K::KIND, len = source.len(), "copying sequence");
        Self::from_vec(source.to_array())
    }

    /// Creates a Container holding the provided elements in order.
    ///
    /// # Examples
    /// ```
    /// # use collection_adapters::collections::{List, Value};
    /// let list = List::of([1, 2, 3]);
    /// assert_eq!(list.get(1), Some(&Value::from(2)));
    /// ```
    pub fn of<I, V>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        elements.into_iter().map(Into::<Value>::into).collect()
    }

    /// Creates a Container from any iterable source.
    pub fn from_iterable<I, V>(iterable: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::of(iterable)
    }

    /// Creates a Container from an iterable source, passing every element and its index through
    /// `transform` first.
    ///
    /// # Examples
    /// ```
    /// # use collection_adapters::collections::{Stack, Value};
    /// let stack = Stack::from_map(1..=3, |value, _| Value::from(value.to_number() * 10.0));
    /// assert_eq!(stack.to_string(), "[10,20,30]");
    /// ```
    pub fn from_map<I, V, F>(iterable: I, mut transform: F) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
        F: FnMut(Value, usize) -> Value,
    {
        iterable
            .into_iter()
            .enumerate()
            .map(|(index, value)| transform(value.into(), index))
            .collect()
    }

    /// Like [`from_map`](Container::from_map), but with an explicit context that is passed to
    /// every invocation of `transform`.
    pub fn from_map_with<I, V, C, F>(iterable: I, context: &mut C, mut transform: F) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
        F: FnMut(&mut C, Value, usize) -> Value,
    {
        iterable
            .into_iter()
            .enumerate()
            .map(|(index, value)| transform(context, value.into(), index))
            .collect()
    }

    /// Returns true if `value` holds a container of this variant.
    pub fn is_instance(value: &Value) -> bool {
        K::from_value(value).is_some()
    }

    /// Returns the number of elements in the Container.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the Container contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the elements, in the variant's iteration order. Every call
    /// creates a fresh iterator and iterating never changes the Container.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.items.iter(),
            reversed: K::REVERSED,
        }
    }

    /// Exports a copy of the elements in storage order. Changes to the returned Vec don't affect
    /// the Container.
    pub fn to_array(&self) -> Vec<Value> {
        self.items.clone()
    }

    /// Creates a new Container of the same variant holding every element, in storage order, for
    /// which `predicate` returns true.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Value, usize) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .filter(|(index, value)| predicate(*value, *index))
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// Invokes `callback` with every element and its index, in storage order.
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&Value, usize),
    {
        for (index, value) in self.items.iter().enumerate() {
            callback(value, index);
        }
    }

    /// Invokes `callback` with a mutable reference to every element and its index, in storage
    /// order.
    pub fn for_each_mut<F>(&mut self, mut callback: F)
    where
        F: FnMut(&mut Value, usize),
    {
        for (index, value) in self.items.iter_mut().enumerate() {
            callback(value, index);
        }
    }

    /// Compares two Containers of the same variant structurally. See
    /// [`structural_eq`](crate::collections::traits::structural_eq).
    pub fn equals(&self, other: &Self) -> bool {
        structural_eq(self, other)
    }

    /// Compares against a dynamically typed value, which is never equal unless it holds a
    /// container of the same variant.
    pub fn equals_value(&self, other: &Value) -> bool {
        K::from_value(other).is_some_and(|other| self.equals(other))
    }

    pub(crate) fn not_sequence_like(operation: &'static str, found: &Value) -> ContainerError {
        tracing::debug!(operation, found = found.type_name(), "rejected non sequence-like source");
        TypeMismatch {
            operation,
            expected: SEQUENCE_LIKE,
            found: found.type_name(),
        }
        .into()
    }
}

impl<K: Variant> Sequence for Container<K> {
    fn kind(&self) -> SequenceKind {
        K::KIND
    }

    fn as_slice(&self) -> &[Value] {
        &self.items
    }
}

impl<K: Variant> Default for Container<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Variant> Clone for Container<K> {
    fn clone(&self) -> Self {
        Self::from_vec(self.items.clone())
    }
}

impl<K: Variant> From<Vec<Value>> for Container<K> {
    fn from(value: Vec<Value>) -> Self {
        Self::from_vec(value)
    }
}

impl<K: Variant> From<Container<K>> for Vec<Value> {
    fn from(value: Container<K>) -> Self {
        value.items
    }
}

impl<K: Variant> From<Container<K>> for Value {
    fn from(value: Container<K>) -> Self {
        K::into_value(value)
    }
}

impl<K: Variant> TryFrom<&Value> for Container<K> {
    type Error = ContainerError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl<K: Variant> TryFrom<Value> for Container<K> {
    type Error = ContainerError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            // Take ownership of the elements rather than copying them.
            Value::Array(items) => Ok(Self::from_vec(items)),
            other => Self::try_new(&other),
        }
    }
}

impl<K: Variant, V: Into<Value>> FromIterator<V> for Container<K> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().map(Into::<Value>::into).collect())
    }
}

impl<K: Variant, V: Into<Value>> Extend<V> for Container<K> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::<Value>::into));
    }
}

impl<K: Variant> IntoIterator for Container<K> {
    type Item = Value;

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.items.into_iter(),
            reversed: K::REVERSED,
        }
    }
}

impl<'a, K: Variant> IntoIterator for &'a Container<K> {
    type Item = &'a Value;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Variant> PartialEq for Container<K> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<K: Variant> PartialEq<[Value]> for Container<K> {
    fn eq(&self, other: &[Value]) -> bool {
        structural_eq(self, other)
    }
}

impl<K: Variant> PartialEq<Vec<Value>> for Container<K> {
    fn eq(&self, other: &Vec<Value>) -> bool {
        structural_eq(self, other)
    }
}

impl<K: Variant> Serialize for Container<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

/// Renders the elements, in storage order, as a compact JSON array, e.g. `[1,"a",[2,3]]`. Numbers
/// are written as [`Value`]'s `Display` writes them, so `1e21` becomes `1e+21`.
impl<K: Variant> Display for Container<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_canonical_json(f, self)
    }
}

impl<K: Variant> Debug for Container<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&K::KIND.to_string())
            .field(&JsonDebug(self))
            .finish()
    }
}
