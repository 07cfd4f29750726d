use std::ops::{Index, IndexMut, Range};

use crate::collections::Value;
use crate::collections::container::{Container, Variant};
use crate::collections::traits::{Sequence, SequenceKind};
use crate::util::error::ContainerError;
use crate::util::option::OptionExtension;
use crate::util::validate::{at_least, finite, finite_or, resolve_offset};

/// The random access [`Variant`].
#[derive(Debug)]
pub enum ListKind {}

impl Variant for ListKind {
    const KIND: SequenceKind = SequenceKind::List;

    fn into_value(container: List) -> Value {
        Value::List(container)
    }

    fn from_value(value: &Value) -> Option<&List> {
        match value {
            Value::List(list) => Some(list),
            _ => None,
        }
    }
}

/// A random access list of [`Value`]s, with the widest set of operations in the family.
///
/// Operations that take relative offsets (`slice`, `fill`, `copy_within`, ...) count negative
/// offsets back from the end and clamp offsets that fall outside of the List. The validated
/// operations ([`insert`](List::insert), [`remove`](List::remove), [`flat`](List::flat) and
/// [`index_of_from`](List::index_of_from)) accept their numeric arguments as [`Value`]s and reject
/// anything that isn't a finite number, or is more negative than the List is long, before
/// changing anything.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the List.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `get/set` | `O(1)` |
/// | `add` | `O(m)` |
/// | `insert` | `O(n-i+m)` |
/// | `remove` | `O(n-i)` |
/// | `concate_front` | `O(n+m)` |
/// | `index_of/includes` | `O(n)` |
/// | `sort` | `O(n*log(n))` |
pub type List = Container<ListKind>;

impl List {
    /// Returns true if `value` holds a List.
    pub fn is_list(value: &Value) -> bool {
        Self::is_instance(value)
    }

    /// Returns a reference to the element at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Replaces the element at `index`. Setting past the end grows the List, filling the gap with
    /// [`Value::Undefined`].
    ///
    /// # Panics
    /// Panics with [`IndexOutOfBounds`](crate::util::error::IndexOutOfBounds) if the List can't grow
    /// to hold `index`, which is always the case for [`usize::MAX`]. The List is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use collection_adapters::list;
    /// let mut list = list![1];
    /// list.set(2, 3);
    /// assert_eq!(list.to_string(), "[1,null,3]");
    /// ```
    pub fn set(&mut self, index: usize, value: impl Into<Value>) {
        let len = self.items.len();
        if index >= len {
            let new_len = index
                .checked_add(1)
                .filter(|&new_len| self.items.try_reserve_exact(new_len - len).is_ok())
                .or_out_of_bounds(index, len);
            self.items.resize(new_len, Value::Undefined);
        }
        self.items[index] = value.into();
    }

    /// Appends all of the provided elements to the end of the List.
    pub fn add<I, V>(&mut self, elements: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.extend(elements);
    }

    /// Inserts the provided elements, in order, starting at `index`. Negative indices count back
    /// from the end and indices past the end append.
    ///
    /// # Errors
    /// - [`ContainerError::TypeMismatch`] if `index` isn't a finite number.
    /// - [`ContainerError::IllegalArgument`] if `index < -len`.
    ///
    /// # Examples
    /// ```
    /// # use collection_adapters::list;
    /// let mut list = list![1, 2, 3];
    /// list.insert(-1, [10, 20]).unwrap();
    /// assert_eq!(list.to_string(), "[1,2,10,20,3]");
    /// assert!(list.insert("abc", [0]).is_err());
    /// ```
    pub fn insert<I, V>(
        &mut self,
        index: impl Into<Value>,
        elements: I,
    ) -> Result<(), ContainerError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let start = self.checked_start("insert", &index.into())?;
        self.items.splice(start..start, elements.into_iter().map(Into::<Value>::into));
        Ok(())
    }

    /// Removes up to `count` elements starting at `index`, returning them. `count` defaults to 1
    /// when [`Value::Undefined`] and a negative `count` removes nothing.
    ///
    /// # Errors
    /// - [`ContainerError::TypeMismatch`] if `index` or `count` isn't a finite number.
    /// - [`ContainerError::IllegalArgument`] if `index < -len`.
    ///
    /// # Examples
    /// ```
    /// # use collection_adapters::{list, collections::Value};
    /// let mut list = list![1, 2, 3, 4];
    /// assert_eq!(list.remove(1, ()).unwrap(), vec![Value::from(2)]);
    /// assert_eq!(list.remove(-2, 5).unwrap().len(), 2);
    /// assert_eq!(list.to_string(), "[1]");
    /// ```
    pub fn remove(
        &mut self,
        index: impl Into<Value>,
        count: impl Into<Value>,
    ) -> Result<Vec<Value>, ContainerError> {
        let index = finite("remove", "index", &index.into())?;
        let count = finite_or("remove", "count", &count.into(), 1.0)?;
        let start = self.resolve_start("remove", index)?;

        let count = if count > 0.0 {
            (count.trunc() as usize).min(self.items.len() - start)
        } else {
            0
        };

        Ok(self.items.drain(start..start + count).collect())
    }

    /// Prepends the elements of any sequence, keeping their original order.
    pub fn concate_front<S: Sequence + ?Sized>(&mut self, other: &S) -> &mut Self {
        self.items.splice(0..0, other.as_slice().iter().cloned());
        self
    }

    /// Like [`concate_front`](List::concate_front), but for a dynamically typed value, which must
    /// be an array or a container.
    ///
    /// # Errors
    /// Returns [`ContainerError::TypeMismatch`] for any other value.
    pub fn try_concate_front(&mut self, other: &Value) -> Result<&mut Self, ContainerError> {
        match other.as_sequence() {
            Some(sequence) => Ok(self.concate_front(sequence)),
            None => Err(Self::not_sequence_like("concate_front", other)),
        }
    }

    /// Creates a new List holding the elements of self followed by the elements of `other`.
    pub fn concate<S: Sequence + ?Sized>(&self, other: &S) -> List {
        self.items.iter().chain(other.as_slice()).cloned().collect()
    }

    /// Copies the elements in `start..end` over the elements starting at `target`, within the
    /// List. The length never changes, so the copied range is cut short at the end of the List.
    ///
    /// # Examples
    /// ```
    /// # use collection_adapters::list;
    /// let mut list = list!["a", "b", "c", "d", "e"];
    /// list.copy_within(0, 3, Some(4));
    /// assert_eq!(list.join(","), "d,b,c,d,e");
    /// ```
    pub fn copy_within(&mut self, target: isize, start: isize, end: Option<isize>) -> &mut Self {
        let len = self.items.len();
        let to = relative(target, len);
        let from = relative(start, len);
        let end = end.map_or(len, |end| relative(end, len));
        let count = end.saturating_sub(from).min(len - to);

        if count > 0 {
            let copied = self.items[from..from + count].to_vec();
            self.items[to..to + count].clone_from_slice(&copied);
        }
        self
    }

    /// Overwrites the elements in `start..end` with copies of `value`.
    pub fn fill(&mut self, value: impl Into<Value>, start: isize, end: Option<isize>) -> &mut Self {
        let range = self.relative_range(start, end);
        let value = value.into();
        for item in &mut self.items[range] {
            item.clone_from(&value);
        }
        self
    }

    /// Returns true if `predicate` holds for every element. Empty Lists always return true.
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Value, usize) -> bool,
    {
        self.items.iter().enumerate().all(|(index, value)| predicate(value, index))
    }

    /// Returns the first element for which `predicate` holds.
    pub fn find<F>(&self, mut predicate: F) -> Option<&Value>
    where
        F: FnMut(&Value, usize) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .find(|(index, value)| predicate(*value, *index))
            .map(|(_, value)| value)
    }

    /// Returns the index of the first element for which `predicate` holds.
    pub fn find_index<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&Value, usize) -> bool,
    {
        self.items.iter().enumerate().position(|(index, value)| predicate(value, index))
    }

    /// Creates a new List with nested arrays flattened into it, recursively, up to `depth`
    /// levels. `depth` defaults to 1 when [`Value::Undefined`], fractional depths are truncated
    /// and a depth of 0 is a plain copy. Only [`Value::Array`]s are flattened; nested containers
    /// are kept as they are.
    ///
    /// # Errors
    /// - [`ContainerError::TypeMismatch`] if `depth` isn't a finite number.
    /// - [`ContainerError::IllegalArgument`] if `depth < 0`.
    ///
    /// # Examples
    /// ```
    /// # use collection_adapters::{array, list};
    /// let list = list![0, 1, 2, array![array![array![3, 4]]]];
    /// assert_eq!(list.flat(()).unwrap().to_string(), "[0,1,2,[[3,4]]]");
    /// assert_eq!(list.flat(2).unwrap().to_string(), "[0,1,2,[3,4]]");
    /// assert!(list.flat(-1).is_err());
    /// ```
    pub fn flat(&self, depth: impl Into<Value>) -> Result<List, ContainerError> {
        let depth = finite_or("flat", "depth", &depth.into(), 1.0)?;
        let depth = at_least("flat", "depth", depth, 0.0)?;

        let mut flattened = Vec::with_capacity(self.items.len());
        flatten_into(&mut flattened, &self.items, depth.trunc() as usize);
        Ok(List::from(flattened))
    }

    /// Maps every element through `transform`, flattening any arrays it returns by one level.
    ///
    /// # Examples
    /// ```
    /// # use collection_adapters::{array, list, collections::Value};
    /// let list = list![1, 2];
    /// let mapped = list.flat_map(|v, _| array![v.to_number() * 2.0, array![v.clone()]]);
    /// assert_eq!(mapped.to_string(), "[2,[1],4,[2]]");
    /// ```
    pub fn flat_map<F>(&self, transform: F) -> List
    where
        F: FnMut(&Value, usize) -> Value,
    {
        let mapped = self.map(transform);
        let mut flattened = Vec::with_capacity(mapped.items.len());
        flatten_into(&mut flattened, &mapped.items, 1);
        List::from(flattened)
    }

    /// Returns true if the List contains `element`. Unlike [`index_of`](List::index_of), `NaN`
    /// is found.
    pub fn includes(&self, element: &Value) -> bool {
        self.includes_from(element, 0)
    }

    /// Returns true if the elements from the relative offset `from` onward contain `element`.
    pub fn includes_from(&self, element: &Value, from: isize) -> bool {
        let start = relative(from, self.items.len());
        self.items[start..].iter().any(|value| value.same_value_zero(element))
    }

    /// Returns the index of the first element strictly equal to `element`.
    pub fn index_of(&self, element: &Value) -> Option<usize> {
        self.items.iter().position(|value| value.strict_eq(element))
    }

    /// Returns the index of the first element strictly equal to `element`, searching from `start`.
    /// `start` defaults to 0 when [`Value::Undefined`] and counts back from the end if negative.
    ///
    /// # Errors
    /// - [`ContainerError::TypeMismatch`] if `start` isn't a finite number.
    /// - [`ContainerError::IllegalArgument`] if `start < -len`.
    pub fn index_of_from(
        &self,
        element: &Value,
        start: impl Into<Value>,
    ) -> Result<Option<usize>, ContainerError> {
        let start = finite_or("index_of", "start", &start.into(), 0.0)?;
        let start = self.resolve_start("index_of", start)?;

        Ok(self.items[start..]
            .iter()
            .position(|value| value.strict_eq(element))
            .map(|index| index + start))
    }

    /// Returns the index of the last element strictly equal to `element`, searching backwards
    /// from the relative offset `from` (the last element if [`None`]).
    ///
    /// # Examples
    /// ```
    /// # use collection_adapters::{list, collections::Value};
    /// let list = list![1, 2, 3, 1];
    /// assert_eq!(list.last_index_of(&Value::from(1), None), Some(3));
    /// assert_eq!(list.last_index_of(&Value::from(1), Some(-2)), Some(0));
    /// ```
    pub fn last_index_of(&self, element: &Value, from: Option<isize>) -> Option<usize> {
        let len = self.items.len();
        let last = match from {
            None => len.checked_sub(1)?,
            Some(from) if from >= 0 => (from as usize).min(len.checked_sub(1)?),
            Some(from) => len.checked_sub(from.unsigned_abs())?,
        };

        self.items[..=last].iter().rposition(|value| value.strict_eq(element))
    }

    /// Joins the text form of every element with `separator`. Null and undefined elements are
    /// written as empty strings.
    pub fn join(&self, separator: &str) -> String {
        self.items
            .iter()
            .map(|value| match value {
                Value::Undefined | Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Returns an iterator over the indices of the List.
    pub fn keys(&self) -> Range<usize> {
        0..self.items.len()
    }

    /// Creates a new List by passing every element and its index through `transform`.
    pub fn map<F>(&self, mut transform: F) -> List
    where
        F: FnMut(&Value, usize) -> Value,
    {
        self.items.iter().enumerate().map(|(index, value)| transform(value, index)).collect()
    }

    /// Folds the elements from first to last, starting with `initial` or the number 0 if
    /// [`None`].
    ///
    /// # Examples
    /// ```
    /// # use collection_adapters::{list, collections::Value};
    /// let list = list![1, 4, 9, 1];
    /// let sum = list.reduce(|acc, v, _| Value::from(acc.to_number() + v.to_number()), None);
    /// assert_eq!(sum, Value::from(15));
    /// ```
    pub fn reduce<F>(&self, mut reducer: F, initial: Option<Value>) -> Value
    where
        F: FnMut(Value, &Value, usize) -> Value,
    {
        self.items
            .iter()
            .enumerate()
            .fold(initial.unwrap_or(Value::Number(0.0)), |acc, (index, value)| {
                reducer(acc, value, index)
            })
    }

    /// Folds the elements from last to first, starting with `initial` or the number 0 if
    /// [`None`].
    pub fn reduce_right<F>(&self, mut reducer: F, initial: Option<Value>) -> Value
    where
        F: FnMut(Value, &Value, usize) -> Value,
    {
        self.items
            .iter()
            .enumerate()
            .rev()
            .fold(initial.unwrap_or(Value::Number(0.0)), |acc, (index, value)| {
                reducer(acc, value, index)
            })
    }

    /// Reverses the List in place.
    pub fn reverse(&mut self) -> &mut Self {
        self.items.reverse();
        self
    }

    /// Creates a new List from the elements in the relative range `start..end`, where `end`
    /// defaults to the end of the List.
    ///
    /// # Examples
    /// ```
    /// # use collection_adapters::list;
    /// let list = list![1, 2, 3];
    /// assert_eq!(list.slice(1, None).to_string(), "[2,3]");
    /// assert_eq!(list.slice(0, Some(-1)).to_string(), "[1,2]");
    /// ```
    pub fn slice(&self, start: isize, end: Option<isize>) -> List {
        let range = self.relative_range(start, end);
        List::from(self.items[range].to_vec())
    }

    /// Validates `index` as the start of a splice and resolves it against the current length.
    fn checked_start(&self, operation: &'static str, index: &Value) -> Result<usize, ContainerError> {
        let index = finite(operation, "index", index)?;
        self.resolve_start(operation, index)
    }

    fn resolve_start(&self, operation: &'static str, index: f64) -> Result<usize, ContainerError> {
        let len = self.items.len();
        at_least(operation, "index", index, -(len as f64))?;
        Ok(resolve_offset(index, len))
    }

    fn relative_range(&self, start: isize, end: Option<isize>) -> Range<usize> {
        let len = self.items.len();
        let start = relative(start, len);
        let end = end.map_or(len, |end| relative(end, len));
        start..end.max(start)
    }
}

fn relative(offset: isize, len: usize) -> usize {
    resolve_offset(offset as f64, len)
}

fn flatten_into(out: &mut Vec<Value>, items: &[Value], depth: usize) {
    for item in items {
        match item {
            Value::Array(nested) if depth > 0 => flatten_into(out, nested, depth - 1),
            other => out.push(other.clone()),
        }
    }
}

impl Index<usize> for List {
    type Output = Value;

    /// # Panics
    /// Panics if the provided index is out of bounds.
    fn index(&self, index: usize) -> &Self::Output {
        let len = self.items.len();
        self.items.get(index).or_out_of_bounds(index, len)
    }
}

impl IndexMut<usize> for List {
    /// # Panics
    /// Panics if the provided index is out of bounds.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.items.len();
        self.items.get_mut(index).or_out_of_bounds(index, len)
    }
}
