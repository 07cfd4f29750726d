use derive_more::{Display, IsVariant};

use crate::collections::Value;

/// The kinds of sequence that containers can be built from and compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum SequenceKind {
    Array,
    List,
    Queue,
    Stack,
    Deque,
}

/// An ordered, length-queryable, indexable sequence of [`Value`]s that can export its contents.
///
/// This is the only capability a source needs for a container to be constructed from it, so
/// conversion between the container variants (and from plain arrays) goes through this trait
/// rather than a list of accepted types.
pub trait Sequence {
    /// The kind of sequence, used to decide whether two nested sequences are comparable.
    fn kind(&self) -> SequenceKind;

    /// The elements of the sequence, in storage order.
    fn as_slice(&self) -> &[Value];

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Exports a shallow copy of the elements, in storage order.
    fn to_array(&self) -> Vec<Value> {
        self.as_slice().to_vec()
    }
}

impl Sequence for [Value] {
    fn kind(&self) -> SequenceKind {
        SequenceKind::Array
    }

    fn as_slice(&self) -> &[Value] {
        self
    }
}

impl Sequence for Vec<Value> {
    fn kind(&self) -> SequenceKind {
        SequenceKind::Array
    }

    fn as_slice(&self) -> &[Value] {
        self
    }
}

impl<const N: usize> Sequence for [Value; N] {
    fn kind(&self) -> SequenceKind {
        SequenceKind::Array
    }

    fn as_slice(&self) -> &[Value] {
        self
    }
}

/// Compares two sequences structurally: they are equal when they have the same length and every
/// pair of elements at the same index is equal according to [`element_eq`].
///
/// The kinds of `a` and `b` themselves aren't compared, only the kinds of nested sequences.
pub fn structural_eq<A, B>(a: &A, b: &B) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
{
    let (a, b) = (a.as_slice(), b.as_slice());
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| element_eq(x, y))
}

/// Compares two elements. Nested sequences of the same kind are compared recursively, a sequence
/// is never equal to a scalar or a sequence of another kind, and scalars use strict equality.
///
/// Owned values can't form cycles, so the recursion always terminates.
pub fn element_eq(a: &Value, b: &Value) -> bool {
    match (a.as_sequence(), b.as_sequence()) {
        (Some(a), Some(b)) => a.kind() == b.kind() && structural_eq(a, b),
        (None, None) => a.scalar_eq(b),
        _ => false,
    }
}
