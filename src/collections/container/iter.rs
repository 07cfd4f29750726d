use std::iter::FusedIterator;
use std::{slice, vec};

use crate::collections::Value;

/// A borrowed iterator over the elements of a container, in the container's iteration order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    pub(crate) inner: slice::Iter<'a, Value>,
    pub(crate) reversed: bool,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.inner.next_back()
        } else {
            self.inner.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.inner.next()
        } else {
            self.inner.next_back()
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// An owned iterator over the elements of a container, in the container's iteration order.
#[derive(Debug)]
pub struct IntoIter {
    pub(crate) inner: vec::IntoIter<Value>,
    pub(crate) reversed: bool,
}

impl Iterator for IntoIter {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.inner.next_back()
        } else {
            self.inner.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.inner.next()
        } else {
            self.inner.next_back()
        }
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}
