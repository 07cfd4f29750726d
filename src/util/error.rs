use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Names the types a container can be constructed from, for use in error messages.
pub(crate) const SEQUENCE_LIKE: &str = "Array/List/Queue/Stack/Deque";

/// An index was used that doesn't exist in the collection.
#[derive(Debug)]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// An argument had the wrong kind or shape for the operation, such as a string where a number was
/// expected, or a scalar passed to a constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMismatch {
    /// The operation that rejected the argument.
    pub operation: &'static str,
    /// A description of the accepted arguments.
    pub expected: &'static str,
    /// The type of the rejected argument.
    pub found: &'static str,
}

impl Display for TypeMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}() can only take {} as argument, found {}!",
            self.operation, self.expected, self.found
        )
    }
}

impl Error for TypeMismatch {}

/// A numeric argument was well-formed but below the smallest value the operation accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct IllegalArgument {
    /// The operation that rejected the argument.
    pub operation: &'static str,
    /// The name of the rejected parameter.
    pub parameter: &'static str,
    /// The rejected value.
    pub value: f64,
    /// The smallest accepted value.
    pub min: f64,
}

impl Display for IllegalArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}() {} cannot be smaller than {}, got {}!",
            self.operation, self.parameter, self.min, self.value
        )
    }
}

impl Error for IllegalArgument {}

/// The error type returned by every validated container operation.
#[derive(Debug, Clone, PartialEq, Display, Error, From, TryInto, IsVariant)]
pub enum ContainerError {
    /// See [`TypeMismatch`].
    TypeMismatch(TypeMismatch),
    /// See [`IllegalArgument`].
    IllegalArgument(IllegalArgument),
}
