//! A module containing [`Container`], the generic adapter behind every variant, and associated
//! types.
//!
//! Each variant ([`List`](crate::collections::List), [`Queue`](crate::collections::Queue),
//! [`Stack`](crate::collections::Stack) and [`Deque`](crate::collections::Deque)) is an alias for
//! `Container<K>` with a [`Variant`] marker `K`. Everything the variants have in common
//! (construction, conversion, equality, filtering, iteration and stringification) is implemented
//! here once, while the access discipline of each variant lives in its own module.

mod container;
mod iter;
mod macros;

pub use container::*;
pub use iter::*;
