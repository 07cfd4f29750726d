//! The container family: [`List`], [`Queue`], [`Stack`] and [`Deque`].
//!
//! # Purpose
//! Each container wraps a single owned sequence of [`Value`]s and restricts it to one access
//! discipline: random access, first-in first-out, last-in first-out or double-ended. They share
//! everything else, so any container can be built from any other (or from a plain array),
//! compared structurally, filtered, iterated and rendered as JSON.
//!
//! # Method
//! The variants are aliases of the generic [`Container`](container::Container), parameterized by a
//! [`Variant`](container::Variant) marker. Shared behaviour is written once against the
//! [`Sequence`](traits::Sequence) trait and only the access operations of each variant live in its
//! own module.

pub mod container;
pub mod traits;
pub mod value;

#[cfg(feature = "deque")]
pub mod deque;
#[cfg(feature = "list")]
pub mod list;
#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "stack")]
pub mod stack;

#[cfg(feature = "deque")]
#[doc(inline)]
pub use deque::Deque;
#[cfg(feature = "list")]
#[doc(inline)]
pub use list::{List, LocaleOptions, NumberStyle};
#[cfg(feature = "queue")]
#[doc(inline)]
pub use queue::Queue;
#[cfg(feature = "stack")]
#[doc(inline)]
pub use stack::Stack;
#[doc(inline)]
pub use value::Value;

#[doc(inline)]
pub use crate::util::error::{ContainerError, IllegalArgument, TypeMismatch};
