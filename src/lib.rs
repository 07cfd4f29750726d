//! A small family of container adapters: [`List`](collections::List),
//! [`Queue`](collections::Queue), [`Stack`](collections::Stack) and
//! [`Deque`](collections::Deque).
//!
//! # Purpose
//! Every container here is a thin wrapper around one contiguous, growable sequence. What sets them
//! apart is the interface each one exposes: random access for a List, first-in first-out for a
//! Queue, last-in first-out for a Stack and both ends for a Deque. The interesting parts are what
//! they have in common, which is conversion between each other, recursive structural equality and
//! validated mutation.
//!
//! # Elements
//! Containers are heterogeneous. Their elements are [`Value`](collections::Value)s, a closed set of
//! scalars (numbers, strings, booleans, dates, null and undefined) plus nested plain arrays and
//! nested containers. Nesting is by value, so copying a container copies everything in it.
//!
//! # Error Handling
//! Operations that can reject their arguments return a [`Result`] with a
//! [`ContainerError`](util::error::ContainerError), which distinguishes an argument of the wrong
//! type from a numeric argument that is out of range. All checks happen before anything is
//! modified, so a failed call leaves the container as it was. Indexing out of bounds with `[]`
//! panics, in the same way as [`Vec`].
//!
//! # Logging
//! Rejected arguments are reported as `debug` events and conversions and sorts as `trace` events
//! through [`tracing`]. No subscriber is installed by this crate.
//!
//! # Features
//! Each variant is behind a feature of the same name (`list`, `queue`, `stack` and `deque`), all of
//! which are enabled by `collections-all`, the default.
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod util;
