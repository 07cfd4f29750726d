//! A module containing [`Deque`], a double-ended adapter.
//!
//! [`Deque`] is also re-exported under the parent module.

mod deque;

pub use deque::*;
