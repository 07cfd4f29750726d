//! A module containing [`Queue`], a first-in first-out adapter.
//!
//! [`Queue`] is also re-exported under the parent module.

mod queue;

pub use queue::*;
