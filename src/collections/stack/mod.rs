//! A module containing [`Stack`], a last-in first-out adapter.
//!
//! [`Stack`] is also re-exported under the parent module.

mod stack;

pub use stack::*;
