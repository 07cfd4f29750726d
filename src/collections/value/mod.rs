//! A module containing [`Value`], the element type stored by every container.
//!
//! Containers in this crate are heterogeneous: a single List can hold numbers, strings, dates,
//! plain nested arrays and other containers side by side. [`Value`] is the closed set of things
//! that can be stored, along with the coercions and comparisons the container operations rely on.
//!
//! [`Value`] is also re-exported under the parent module.

mod convert;
mod number;
mod render;
mod tests;
mod value;

pub(crate) use render::write_canonical_json;
pub use value::*;
