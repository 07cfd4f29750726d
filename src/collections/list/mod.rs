//! A module containing [`List`] and associated types.
//!
//! Sorting and locale-aware rendering are split into their own files, and [`LocaleOptions`] with
//! [`NumberStyle`] configure the latter.
//!
//! [`List`] is also re-exported under the parent module.

mod list;
mod locale;
mod sort;
mod tests;

pub use list::*;
pub use locale::*;
