#![warn(missing_docs)]

pub mod error;
pub(crate) mod fmt;
pub(crate) mod option;
pub(crate) mod panic;
pub(crate) mod validate;
