//! Traits shared by the container family.

mod sequence;

pub use sequence::*;
