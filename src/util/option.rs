use crate::util::error::IndexOutOfBounds;

pub(crate) trait OptionExtension<T> {
    /// Unwraps an element looked up at `index` in a collection of `len` elements, panicking with
    /// the message of an [`IndexOutOfBounds`] error if it wasn't found.
    ///
    /// # Panics
    /// Panics if the [`Option`] is [`None`].
    fn or_out_of_bounds(self, index: usize, len: usize) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    fn or_out_of_bounds(self, index: usize, len: usize) -> T {
        match self {
            Some(val) => val,
            None => panic!("{}", IndexOutOfBounds { index, len }),
        }
    }
}
