use std::fmt::{self, Debug, Formatter};

use serde::Serialize;

use crate::collections::value::write_canonical_json;

/// Debug formats the wrapped value as canonical JSON, so nested contents aren't quoted and escaped
/// a second time by the surrounding `Debug` output.
pub(crate) struct JsonDebug<'a, T: Serialize + ?Sized>(pub &'a T);

impl<T: Serialize + ?Sized> Debug for JsonDebug<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_canonical_json(f, self.0)
    }
}
