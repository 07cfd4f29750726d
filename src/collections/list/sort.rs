use std::cmp::Ordering;

use tracing::trace;

use super::List;
use crate::collections::Value;

/// How a List's elements are ordered when sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    /// Every element is a date, or every element shares the first element's type category. The
    /// caller's comparator is used, or ascending numeric order if there isn't one.
    Homogeneous,
    /// The elements are of mixed types, so they are ordered by their text form and any comparator
    /// is ignored.
    Textual,
}

impl Strategy {
    fn for_items(items: &[Value]) -> Strategy {
        let homogeneous = match items.first() {
            Some(Value::Date(_)) => items.iter().all(Value::is_date),
            Some(first) => items.iter().all(|value| value.type_of() == first.type_of()),
            None => true,
        };

        if homogeneous { Strategy::Homogeneous } else { Strategy::Textual }
    }
}

impl List {
    /// Sorts the List in place and returns it.
    ///
    /// When every element is a date, or every element has the same [`type_of`](Value::type_of) as
    /// the first, elements are ordered numerically (see [`to_number`](Value::to_number)). Values
    /// that coerce to `NaN` are ordered after every number, keeping their relative order.
    /// Otherwise, the List is ordered by the UTF-16 code units of each element's text form, with
    /// undefined elements last.
    ///
    /// The sort is stable.
    ///
    /// # Examples
    /// ```
    /// # use collection_adapters::list;
    /// let mut numbers = list![71, 8, 9];
    /// assert_eq!(numbers.sort().to_string(), "[8,9,71]");
    ///
    /// let mut mixed = list![10, "9", 1];
    /// assert_eq!(mixed.sort().to_string(), r#"[1,10,"9"]"#);
    /// ```
    pub fn sort(&mut self) -> &mut Self {
        self.sort_with(None)
    }

    /// Sorts the List in place with `compare`, returning it.
    ///
    /// `compare` is only consulted when the elements are homogeneous, as described for
    /// [`sort`](List::sort). Mixed Lists are always ordered by their text form.
    pub fn sort_by<F>(&mut self, mut compare: F) -> &mut Self
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        self.sort_with(Some(&mut compare as &mut dyn FnMut(&Value, &Value) -> Ordering))
    }

    fn sort_with(
        &mut self,
        compare: Option<&mut dyn FnMut(&Value, &Value) -> Ordering>,
    ) -> &mut Self {
        if self.items.is_empty() {
            return self;
        }

        let strategy = Strategy::for_items(&self.items);
        trace!(?strategy, len = self.items.len(), custom = compare.is_some(), "sorting list");

        match (strategy, compare) {
            (Strategy::Homogeneous, Some(compare)) => self.items.sort_by(compare),
            (Strategy::Homogeneous, None) => self.items.sort_by(numeric_order),
            (Strategy::Textual, _) => self.items.sort_by_cached_key(textual_key),
        }
        self
    }
}

fn numeric_order(a: &Value, b: &Value) -> Ordering {
    numeric_key(a).total_cmp(&numeric_key(b))
}

fn numeric_key(value: &Value) -> f64 {
    // Adding zero turns -0 into 0, so the two compare equal.
    value.to_number() + 0.0
}

/// Undefined values sort after everything else; the rest compare by UTF-16 code units.
fn textual_key(value: &Value) -> (bool, Vec<u16>) {
    match value {
        Value::Undefined => (true, Vec::new()),
        other => (false, other.to_string().encode_utf16().collect()),
    }
}
