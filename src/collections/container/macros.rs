/// Creates a [`Value::Array`](crate::collections::Value::Array) from any number of expressions
/// that convert into [`Value`](crate::collections::Value).
#[macro_export]
macro_rules! array {
    ($($value:expr),* $(,)?) => {
        $crate::collections::Value::Array(
            ::std::vec![$($crate::collections::Value::from($value)),*]
        )
    };
}

/// Creates a [`List`](crate::collections::List) holding the provided expressions in order.
///
/// # Examples
/// ```
/// # use collection_adapters::{array, list};
/// let list = list![1, "two", array![3, 4]];
/// assert_eq!(list.to_string(), r#"[1,"two",[3,4]]"#);
/// ```
#[cfg(feature = "list")]
#[macro_export]
macro_rules! list {
    ($($value:expr),* $(,)?) => {
        $crate::collections::List::from(
            ::std::vec![$($crate::collections::Value::from($value)),*]
        )
    };
}

/// Creates a [`Queue`](crate::collections::Queue) holding the provided expressions in order.
#[cfg(feature = "queue")]
#[macro_export]
macro_rules! queue {
    ($($value:expr),* $(,)?) => {
        $crate::collections::Queue::from(
            ::std::vec![$($crate::collections::Value::from($value)),*]
        )
    };
}

/// Creates a [`Stack`](crate::collections::Stack) holding the provided expressions in order,
/// bottom first.
#[cfg(feature = "stack")]
#[macro_export]
macro_rules! stack {
    ($($value:expr),* $(,)?) => {
        $crate::collections::Stack::from(
            ::std::vec![$($crate::collections::Value::from($value)),*]
        )
    };
}

/// Creates a [`Deque`](crate::collections::Deque) holding the provided expressions in order,
/// front first.
#[cfg(feature = "deque")]
#[macro_export]
macro_rules! deque {
    ($($value:expr),* $(,)?) => {
        $crate::collections::Deque::from(
            ::std::vec![$($crate::collections::Value::from($value)),*]
        )
    };
}
