use std::fmt::{self, Display, Formatter};
use std::io;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::ser::{CompactFormatter, Formatter as JsonFormatter};

use super::Value;
use super::number::format_number;

/// Integral numbers below this magnitude are written with every digit rather than an exponent.
const MAX_PLAIN_INTEGER: f64 = 1e21;

/// Formats a date as ISO-8601 in UTC with millisecond precision.
pub(crate) fn iso_string(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The plain text form of a value. Arrays are comma-joined with null and undefined elements left
/// empty, and containers use their canonical bracketed rendering.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => f.write_str(s),
            Value::Date(date) => f.write_str(&iso_string(date)),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !(item.is_undefined() || item.is_null()) {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            },
            #[cfg(feature = "list")]
            Value::List(list) => Display::fmt(list, f),
            #[cfg(feature = "queue")]
            Value::Queue(queue) => Display::fmt(queue, f),
            #[cfg(feature = "stack")]
            Value::Stack(stack) => Display::fmt(stack, f),
            #[cfg(feature = "deque")]
            Value::Deque(deque) => Display::fmt(deque, f),
        }
    }
}

/// The canonical JSON form of a value, as used by container stringification. Undefined and
/// non-finite numbers become `null` and dates become ISO-8601 strings.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if !n.is_finite() => serializer.serialize_unit(),
            // Integral values are written in full, without a fractional part.
            Value::Number(n) if n.fract() == 0.0 && n.abs() < MAX_PLAIN_INTEGER => {
                serializer.serialize_i128(*n as i128)
            },
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Date(date) => serializer.serialize_str(&iso_string(date)),
            Value::Array(items) => serializer.collect_seq(items),
            #[cfg(feature = "list")]
            Value::List(list) => list.serialize(serializer),
            #[cfg(feature = "queue")]
            Value::Queue(queue) => queue.serialize(serializer),
            #[cfg(feature = "stack")]
            Value::Stack(stack) => stack.serialize(serializer),
            #[cfg(feature = "deque")]
            Value::Deque(deque) => deque.serialize(serializer),
        }
    }
}

/// Compact JSON, except that floating point numbers are written the same way as [`Value`]'s
/// [`Display`] writes them.
struct CanonicalFormatter;

impl JsonFormatter for CanonicalFormatter {
    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        if value.is_finite() {
            writer.write_all(format_number(value).as_bytes())
        } else {
            CompactFormatter.write_null(writer)
        }
    }
}

/// Writes `value` as canonical JSON, the form used to stringify containers.
pub(crate) fn write_canonical_json<T>(f: &mut Formatter<'_>, value: &T) -> fmt::Result
where
    T: Serialize + ?Sized,
{
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, CanonicalFormatter);
    value.serialize(&mut serializer).map_err(|_| fmt::Error)?;
    f.write_str(std::str::from_utf8(&buffer).map_err(|_| fmt::Error)?)
}
