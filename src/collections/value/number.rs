use super::Value;

impl Value {
    /// Coerces the value to a number.
    ///
    /// | Value | Result |
    /// |-|-|
    /// | `Undefined` | `NaN` |
    /// | `Null` | `0` |
    /// | `Bool` | `0` or `1` |
    /// | `String` | The parsed, trimmed string (`0` if empty), otherwise `NaN` |
    /// | `Date` | Milliseconds since the Unix epoch |
    /// | `Array` | The coercion of its comma-joined text |
    /// | Containers | `NaN` |
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::String(s) => parse_number(s),
            Value::Date(date) => date.timestamp_millis() as f64,
            Value::Array(_) => parse_number(&self.to_string()),
            // Containers render as bracketed text, which never parses.
            #[allow(unreachable_patterns)]
            _ => f64::NAN,
        }
    }
}

/// Parses numeric text the way the rest of the crate coerces strings: surrounding whitespace is
/// ignored, empty text is zero, `Infinity` and hex literals are accepted.
pub(crate) fn parse_number(text: &str) -> f64 {
    let text = text.trim();

    match text {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => {
            if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
                return u64::from_str_radix(hex, 16).map_or(f64::NAN, |n| n as f64);
            }
            // Rust's float parser also accepts spellings like "inf" and "nan", which aren't
            // numeric text here.
            if text.bytes().any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E')) {
                return f64::NAN;
            }
            text.parse().unwrap_or(f64::NAN)
        }
    }
}

/// Formats a number as text: the shortest digits that round-trip, written in full when the decimal
/// point falls within 21 digits of them and in exponent form (`1e+21`, `1.5e-7`) otherwise. `-0`
/// prints as `0` and non-finite values print as `NaN`, `Infinity` or `-Infinity`.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    } else if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    } else if n == 0.0 {
        return "0".to_owned();
    }

    // LowerExp writes the shortest round-trip digits, e.g. "1.2345e3".
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let len = digits.len() as i32;
    // The position of the decimal point relative to the first digit.
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if len <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (integer, fraction) = digits.split_at(point as usize);
        format!("{integer}.{fraction}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let exponent = point - 1;
        let sign = if exponent < 0 { '-' } else { '+' };
        match digits.split_at(1) {
            (first, "") => format!("{first}e{sign}{}", exponent.abs()),
            (first, rest) => format!("{first}.{rest}e{sign}{}", exponent.abs()),
        }
    };

    if n < 0.0 { format!("-{body}") } else { body }
}
