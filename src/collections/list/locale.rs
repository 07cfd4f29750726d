//! Locale-aware rendering of List contents.
//!
//! Only a small set of conventions is known: the language subtag of the locale (`en`, `de`, `ja`,
//! ...) selects grouping and decimal separators, currency placement and the date layout. Unknown
//! languages fall back to English conventions.

use serde_json::Value as Json;

use super::List;
use crate::collections::Value;
use crate::util::error::{ContainerError, TypeMismatch};

/// Fraction digits are capped at the largest precision worth printing for a double.
const MAX_FRACTION_DIGITS: usize = 20;

/// How numbers are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberStyle {
    #[default]
    Decimal,
    /// Requires [`LocaleOptions::currency`] to be set.
    Currency,
    /// Multiplies by 100 and appends a percent sign.
    Percent,
}

/// Options for [`List::to_locale_string`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleOptions {
    pub style: NumberStyle,
    /// An ISO 4217 currency code such as `"USD"` or `"JPY"`.
    pub currency: Option<String>,
    pub minimum_fraction_digits: Option<usize>,
    pub maximum_fraction_digits: Option<usize>,
    pub use_grouping: bool,
}

impl LocaleOptions {
    /// Options for formatting numbers as amounts of the provided currency.
    pub fn currency(code: &str) -> LocaleOptions {
        LocaleOptions {
            style: NumberStyle::Currency,
            currency: Some(code.to_ascii_uppercase()),
            ..LocaleOptions::default()
        }
    }

    /// Options for formatting numbers as percentages.
    pub fn percent() -> LocaleOptions {
        LocaleOptions {
            style: NumberStyle::Percent,
            ..LocaleOptions::default()
        }
    }

    /// Returns the fraction digit range for the style, after applying any overrides.
    fn fraction_digits(&self, currency: Option<&str>) -> (usize, usize) {
        let (min, max) = match self.style {
            NumberStyle::Decimal => (0, 3),
            NumberStyle::Currency => {
                let digits = currency.map_or(2, currency_digits);
                (digits, digits)
            },
            NumberStyle::Percent => (0, 0),
        };

        let min = self.minimum_fraction_digits.unwrap_or(min).min(MAX_FRACTION_DIGITS);
        let max = self.maximum_fraction_digits.unwrap_or(max).min(MAX_FRACTION_DIGITS);
        (min, max.max(min))
    }
}

impl Default for LocaleOptions {
    fn default() -> Self {
        LocaleOptions {
            style: NumberStyle::Decimal,
            currency: None,
            minimum_fraction_digits: None,
            maximum_fraction_digits: None,
            use_grouping: true,
        }
    }
}

struct Conventions {
    language: String,
    group: &'static str,
    decimal: &'static str,
    /// Whether currency symbols (and percent signs) follow the number, separated by a space.
    suffixed: bool,
    date_format: &'static str,
}

impl Conventions {
    fn for_locale(locale: &str) -> Conventions {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        let (group, decimal, suffixed, date_format) = match language.as_str() {
            "ja" | "zh" | "ko" => (",", ".", false, "%Y/%-m/%-d %-H:%M:%S"),
            "de" => (".", ",", true, "%-d.%-m.%Y, %H:%M:%S"),
            "es" | "it" | "nl" | "pt" => (".", ",", true, "%-d/%-m/%Y, %H:%M:%S"),
            "fr" => ("\u{202f}", ",", true, "%d/%m/%Y %H:%M:%S"),
            "ru" | "pl" | "sv" | "cs" => ("\u{a0}", ",", true, "%d.%m.%Y, %H:%M:%S"),
            _ => (",", ".", false, "%-m/%-d/%Y, %-I:%M:%S %p"),
        };

        Conventions {
            language,
            group,
            decimal,
            suffixed,
            date_format,
        }
    }

    fn format_number(&self, n: f64, options: &LocaleOptions) -> Result<String, ContainerError> {
        let currency = match (options.style, options.currency.as_deref()) {
            (NumberStyle::Currency, None) => {
                return Err(TypeMismatch {
                    operation: "to_locale_string",
                    expected: "a currency code with the currency style",
                    found: "undefined",
                }
                .into());
            },
            (NumberStyle::Currency, Some(code)) => Some(code),
            _ => None,
        };

        let value = match options.style {
            NumberStyle::Percent => n * 100.0,
            _ => n,
        };
        let (min, max) = options.fraction_digits(currency);
        let digits = self.format_digits(value.abs(), min, max, options.use_grouping);
        let sign = if value < 0.0 { "-" } else { "" };

        Ok(match (options.style, currency) {
            (NumberStyle::Currency, Some(code)) => {
                let symbol = currency_symbol(code, &self.language);
                if self.suffixed {
                    format!("{sign}{digits}\u{a0}{symbol}")
                } else if symbol.chars().all(|c| c.is_ascii_alphabetic()) {
                    format!("{sign}{symbol}\u{a0}{digits}")
                } else {
                    format!("{sign}{symbol}{digits}")
                }
            },
            (NumberStyle::Percent, _) if self.suffixed => format!("{sign}{digits}\u{a0}%"),
            (NumberStyle::Percent, _) => format!("{sign}{digits}%"),
            _ => format!("{sign}{digits}"),
        })
    }

    fn format_digits(&self, magnitude: f64, min: usize, max: usize, grouping: bool) -> String {
        if magnitude.is_nan() {
            return "NaN".to_owned();
        }
        if magnitude.is_infinite() {
            return "∞".to_owned();
        }

        // Ties round away from zero, which fixed precision formatting alone doesn't do.
        let scale = 10f64.powi(max as i32);
        let scaled = (magnitude * scale).round() / scale;
        let rounded = if scaled.is_finite() { scaled } else { magnitude };

        let fixed = format!("{rounded:.max$}");
        let (integer, fraction) = fixed.split_once('.').unwrap_or((&fixed, ""));
        let kept = fraction.trim_end_matches('0').len().max(min).min(fraction.len());
        let fraction = &fraction[..kept];

        let mut out = String::with_capacity(fixed.len() + integer.len() / 3);
        for (i, digit) in integer.chars().enumerate() {
            if grouping && i > 0 && (integer.len() - i) % 3 == 0 {
                out.push_str(self.group);
            }
            out.push(digit);
        }
        if !fraction.is_empty() {
            out.push_str(self.decimal);
            out.push_str(fraction);
        }
        out
    }

    fn render(&self, value: &Value, options: &LocaleOptions) -> Result<Json, ContainerError> {
        if let Some(sequence) = value.as_sequence() {
            return sequence
                .as_slice()
                .iter()
                .map(|item| self.render(item, options))
                .collect::<Result<Vec<_>, _>>()
                .map(Json::Array);
        }

        let text = match value {
            Value::Number(n) => self.format_number(*n, options)?,
            Value::Bool(b) => b.to_string(),
            Value::String(s) => s.clone(),
            Value::Date(date) => date.format(self.date_format).to_string(),
            other => {
                return Err(TypeMismatch {
                    operation: "to_locale_string",
                    expected: "a value with a locale representation",
                    found: other.type_name(),
                }
                .into());
            },
        };
        Ok(Json::String(text))
    }
}

fn currency_digits(code: &str) -> usize {
    match code {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" => 0,
        _ => 2,
    }
}

fn currency_symbol(code: &str, language: &str) -> String {
    let symbol = match (code, language) {
        ("JPY", "ja") => "￥",
        ("JPY", _) => "¥",
        ("CNY", "zh") => "¥",
        ("CNY", _) => "CN¥",
        ("USD", _) => "$",
        ("EUR", _) => "€",
        ("GBP", _) => "£",
        ("KRW", _) => "₩",
        ("INR", _) => "₹",
        (other, _) => other,
    };
    symbol.to_owned()
}

impl Value {
    /// Renders the value with the conventions of `locale`. Sequences render as nested JSON
    /// arrays of rendered elements.
    ///
    /// # Errors
    /// Returns [`ContainerError::TypeMismatch`] for null or undefined values, which have no
    /// locale representation, and for the currency style without a currency code.
    pub fn to_locale_json(
        &self,
        locale: &str,
        options: &LocaleOptions,
    ) -> Result<serde_json::Value, ContainerError> {
        Conventions::for_locale(locale).render(self, options)
    }
}

impl List {
    /// Renders every element with the conventions of `locale`, recursing into nested sequences.
    /// The result is bracketed like [`to_string`](ToString::to_string), but with every quote
    /// character removed.
    ///
    /// # Errors
    /// Returns [`ContainerError::TypeMismatch`] if any element, at any depth, is null or
    /// undefined, or if the currency style is used without a currency code.
    ///
    /// # Examples
    /// ```
    /// # use collection_adapters::{array, list};
    /// # use collection_adapters::collections::LocaleOptions;
    /// let list = list![1, 2, array![3, array![4, 5]]];
    /// let yen = LocaleOptions::currency("JPY");
    /// assert_eq!(list.to_locale_string("ja-JP", &yen).unwrap(), "[￥1,￥2,[￥3,[￥4,￥5]]]");
    /// assert_eq!(list![1234.5].to_locale_string("de-DE", &Default::default()).unwrap(), "[1.234,5]");
    /// ```
    pub fn to_locale_string(
        &self,
        locale: &str,
        options: &LocaleOptions,
    ) -> Result<String, ContainerError> {
        let conventions = Conventions::for_locale(locale);
        let rendered = self
            .items
            .iter()
            .map(|item| conventions.render(item, options))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Json::Array(rendered).to_string().replace('"', ""))
    }
}
