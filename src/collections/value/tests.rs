#![cfg(test)]

use chrono::{TimeZone, Utc};
use rstest::rstest;

use super::*;
use crate::array;

#[test]
fn test_type_of() {
    assert_eq!(Value::Undefined.type_of(), "undefined");
    assert_eq!(Value::Null.type_of(), "object", "Null should be categorized as an object.");
    assert_eq!(Value::from(true).type_of(), "boolean");
    assert_eq!(Value::from(1).type_of(), "number");
    assert_eq!(Value::from("a").type_of(), "string");
    assert_eq!(Value::from(Utc::now()).type_of(), "object");
    assert_eq!(array![1].type_of(), "object");

    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(array![].type_name(), "Array");
}

#[rstest]
#[case(Value::Null, 0.0)]
#[case(Value::from(true), 1.0)]
#[case(Value::from(false), 0.0)]
#[case(Value::from("  42 "), 42.0)]
#[case(Value::from(""), 0.0)]
#[case(Value::from("0x1F"), 31.0)]
#[case(Value::from("1e3"), 1000.0)]
#[case(Value::from("-Infinity"), f64::NEG_INFINITY)]
#[case(array![5], 5.0)]
#[case(array![], 0.0)]
fn test_to_number(#[case] value: Value, #[case] expected: f64) {
    assert_eq!(value.to_number(), expected, "{value:?} should coerce to {expected}.");
}

#[rstest]
#[case(Value::Undefined)]
#[case(Value::from("abc"))]
#[case(Value::from("inf"))]
#[case(Value::from("NaN"))]
#[case(array![1, 2])]
fn test_to_number_nan(#[case] value: Value) {
    assert!(value.to_number().is_nan(), "{value:?} should coerce to NaN.");
}

#[test]
fn test_date_to_number() {
    let date = Utc.timestamp_millis_opt(1_000).unwrap();
    assert_eq!(Value::from(date).to_number(), 1_000.0);
}

#[test]
fn test_display() {
    assert_eq!(Value::from(1.0).to_string(), "1", "Integral numbers shouldn't print a fraction.");
    assert_eq!(Value::from(1.5).to_string(), "1.5");
    assert_eq!(Value::from(-0.0).to_string(), "0");
    assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
    assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(Value::Undefined.to_string(), "undefined");
    assert_eq!(Value::from("text").to_string(), "text");
    assert_eq!(
        array![1, Value::Null, array![2, 3], ()].to_string(),
        "1,,2,3,",
        "Arrays should be comma-joined, with null and undefined left empty."
    );

    let date = Utc.with_ymd_and_hms(2021, 1, 24, 0, 0, 0).unwrap();
    assert_eq!(Value::from(date).to_string(), "2021-01-24T00:00:00.000Z");
}

#[rstest]
#[case(1e21, "1e+21")]
#[case(-1e21, "-1e+21")]
#[case(1.23e22, "1.23e+22")]
#[case(1e16, "10000000000000000")]
#[case(123456789012345680000.0, "123456789012345680000")]
#[case(1e-7, "1e-7")]
#[case(-1.5e-7, "-1.5e-7")]
#[case(1e-6, "0.000001")]
#[case(0.5, "0.5")]
#[case(123.456, "123.456")]
#[case(71.0, "71")]
fn test_number_text(#[case] n: f64, #[case] expected: &str) {
    assert_eq!(Value::from(n).to_string(), expected);
}

#[test]
fn test_exponent_to_number() {
    assert_eq!(array![1e21].to_number(), 1e21, "Exponent text should parse back.");
    assert_eq!(Value::from("1e+21").to_number(), 1e21);
}

#[test]
fn test_serialize() {
    let value = array![1, 1.5, "a", Value::Null, (), f64::NAN, true, array![2]];
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#"[1,1.5,"a",null,null,null,true,[2]]"#,
        "Undefined and non-finite numbers should serialize as null."
    );

    assert_eq!(serde_json::to_string(&Value::from("a\"b")).unwrap(), r#""a\"b""#);
    assert_eq!(
        serde_json::to_string(&Value::from(1e16)).unwrap(),
        "10000000000000000",
        "Integral numbers below 1e21 should be written in full."
    );
    assert_eq!(serde_json::to_string(&Value::from(-1e20)).unwrap(), "-100000000000000000000");

    let date = Utc.with_ymd_and_hms(2021, 1, 24, 12, 30, 0).unwrap();
    assert_eq!(serde_json::to_string(&Value::from(date)).unwrap(), r#""2021-01-24T12:30:00.000Z""#);
}

#[test]
fn test_equality() {
    assert_eq!(Value::from(1), Value::from(1.0));
    assert_ne!(Value::from(1), Value::from("1"), "Values shouldn't be coerced when compared.");
    assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
    assert!(Value::from(f64::NAN).same_value_zero(&Value::from(f64::NAN)));
    assert_eq!(array![1, array![2]], array![1, array![2]]);
    assert_ne!(array![1, array![2]], array![1, 2]);
}

#[test]
fn test_conversions() {
    assert!(Value::from(()).is_undefined());
    assert!(Value::from(None::<i32>).is_null());
    assert_eq!(Value::from(Some("a")), Value::from("a"));
    assert_eq!(Value::from('c').as_str(), Some("c"));
    assert_eq!(Value::from(7_usize).as_number(), Some(7.0));
    assert_eq!((1..=3).collect::<Value>(), array![1, 2, 3]);
}

#[cfg(feature = "collections-all")]
#[test]
fn test_nested_containers() {
    use crate::collections::{List, Queue};
    use crate::collections::traits::SequenceKind;

    let value = Value::from(List::of([1, 2]));
    assert!(value.is_list());
    assert_eq!(value.sequence_kind(), Some(SequenceKind::List));
    assert_eq!(value.to_string(), "[1,2]", "Containers should display as their JSON form.");
    assert!(value.to_number().is_nan());

    assert_ne!(
        value,
        Value::from(Queue::of([1, 2])),
        "Containers of different variants are never equal."
    );
    assert_eq!(value, Value::from(List::of([1, 2])));
    assert_eq!(Value::from(1).sequence_kind(), None);
}
