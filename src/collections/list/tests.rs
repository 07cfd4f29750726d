#![cfg(test)]

use chrono::{TimeZone, Utc};
use rstest::rstest;

use super::*;
use crate::collections::{ContainerError, IllegalArgument, Value};
use crate::util::panic::assert_panics;
use crate::{array, list};

#[test]
fn test_access() {
    let mut list = list![1, 2, 3];
    assert_eq!(list.get(1), Some(&Value::from(2)));
    assert_eq!(list.get(3), None);
    assert_eq!(list[2], Value::from(3));

    list[0] = Value::from("a");
    list.set(4, true);
    assert_eq!(list.to_string(), r#"["a",2,3,null,true]"#, "set should pad with undefined.");
    assert_eq!(list[3], Value::Undefined);

    list.add([5, 6]);
    assert_eq!(list.len(), 7);
    assert!(List::is_list(&Value::from(list)));
}

#[test]
fn test_index_out_of_bounds() {
    let list = list![1, 2, 3];
    assert_panics!(
        {
            let _ = &list[3];
        },
        "Index 3 out of bounds for collection with 3 elements!"
    );
}

#[test]
fn test_set_out_of_bounds() {
    let mut list = list![1];
    assert_panics!(
        {
            list.set(usize::MAX, 1);
        },
        "out of bounds"
    );
    assert_panics!(
        {
            list.set(usize::MAX / 2, 1);
        },
        "out of bounds"
    );
    assert_eq!(list.to_string(), "[1]", "A failed set shouldn't change the List.");
}

#[test]
fn test_slice() {
    let list = list![1, 2, 3];
    assert_eq!(list.slice(1, None).to_string(), "[2,3]");
    assert_eq!(list.slice(-2, Some(-1)).to_string(), "[2]");
    assert_eq!(list.slice(2, Some(1)).to_string(), "[]", "Inverted ranges should be empty.");
    assert_eq!(list.slice(-10, Some(10)), list, "Out of range offsets should clamp.");
}

#[test]
fn test_sort() {
    let mut list = list![71, 8, 9];
    assert_eq!(list.sort().to_array(), [Value::from(8), Value::from(9), Value::from(71)]);

    let mut list = list![3, 1, 2];
    list.sort_by(|a, b| b.to_number().total_cmp(&a.to_number()));
    assert_eq!(list.to_string(), "[3,2,1]", "A comparator should be used for uniform Lists.");

    let mut list = list![10, "9", 1];
    list.sort_by(|a, b| b.to_number().total_cmp(&a.to_number()));
    assert_eq!(list.to_string(), r#"[1,10,"9"]"#, "Mixed Lists should sort as text.");

    let mut list = list![(), "b", 1];
    assert_eq!(list.sort().to_string(), r#"[1,"b",null]"#, "Undefined should sort last.");

    let mut list = list![3, f64::NAN, -1];
    assert_eq!(list.sort().to_string(), "[-1,3,null]", "NaN should sort after every number.");

    let mut empty = List::new();
    assert!(empty.sort().is_empty());
}

#[test]
fn test_sort_dates() {
    let late = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    let early = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();
    let middle = Utc.with_ymd_and_hms(2010, 1, 1, 12, 0, 0).unwrap();

    let mut list = list![late, early, middle];
    list.sort();
    assert_eq!(list, vec![Value::from(early), Value::from(middle), Value::from(late)]);
}

#[test]
fn test_last_index_of() {
    let list = list![1, 2, 3, 1];
    let one = Value::from(1);
    assert_eq!(list.last_index_of(&one, Some(-2)), Some(0));
    assert_eq!(list.last_index_of(&one, None), Some(3));
    assert_eq!(list.last_index_of(&one, Some(0)), Some(0), "Zero should only search index 0.");
    assert_eq!(list.last_index_of(&Value::from(2), Some(0)), None);
    assert_eq!(list.last_index_of(&one, Some(10)), Some(3));
    assert_eq!(list.last_index_of(&one, Some(-10)), None);
    assert_eq!(List::new().last_index_of(&one, None), None);
}

#[test]
fn test_insert() {
    let mut list = list![1, 2, 3];
    list.insert(1, ["a", "b"]).unwrap();
    assert_eq!(list.to_string(), r#"[1,"a","b",2,3]"#);

    list.insert(10, [4]).unwrap();
    assert_eq!(list.get(5), Some(&Value::from(4)), "Indices past the end should append.");

    list.insert(-6, [0]).unwrap();
    assert_eq!(list.get(0), Some(&Value::from(0)));
}

#[rstest]
#[case(Value::from("1"))]
#[case(Value::Undefined)]
#[case(Value::Null)]
#[case(Value::from(f64::NAN))]
#[case(Value::from(f64::INFINITY))]
#[case(array![1])]
fn test_insert_type_mismatch(#[case] index: Value) {
    let mut list = list![1, 2, 3];
    let error = list.insert(index.clone(), [0]).unwrap_err();
    assert!(error.is_type_mismatch(), "{index:?} shouldn't be accepted as an index.");
    assert_eq!(list.len(), 3, "A rejected insert shouldn't change the List.");
}

#[test]
fn test_insert_illegal_argument() {
    let mut list = list![1, 2, 3];
    assert_eq!(
        list.insert(-4, [0]),
        Err(ContainerError::IllegalArgument(IllegalArgument {
            operation: "insert",
            parameter: "index",
            value: -4.0,
            min: -3.0,
        }))
    );
    assert_eq!(list.to_string(), "[1,2,3]");
    assert!(list.insert(-3, [0]).is_ok(), "-len should still be accepted.");
}

#[test]
fn test_remove() {
    let mut list = list![1, 2, 3, 4, 5];
    assert_eq!(list.remove(0, ()).unwrap(), vec![Value::from(1)], "count should default to 1.");
    assert_eq!(list.remove(-1, 1).unwrap(), vec![Value::from(5)]);
    assert_eq!(list.remove(1, 0).unwrap(), Vec::<Value>::new());
    assert_eq!(list.remove(1, -3).unwrap(), Vec::<Value>::new());
    assert_eq!(list.remove(10, 1).unwrap(), Vec::<Value>::new());
    assert_eq!(list.to_string(), "[2,3,4]");

    assert!(list.remove("0", 1).unwrap_err().is_type_mismatch());
    assert!(list.remove(0, "1").unwrap_err().is_type_mismatch());
    assert!(list.remove(0, f64::NAN).unwrap_err().is_type_mismatch());
    assert!(list.remove(-4, 1).unwrap_err().is_illegal_argument());
    assert_eq!(list.len(), 3, "Rejected removals shouldn't change the List.");
}

#[test]
fn test_insert_then_remove() {
    let original = list![1, array![2], "three", 4];
    for index in 0..original.len() {
        let mut list = original.clone();
        list.insert(index, [Value::Null]).unwrap();
        list.remove(index, 1).unwrap();
        assert_eq!(list, original, "insert then remove at {index} should be an identity.");
    }
}

#[test]
fn test_flat() {
    let list = list![1, array![2, array![3, array![4]]], "x"];

    let copy = list.flat(0).unwrap();
    assert_eq!(copy, list, "A depth of 0 should copy the List.");
    assert_eq!(list.flat(()).unwrap().to_string(), r#"[1,2,[3,[4]],"x"]"#);
    assert_eq!(list.flat(1.9).unwrap().to_string(), r#"[1,2,[3,[4]],"x"]"#);
    assert_eq!(list.flat(2).unwrap().to_string(), r#"[1,2,3,[4],"x"]"#);
    assert_eq!(list.flat(100).unwrap().to_string(), r#"[1,2,3,4,"x"]"#);

    assert!(list.flat(-1).unwrap_err().is_illegal_argument());
    assert!(list.flat("x").unwrap_err().is_type_mismatch());
    assert!(list.flat(Value::Null).unwrap_err().is_type_mismatch());
}

#[test]
fn test_flat_keeps_containers() {
    let list = list![list![1, 2], array![3]];
    assert_eq!(list.flat(1).unwrap().to_string(), "[[1,2],3]");
}

#[test]
fn test_flat_map() {
    let list = list!["a b", "c"];
    let words = list.flat_map(|value, _| {
        value.as_str().unwrap_or_default().split(' ').collect::<Value>()
    });
    assert_eq!(words.to_string(), r#"["a","b","c"]"#);
}

#[test]
fn test_concate() {
    let mut list = list![4, 5, 6, 1, 2, 3];
    list.try_concate_front(&array![1, 2, array![3, array![4, 5]]]).unwrap();
    assert_eq!(list.to_string(), "[1,2,[3,[4,5]],4,5,6,1,2,3]");

    let error = list.try_concate_front(&Value::from("ab")).unwrap_err();
    assert!(error.is_type_mismatch(), "Strings shouldn't be concatenated.");
    assert_eq!(list.len(), 9);

    let front = list![1, 2];
    let joined = front.concate(&[Value::from(3)]);
    assert_eq!(joined.to_string(), "[1,2,3]");
    assert_eq!(front.len(), 2, "concate shouldn't change the List.");
}

#[cfg(feature = "queue")]
#[test]
fn test_concate_front_container() {
    let mut list = list![3];
    list.concate_front(&crate::queue![1, 2]).concate_front(&list![0]);
    assert_eq!(list.to_string(), "[0,1,2,3]");
}

#[test]
fn test_copy_within_and_fill() {
    let mut list = list![1, 2, 3, 4, 5];
    list.copy_within(-2, 0, None);
    assert_eq!(list.to_string(), "[1,2,3,1,2]", "Copies should stop at the end of the List.");

    list.copy_within(0, 3, Some(10));
    assert_eq!(list.to_string(), "[1,2,3,1,2]");

    list.fill(0, 1, Some(-1));
    assert_eq!(list.to_string(), "[1,0,0,0,2]");
    list.fill("x", -1, None);
    assert_eq!(list.get(4), Some(&Value::from("x")));
}

#[test]
fn test_searching() {
    let list = list![1, 5, 10, f64::NAN, "5"];
    assert_eq!(list.find(|value, _| value.to_number() > 3.0), Some(&Value::from(5)));
    assert_eq!(list.find_index(|value, _| value.is_string()), Some(4));
    assert_eq!(list.find(|_, index| index > 10), None);
    assert!(list.every(|value, _| !value.is_null()));
    assert!(List::new().every(|_, _| false), "Empty Lists should satisfy any predicate.");

    let nan = Value::from(f64::NAN);
    assert!(list.includes(&nan), "includes should find NaN.");
    assert_eq!(list.index_of(&nan), None, "index_of shouldn't find NaN.");
    assert_eq!(list.index_of(&Value::from("5")), Some(4), "index_of shouldn't coerce.");
    assert!(!list.includes_from(&Value::from(1), 1));
    assert!(list.includes_from(&Value::from(1), -5));
}

#[rstest]
#[case(Value::Undefined, Some(0))]
#[case(Value::from(1), Some(2))]
#[case(Value::from(-1), Some(2))]
#[case(Value::from(-3), Some(0))]
#[case(Value::from(3), None)]
fn test_index_of_from(#[case] start: Value, #[case] expected: Option<usize>) {
    let list = list![1, 2, 1];
    assert_eq!(list.index_of_from(&Value::from(1), start), Ok(expected));
}

#[test]
fn test_index_of_from_errors() {
    let list = list![1, 2, 1];
    let one = Value::from(1);
    assert!(list.index_of_from(&one, "a").unwrap_err().is_type_mismatch());
    assert!(list.index_of_from(&one, -4).unwrap_err().is_illegal_argument());
}

#[test]
fn test_transforms() {
    let list = list![1, 4, 9, 1];
    let sum = list.reduce(|acc, value, _| Value::from(acc.to_number() + value.to_number()), None);
    assert_eq!(sum, Value::from(15));

    let letters = list!["a", "b", "c"];
    let reversed = letters.reduce_right(
        |acc, value, _| Value::from(format!("{acc}{value}")),
        Some(Value::from("")),
    );
    assert_eq!(reversed, Value::from("cba"));

    let shifted = list.map(|value, index| Value::from(value.to_number() + index as f64));
    assert_eq!(shifted.to_string(), "[1,5,11,4]");
    assert_eq!(letters.keys().collect::<Vec<_>>(), [0, 1, 2]);

    let mut list = list;
    assert_eq!(list.reverse().to_string(), "[1,9,4,1]");
}

#[test]
fn test_join() {
    let list = list![1, (), "a", Value::Null, array![2, 3]];
    assert_eq!(list.join("-"), "1--a--2,3");
    assert_eq!(List::new().join(","), "");
}

#[test]
fn test_exponent_text() {
    let mut list = list![1e21, "a", 1e-7];
    assert_eq!(list.join(","), "1e+21,a,1e-7", "Extreme numbers should join in exponent form.");
    assert_eq!(
        list.sort().to_string(),
        r#"[1e+21,1e-7,"a"]"#,
        "Mixed Lists should sort by the exponent form of extreme numbers."
    );
}

#[test]
fn test_to_locale_string() {
    let list = list![1, 2, array![3, array![4, 5]]];
    let yen = LocaleOptions::currency("jpy");
    assert_eq!(list.to_locale_string("ja-JP", &yen).unwrap(), "[￥1,￥2,[￥3,[￥4,￥5]]]");

    let defaults = LocaleOptions::default();
    assert_eq!(
        list![1234.5, -1234.567, true, "x"].to_locale_string("en-US", &defaults).unwrap(),
        "[1,234.5,-1,234.567,true,x]"
    );
    assert_eq!(
        list![1234.5].to_locale_string("en-US", &LocaleOptions::currency("USD")).unwrap(),
        "[$1,234.50]"
    );
    assert_eq!(
        list![1234.5].to_locale_string("de-DE", &LocaleOptions::currency("EUR")).unwrap(),
        "[1.234,50\u{a0}€]"
    );
    assert_eq!(list![0.25].to_locale_string("en", &LocaleOptions::percent()).unwrap(), "[25%]");

    let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(list![date].to_locale_string("en-US", &defaults).unwrap(), "[1/2/2024, 3:04:05 AM]");
}

#[test]
fn test_to_locale_string_rounding() {
    let yen = LocaleOptions::currency("JPY");
    assert_eq!(
        list![2.5, 0.5].to_locale_string("ja-JP", &yen).unwrap(),
        "[￥3,￥1]",
        "Ties should round away from zero."
    );

    let one_digit = LocaleOptions {
        maximum_fraction_digits: Some(1),
        ..LocaleOptions::default()
    };
    assert_eq!(list![1.25, -1.25].to_locale_string("en", &one_digit).unwrap(), "[1.3,-1.3]");
    assert_eq!(list![1.24].to_locale_string("en", &one_digit).unwrap(), "[1.2]");
}

#[test]
fn test_to_locale_string_errors() {
    let defaults = LocaleOptions::default();
    let error = list![1, array![Value::Null]].to_locale_string("en", &defaults).unwrap_err();
    assert!(error.is_type_mismatch(), "Nested nulls have no locale representation.");

    let missing_code = LocaleOptions {
        style: NumberStyle::Currency,
        ..LocaleOptions::default()
    };
    assert!(list![1].to_locale_string("en", &missing_code).is_err());
}
