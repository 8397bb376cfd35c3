use chrono::{TimeZone, Utc};
use indexmap::IndexMap;
use regex::Regex;
use sdk_util::{
    check_object_has_keys, check_object_has_no_additional_keys, deep_compare, encode_params,
    encode_uri, find_element, for_each, is_array, is_function, remove_element, Callable, Error,
    Value,
};
use serde_json::json;

#[test]
fn test_encode_params() {
    let mut params = IndexMap::new();
    params.insert("foo", "bar");
    params.insert("baz", "beer@");
    assert_eq!(encode_params(&params), "foo=bar&baz=beer%40");
}

#[test]
fn test_encode_params_from_json_object() {
    let params = Value::from(json!({"foo": "bar", "baz": "beer@"}));
    assert_eq!(
        encode_params(params.as_object().unwrap()),
        "foo=bar&baz=beer%40"
    );
}

#[test]
fn test_encode_uri() {
    let mut vals = IndexMap::new();
    vals.insert("%something", "baz");
    vals.insert("%here", "beer@");
    assert_eq!(
        encode_uri("foo/bar/%something/%here", &vals),
        "foo/bar/baz/beer%40"
    );
}

#[test]
fn test_for_each() {
    let mut arr = Vec::new();
    for_each(&[55, 66, 77], |element| arr.push(*element));
    assert_eq!(arr, vec![55, 66, 77]);
}

#[test]
fn test_find_element() {
    let arr = [55, 66, 77];
    assert_eq!(find_element(&arr, |_| true, false), Some(&55));
    assert_eq!(find_element(&arr, |_| true, true), Some(&77));
    assert!(find_element(&arr, |_| false, false).is_none());
}

#[test]
fn test_remove_element() {
    let mut arr = vec![55, 66, 77];
    assert!(remove_element(&mut arr, |_| true, false));
    assert_eq!(arr, vec![66, 77]);

    let mut arr = vec![55, 66, 77];
    assert!(remove_element(&mut arr, |_| true, true));
    assert_eq!(arr, vec![55, 66]);

    let mut arr = vec![55, 66, 77];
    assert!(!remove_element(&mut arr, |_| false, false));
    assert_eq!(arr, vec![55, 66, 77]);
}

#[test]
fn test_remove_element_on_values() {
    let mut events = vec![
        Value::from(json!({"id": 1})),
        Value::from(json!({"id": 2})),
        Value::from(json!({"id": 3})),
    ];
    let target = Value::from(json!({"id": 2}));
    assert!(remove_element(&mut events, |e| deep_compare(e, &target), false));
    assert_eq!(events.len(), 2);
    assert!(!events.iter().any(|e| deep_compare(e, &target)));
}

#[test]
fn test_type_predicates() {
    let func = Value::from(Callable::new(|_| Value::Undefined));
    let arr = Value::from(json!([5, 3, 7]));
    let obj = Value::from(json!({}));

    assert!(is_function(Some(&func)));
    assert!(!is_function(Some(&arr)));
    assert!(!is_function(Some(&obj)));
    assert!(!is_function(None));

    assert!(is_array(Some(&arr)));
    assert!(!is_array(Some(&func)));
    assert!(!is_array(Some(&obj)));
    assert!(!is_array(Some(&Value::Null)));
    assert!(!is_array(None));
}

#[test]
fn test_check_object_has_keys() {
    let empty = Value::from(json!({}));
    assert!(matches!(
        check_object_has_keys(&empty, &["foo"]),
        Err(Error::MissingKey(key)) if key == "foo"
    ));
    let obj = Value::from(json!({"foo": "bar"}));
    assert!(check_object_has_keys(&obj, &["foo"]).is_ok());
}

#[test]
fn test_check_object_has_no_additional_keys() {
    let obj = Value::from(json!({"foo": "bar", "baz": 4}));
    assert!(matches!(
        check_object_has_no_additional_keys(&obj, &["foo"]),
        Err(Error::UnexpectedKey(key)) if key == "baz"
    ));
    let obj = Value::from(json!({"foo": "bar"}));
    assert!(check_object_has_no_additional_keys(&obj, &["foo"]).is_ok());
}

#[test]
fn test_deep_compare_mixed_document() {
    let func = Callable::new(|_| Value::Bool(true));
    let build = |day: u32| -> Value {
        [
            ("pattern", Value::from(Regex::new("^@[a-z]+:example\\.org$").unwrap())),
            (
                "ts",
                Value::from(Utc.with_ymd_and_hms(2011, 3, day, 0, 0, 0).unwrap()),
            ),
            ("cb", Value::from(func.clone())),
            ("tags", Value::from(json!(["a", "b"]))),
        ]
        .into_iter()
        .collect()
    };

    assert!(deep_compare(&build(31), &build(31)));
    assert!(!deep_compare(&build(31), &build(30)));
    assert_eq!(build(31), build(31));
}
