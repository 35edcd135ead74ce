//! Unit tests for the sequence analysis functions

use core_types::Value;
use type_inspect::{
    all_same_type, all_unique_type, count_by_type, map_basic_types, map_real_types,
    FrequencyEntry, RealTypeTag, TypeTag,
};

fn boolean(count: usize) -> FrequencyEntry {
    FrequencyEntry::new(RealTypeTag::Basic(TypeTag::Boolean), count)
}

#[test]
fn map_basic_types_preserves_order() {
    let values = [Value::Smi(1), Value::string("a"), Value::Null];
    assert_eq!(
        map_basic_types(&values),
        vec![TypeTag::Number, TypeTag::String, TypeTag::Object]
    );
}

#[test]
fn map_real_types_preserves_order() {
    let values = [Value::Null, Value::array(vec![]), Value::Double(f64::NAN)];
    assert_eq!(
        map_real_types(&values),
        vec![RealTypeTag::Null, RealTypeTag::Array, RealTypeTag::NaN]
    );
}

#[test]
fn all_same_type_numbers() {
    assert!(all_same_type(&[Value::Smi(11), Value::Smi(12), Value::Smi(13)]));
}

#[test]
fn all_same_type_strings() {
    let values = [Value::string("11"), Value::string("12"), Value::string("13")];
    assert!(all_same_type(&values));
}

#[test]
fn all_same_type_rejects_wrapped_string() {
    let values = [Value::string("11"), Value::string_object("12"), Value::string("13")];
    assert!(!all_same_type(&values));
}

#[test]
fn all_same_type_rejects_number_like_values() {
    // [123, 123 / 'a', 1 / 0]
    let values = [Value::Smi(123), Value::Double(f64::NAN), Value::Double(f64::INFINITY)];
    assert!(!all_same_type(&values));
}

#[test]
fn all_same_type_single_element() {
    assert!(all_same_type(&[Value::plain_object(vec![])]));
    assert!(all_same_type(&[Value::Undefined]));
}

#[test]
fn all_same_type_empty_is_false() {
    assert!(!all_same_type(&[]));
}

#[test]
fn all_unique_type_distinct() {
    let values = [Value::Boolean(true), Value::Smi(123), Value::string("123")];
    assert!(all_unique_type(&values));
}

#[test]
fn all_unique_type_two_booleans() {
    // [true, 123, '123' === 123]
    let values = [Value::Boolean(true), Value::Smi(123), Value::Boolean(false)];
    assert!(!all_unique_type(&values));
}

#[test]
fn all_unique_type_empty_is_true() {
    assert!(all_unique_type(&[]));
}

#[test]
fn count_by_type_merges_and_sorts() {
    // [true, null, !null, !!null, {}]
    let values = [
        Value::Boolean(true),
        Value::Null,
        Value::Null.logical_not(),
        Value::Null.logical_not().logical_not(),
        Value::plain_object(vec![]),
    ];
    assert_eq!(
        count_by_type(&values),
        vec![
            boolean(3),
            FrequencyEntry::new(RealTypeTag::Null, 1),
            FrequencyEntry::new(RealTypeTag::Basic(TypeTag::Object), 1),
        ]
    );
}

#[test]
fn count_by_type_independent_of_input_order() {
    let values = [
        Value::plain_object(vec![]),
        Value::Null,
        Value::Boolean(true),
        Value::Boolean(true),
        Value::Boolean(false),
    ];
    assert_eq!(count_by_type(&values)[0], boolean(3));
    assert_eq!(count_by_type(&values).len(), 3);
}

#[test]
fn count_by_type_uppercase_tags_first() {
    let values = [Value::string("s"), Value::array(vec![]), Value::date(0.0)];
    let tags: Vec<&str> = count_by_type(&values).iter().map(|e| e.tag.as_str()).collect();
    assert_eq!(tags, vec!["Array", "Date", "string"]);
}

#[test]
fn count_by_type_empty() {
    assert_eq!(count_by_type(&[]), Vec::<FrequencyEntry>::new());
}

#[test]
fn frequency_entry_serializes_tag_as_string() {
    let json = serde_json::to_string(&boolean(3)).unwrap();
    assert_eq!(json, r#"{"tag":"boolean","count":3}"#);
}
