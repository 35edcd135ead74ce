//! Invariants of classification and counting

use core_types::Value;
use type_inspect::{
    all_same_type, all_unique_type, basic_type, count_by_type, map_real_types, real_type,
    RealTypeTag, TypeTag,
};

fn mixed_values() -> Vec<Value> {
    vec![
        Value::Boolean(true),
        Value::Smi(324),
        Value::string("Hello"),
        Value::array(vec![]),
        Value::plain_object(vec![]),
        Value::function("v"),
        Value::Undefined,
        Value::Null,
        Value::Double(f64::NAN),
        Value::Double(f64::INFINITY),
        Value::Double(f64::NEG_INFINITY),
        Value::date(0.0),
        Value::regexp("", "").unwrap(),
        Value::set(vec![]),
        Value::boolean_object(&Value::Undefined),
        Value::string_object(""),
        Value::number_object(0.0),
        Value::map(vec![]),
        Value::symbol(Some("Hi")),
        Value::bigint(7),
        Value::Boolean(false),
        Value::string("again"),
    ]
}

#[test]
fn real_type_refines_only_objects_and_numbers() {
    for value in mixed_values() {
        let basic = basic_type(&value);
        let real = real_type(&value);
        match basic {
            TypeTag::Object | TypeTag::Number => {}
            other => assert_eq!(real, RealTypeTag::Basic(other)),
        }
        if let RealTypeTag::Basic(inner) = real {
            assert_eq!(inner, basic);
        }
    }
}

#[test]
fn counts_sum_to_length_for_every_prefix() {
    let values = mixed_values();
    for end in 0..=values.len() {
        let counts = count_by_type(&values[..end]);
        let total: usize = counts.iter().map(|e| e.count).sum();
        assert_eq!(total, end);
        assert!(counts.iter().all(|e| e.count >= 1));
    }
}

#[test]
fn counts_sorted_without_duplicates() {
    let counts = count_by_type(&mixed_values());
    for pair in counts.windows(2) {
        assert!(pair[0].tag.as_str() < pair[1].tag.as_str());
    }
}

#[test]
fn uniqueness_agrees_with_counts() {
    let values = mixed_values();
    for end in 0..=values.len() {
        let slice = &values[..end];
        let counts = count_by_type(slice);
        assert_eq!(all_unique_type(slice), counts.iter().all(|e| e.count == 1));
        assert_eq!(all_same_type(slice), counts.len() == 1);
    }
}

#[test]
fn mapping_keeps_length() {
    let values = mixed_values();
    assert_eq!(map_real_types(&values).len(), values.len());
}
