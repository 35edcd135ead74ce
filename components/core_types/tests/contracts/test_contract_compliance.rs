//! Contract compliance tests for core_types
//!
//! The type classifiers rely on these probes answering exactly like the
//! JavaScript checks they stand for.

use core_types::{JsObject, Value};

fn every_kind() -> Vec<Value> {
    vec![
        Value::Undefined,
        Value::Null,
        Value::Boolean(false),
        Value::Smi(1),
        Value::Double(f64::NAN),
        Value::Double(f64::INFINITY),
        Value::string("s"),
        Value::symbol(None),
        Value::bigint(1),
        Value::function("f"),
        Value::plain_object(vec![]),
        Value::array(vec![]),
        Value::date(0.0),
        Value::regexp("", "").unwrap(),
        Value::set(vec![]),
        Value::map(vec![]),
        Value::error(""),
        Value::string_object(""),
        Value::boolean_object(&Value::Boolean(true)),
        Value::number_object(1.0),
    ]
}

#[cfg(test)]
mod probe_contract_tests {
    use super::*;

    /// Contract: object probes only answer true for objects (and null for is_null)
    #[test]
    fn test_object_probes_require_object() {
        for value in every_kind() {
            let probes = [
                value.is_string_wrapper(),
                value.is_date(),
                value.is_set(),
                value.is_array(),
                value.is_boolean_wrapper(),
                value.is_regexp(),
            ];
            if probes.iter().any(|p| *p) {
                assert!(matches!(value, Value::Object(_)), "{:?}", value);
            }
        }
    }

    /// Contract: at most one object probe matches a value
    #[test]
    fn test_object_probes_are_exclusive() {
        for value in every_kind() {
            let hits = [
                value.is_string_wrapper(),
                value.is_date(),
                value.is_set(),
                value.is_array(),
                value.is_boolean_wrapper(),
                value.is_null(),
                value.is_regexp(),
            ]
            .iter()
            .filter(|p| **p)
            .count();
            assert!(hits <= 1, "{:?} matched {} probes", value, hits);
        }
    }

    /// Contract: numeric probes only answer true for numbers
    #[test]
    fn test_numeric_probes_require_number() {
        for value in every_kind() {
            if value.is_nan() || value.is_infinite() {
                assert_eq!(value.type_of(), "number");
            }
        }
        assert!(!Value::number_object(f64::NAN).is_nan());
    }

    /// Contract: type_of is one of the eight typeof results
    #[test]
    fn test_type_of_closed_set() {
        let allowed = [
            "boolean", "string", "object", "function", "undefined", "number", "symbol", "bigint",
        ];
        for value in every_kind() {
            assert!(allowed.contains(&value.type_of()));
        }
    }

    /// Contract: class_name reflects the constructor
    #[test]
    fn test_class_names() {
        let names: Vec<&str> = every_kind()
            .iter()
            .filter_map(|v| v.as_object().map(JsObject::class_name))
            .collect();
        assert_eq!(
            names,
            vec![
                "Object", "Array", "Date", "RegExp", "Set", "Map", "Error", "String", "Boolean",
                "Number"
            ]
        );
    }
}
