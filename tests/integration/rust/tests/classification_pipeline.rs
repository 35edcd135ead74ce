//! Values flowing through classification, analysis and comparison

use check_harness::{deep_equal, CaptureWriter, Harness, Outcome};
use core_types::Value;
use type_inspect::{count_by_type, map_basic_types, map_real_types, real_type, RealTypeTag};
use typeof_cli::suite::known_types;

#[test]
fn known_types_cover_every_extended_tag() {
    let tags = map_real_types(&known_types().unwrap());
    for extended in RealTypeTag::EXTENDED {
        assert!(tags.contains(&extended), "missing {}", extended);
    }
}

#[test]
fn basic_and_real_types_agree_outside_objects_and_numbers() {
    let known = known_types().unwrap();
    let basic = map_basic_types(&known);
    let real = map_real_types(&known);
    for (b, r) in basic.iter().zip(&real) {
        if r.as_str().chars().next().is_some_and(|c| c.is_ascii_lowercase()) && *r != RealTypeTag::Null {
            assert_eq!(b.as_str(), r.as_str());
        }
    }
}

#[test]
fn counting_known_types_gives_one_each() {
    let known = known_types().unwrap();
    let counts = count_by_type(&known);
    assert_eq!(counts.len(), known.len());
    assert!(counts.iter().all(|e| e.count == 1));
}

#[test]
fn json_values_classify_like_literals() {
    let json: serde_json::Value = serde_json::from_str(r#"[true, null, 1.5, "x", [1], {"a": 1}]"#).unwrap();
    let value = Value::from_json(&json);
    let items = match value.as_object() {
        Some(core_types::JsObject::Array(items)) => items.clone(),
        other => panic!("expected array, got {:?}", other),
    };
    let actual = Outcome::from(map_real_types(&items));
    let expected = Outcome::from(vec!["boolean", "null", "number", "string", "Array", "object"]);
    assert!(deep_equal(&actual, &expected));
}

#[test]
fn harness_reports_classifier_mismatch() {
    let writer = CaptureWriter::new();
    let mut harness = Harness::with_writer(Box::new(writer.clone()));
    harness.begin_block("wrong fixture");
    harness.check("null is not object", real_type(&Value::Null), "object");
    let report = harness.finish();

    assert_eq!(report.failed, 1);
    let failure = &report.failures[0];
    assert_eq!(failure.actual.to_string(), "'null'");
    assert_eq!(failure.expected.to_string(), "'object'");
    assert!(writer.lines().iter().any(|line| line.contains("[FAIL] null is not object")));
}
