//! Built-in check suite.
//!
//! Fixture tables for every classification and analysis function, run
//! through a [`Harness`] block by block.

use crate::error::CliResult;
use check_harness::Harness;
use core_types::{JsResult, Value};
use type_inspect::{
    all_same_type, all_unique_type, basic_type, count_by_type, map_basic_types, map_real_types,
    real_type,
};

/// Block names, in run order
pub const BLOCKS: [&str; 6] = [
    "basic_type",
    "real_type",
    "all_same_type",
    "map_basic_types vs map_real_types",
    "all_unique_type",
    "count_by_type",
];

/// One value of each real type
pub fn known_types() -> JsResult<Vec<Value>> {
    Ok(vec![
        Value::Boolean(5 > 3),
        Value::Smi(324),
        Value::string("Hello"),
        Value::array(vec![]),
        Value::plain_object(vec![]),
        Value::function("v"),
        Value::Undefined,
        Value::Null,
        Value::Double(f64::NAN),
        Value::Double(f64::INFINITY),
        Value::date_now(),
        Value::regexp("", "")?,
        Value::set(vec![]),
        Value::boolean_object(&Value::Undefined),
        Value::symbol(Some("Hi")),
        Value::bigint(42),
        Value::string_object("wrapped"),
    ])
}

/// Run every block of the suite
pub fn run_suite(harness: &mut Harness) -> CliResult<()> {
    check_basic_type(harness);
    check_real_type(harness)?;
    check_all_same_type(harness);
    check_type_mapping(harness)?;
    check_all_unique_type(harness)?;
    check_count_by_type(harness);
    Ok(())
}

fn check_basic_type(harness: &mut Harness) {
    harness.begin_block(BLOCKS[0]);

    harness.check("Boolean", basic_type(&Value::Boolean(true)), "boolean");
    harness.check("Number", basic_type(&Value::Smi(123)), "number");
    harness.check("String", basic_type(&Value::string("whoo")), "string");
    harness.check("Array", basic_type(&Value::array(vec![])), "object");
    harness.check("Object", basic_type(&Value::plain_object(vec![])), "object");
    harness.check("Function", basic_type(&Value::function("")), "function");
    harness.check("Undefined", basic_type(&Value::Undefined), "undefined");
    harness.check("Null", basic_type(&Value::Null), "object");
}

fn check_real_type(harness: &mut Harness) -> CliResult<()> {
    harness.begin_block(BLOCKS[1]);

    harness.check("Date", real_type(&Value::date_now()), "Date");
    harness.check("RegExp", real_type(&Value::regexp("x", "")?), "RegExp");
    harness.check("Set", real_type(&Value::set(vec![])), "Set");
    harness.check("Null", real_type(&Value::Null), "null");
    harness.check("NaN", real_type(&Value::Double(f64::NAN)), "NaN");
    harness.check("Infinity", real_type(&Value::Double(f64::INFINITY)), "Infinity");
    harness.check(
        "Negative infinity",
        real_type(&Value::Double(f64::NEG_INFINITY)),
        "Infinity",
    );
    harness.check("Wrapped number", real_type(&Value::number_object(1.0)), "object");
    Ok(())
}

fn check_all_same_type(harness: &mut Harness) {
    harness.begin_block(BLOCKS[2]);

    harness.check(
        "All values are numbers",
        all_same_type(&[Value::Smi(11), Value::Smi(12), Value::Smi(13)]),
        true,
    );
    harness.check(
        "All values are strings",
        all_same_type(&[Value::string("11"), Value::string("12"), Value::string("13")]),
        true,
    );
    harness.check(
        "All values are strings but wait",
        all_same_type(&[
            Value::string("11"),
            Value::string_object("12"),
            Value::string("13"),
        ]),
        false,
    );
    harness.check(
        "Values like a number",
        all_same_type(&[Value::Smi(123), Value::Double(f64::NAN), Value::Double(f64::INFINITY)]),
        false,
    );
    harness.check(
        "Values like an object",
        all_same_type(&[Value::plain_object(vec![])]),
        true,
    );
    harness.check("No values", all_same_type(&[]), false);
}

fn check_type_mapping(harness: &mut Harness) -> CliResult<()> {
    harness.begin_block(BLOCKS[3]);
    let known = known_types()?;

    harness.check(
        "Check basic types",
        map_basic_types(&known),
        vec![
            "boolean", "number", "string", "object", "object", "function", "undefined", "object",
            "number", "number", "object", "object", "object", "object", "symbol", "bigint",
            "object",
        ],
    );
    harness.check(
        "Check real types",
        map_real_types(&known),
        vec![
            "boolean", "number", "string", "Array", "object", "function", "undefined", "null",
            "NaN", "Infinity", "Date", "RegExp", "Set", "Boolean", "symbol", "bigint", "String",
        ],
    );
    Ok(())
}

fn check_all_unique_type(harness: &mut Harness) -> CliResult<()> {
    harness.begin_block(BLOCKS[4]);

    harness.check(
        "All value types in the array are unique",
        all_unique_type(&[Value::Boolean(true), Value::Smi(123), Value::string("123")]),
        true,
    );
    harness.check(
        "Two values have the same type",
        all_unique_type(&[
            Value::Boolean(true),
            Value::Smi(123),
            Value::Boolean(Value::string("123") == Value::Smi(123)),
        ]),
        false,
    );
    harness.check(
        "There are no repeated types in known types",
        all_unique_type(&known_types()?),
        true,
    );
    harness.check("No values", all_unique_type(&[]), true);
    Ok(())
}

fn check_count_by_type(harness: &mut Harness) {
    harness.begin_block(BLOCKS[5]);
    let expected = vec![("boolean", 3), ("null", 1), ("object", 1)];

    harness.check(
        "Count unique types of array items",
        count_by_type(&[
            Value::Boolean(true),
            Value::Null,
            Value::Null.logical_not(),
            Value::Null.logical_not().logical_not(),
            Value::plain_object(vec![]),
        ]),
        expected.clone(),
    );
    harness.check(
        "Counted unique types are sorted",
        count_by_type(&[
            Value::plain_object(vec![]),
            Value::Null,
            Value::Boolean(true),
            Value::Null.logical_not(),
            Value::Null.logical_not().logical_not(),
        ]),
        expected,
    );
    harness.check(
        "Numbers split into NaN and Infinity",
        count_by_type(&[
            Value::Smi(1),
            Value::Double(f64::NAN),
            Value::Double(0.5),
            Value::Double(f64::NEG_INFINITY),
        ]),
        vec![("Infinity", 1), ("NaN", 1), ("number", 2)],
    );
    harness.check(
        "Count of no values",
        count_by_type(&[]),
        Vec::<(&str, usize)>::new(),
    );
}
