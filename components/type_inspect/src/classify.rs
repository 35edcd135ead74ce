//! Type classification of single values.

use crate::tag::{RealTypeTag, TypeTag};
use core_types::Value;

type Probe = fn(&Value) -> bool;

/// Checks applied to `typeof` `"object"` values; the first match wins.
///
/// Order matters: `null` shares the `"object"` tag and arrays are objects
/// too, so each kind needs its own probe ahead of the fallback.
const OBJECT_PROBES: [(Probe, RealTypeTag); 7] = [
    (Value::is_string_wrapper, RealTypeTag::StringObject),
    (Value::is_date, RealTypeTag::Date),
    (Value::is_set, RealTypeTag::Set),
    (Value::is_array, RealTypeTag::Array),
    (Value::is_boolean_wrapper, RealTypeTag::BooleanObject),
    (Value::is_null, RealTypeTag::Null),
    (Value::is_regexp, RealTypeTag::RegExp),
];

/// The `typeof` tag of `value`.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use type_inspect::{basic_type, TypeTag};
///
/// assert_eq!(basic_type(&Value::Boolean(true)), TypeTag::Boolean);
/// assert_eq!(basic_type(&Value::array(vec![])), TypeTag::Object);
/// assert_eq!(basic_type(&Value::Null), TypeTag::Object);
/// ```
pub fn basic_type(value: &Value) -> TypeTag {
    match value {
        Value::Undefined => TypeTag::Undefined,
        Value::Null | Value::Object(_) => TypeTag::Object,
        Value::Boolean(_) => TypeTag::Boolean,
        Value::Smi(_) | Value::Double(_) => TypeTag::Number,
        Value::String(_) => TypeTag::String,
        Value::Symbol(_) => TypeTag::Symbol,
        Value::BigInt(_) => TypeTag::BigInt,
        Value::Function(_) => TypeTag::Function,
    }
}

/// The refined type tag of `value`.
///
/// Objects are resolved to the built-in that created them (wrapped String,
/// Date, Set, Array, wrapped Boolean, RegExp) or `null`; numbers are split
/// into NaN, Infinity (either sign) and finite numbers. Every other value
/// keeps its `typeof` tag.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use type_inspect::{real_type, RealTypeTag, TypeTag};
///
/// assert_eq!(real_type(&Value::Null), RealTypeTag::Null);
/// assert_eq!(real_type(&Value::Double(f64::NAN)), RealTypeTag::NaN);
/// assert_eq!(real_type(&Value::Smi(3)), RealTypeTag::Basic(TypeTag::Number));
/// ```
pub fn real_type(value: &Value) -> RealTypeTag {
    match basic_type(value) {
        TypeTag::Object => OBJECT_PROBES
            .iter()
            .find(|(probe, _)| probe(value))
            .map(|(_, tag)| *tag)
            .unwrap_or(RealTypeTag::Basic(TypeTag::Object)),
        TypeTag::Number => {
            // NaN never equals itself, so it needs its own predicate
            if value.is_nan() {
                RealTypeTag::NaN
            } else if value.is_infinite() {
                RealTypeTag::Infinity
            } else {
                RealTypeTag::Basic(TypeTag::Number)
            }
        }
        other => RealTypeTag::Basic(other),
    }
}
