//! JavaScript value representation.
//!
//! This module provides the core `Value` enum that models every kind of
//! JavaScript value the type classifiers can be asked about.

use crate::error::JsResult;
use crate::object::{JsObject, RegExpData};
use crate::symbol::Symbol;
use chrono::DateTime;
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;
use std::rc::Rc;

/// Represents any JavaScript value.
///
/// Primitive values are stored inline, while objects live behind an `Rc`
/// so that cloning a value keeps its identity, as copying a reference does
/// in JavaScript.
///
/// Numbers have two representations: small integers are kept as `Smi`,
/// everything else (fractions, `-0`, NaN, the infinities) as `Double`.
/// Both report `typeof` `"number"` and compare equal when numerically equal.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let undefined = Value::Undefined;
/// let number = Value::Smi(42);
/// let float = Value::Double(3.14);
///
/// assert!(!undefined.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(float.type_of(), "number");
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// JavaScript undefined value
    Undefined,
    /// JavaScript null value
    Null,
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// Small integer
    Smi(i32),
    /// IEEE 754 double-precision floating point
    Double(f64),
    /// JavaScript string value
    String(std::string::String),
    /// Unique symbol
    Symbol(Symbol),
    /// JavaScript BigInt (arbitrary precision integer)
    BigInt(BigInt),
    /// Function reference by name (empty for anonymous functions)
    Function(std::string::String),
    /// Heap object
    Object(Rc<JsObject>),
}

impl Value {
    /// Build a number, choosing the `Smi` form when the value allows it.
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(matches!(Value::number(7.0), Value::Smi(7)));
    /// assert!(matches!(Value::number(0.5), Value::Double(_)));
    /// assert!(matches!(Value::number(-0.0), Value::Double(_)));
    /// ```
    pub fn number(n: f64) -> Self {
        let fits = n.fract() == 0.0 && n >= i32::MIN as f64 && n <= i32::MAX as f64;
        if fits && !(n == 0.0 && n.is_sign_negative()) {
            Value::Smi(n as i32)
        } else {
            Value::Double(n)
        }
    }

    /// String primitive
    pub fn string(s: impl Into<std::string::String>) -> Self {
        Value::String(s.into())
    }

    /// `Symbol(description)`
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Symbol::new(description))
    }

    /// BigInt primitive
    pub fn bigint(n: impl Into<BigInt>) -> Self {
        Value::BigInt(n.into())
    }

    /// Function value; pass `""` for an arrow or anonymous function
    pub fn function(name: impl Into<std::string::String>) -> Self {
        Value::Function(name.into())
    }

    /// Object literal
    pub fn plain_object(properties: Vec<(std::string::String, Value)>) -> Self {
        Value::from(JsObject::Plain(properties))
    }

    /// Array literal
    pub fn array(elements: Vec<Value>) -> Self {
        Value::from(JsObject::Array(elements))
    }

    /// `new Date(ms)`
    pub fn date(time_value: f64) -> Self {
        Value::from(JsObject::Date(time_value))
    }

    /// `new Date()`
    pub fn date_now() -> Self {
        Value::date(JsObject::now())
    }

    /// `new RegExp(pattern, flags)`
    pub fn regexp(pattern: &str, flags: &str) -> JsResult<Self> {
        Ok(Value::from(JsObject::RegExp(RegExpData::new(pattern, flags)?)))
    }

    /// `new Set(values)`, dropping duplicates under strict equality
    pub fn set(values: Vec<Value>) -> Self {
        let mut unique: Vec<Value> = Vec::with_capacity(values.len());
        for value in values {
            if !unique.iter().any(|v| v.same_value_zero(&value)) {
                unique.push(value);
            }
        }
        Value::from(JsObject::Set(unique))
    }

    /// `new Map(entries)`
    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        Value::from(JsObject::Map(entries))
    }

    /// `new Error(message)`
    pub fn error(message: impl Into<std::string::String>) -> Self {
        Value::from(JsObject::Error(message.into()))
    }

    /// `new String(s)`
    pub fn string_object(s: impl Into<std::string::String>) -> Self {
        Value::from(JsObject::StringWrapper(s.into()))
    }

    /// `new Boolean(v)`; JavaScript coerces the argument by truthiness
    pub fn boolean_object(value: &Value) -> Self {
        Value::from(JsObject::BooleanWrapper(value.is_truthy()))
    }

    /// `new Number(n)`
    pub fn number_object(n: f64) -> Self {
        Value::from(JsObject::NumberWrapper(n))
    }

    /// Returns whether this value is truthy in JavaScript semantics.
    ///
    /// In JavaScript, the following values are falsy:
    /// - undefined
    /// - null
    /// - false
    /// - 0 (including -0) and 0n
    /// - NaN
    /// - "" (empty string)
    ///
    /// All other values are truthy, including all objects (so
    /// `new Boolean(false)` is truthy).
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(!Value::Undefined.is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Double(f64::NAN).is_truthy());
    /// assert!(Value::array(vec![]).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Smi(n) => *n != 0,
            Value::Double(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) => true,
            Value::BigInt(n) => !n.is_zero(),
            Value::Function(_) => true,
            Value::Object(_) => true,
        }
    }

    /// JavaScript `!value`
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Null.logical_not(), Value::Boolean(true));
    /// assert_eq!(Value::Null.logical_not().logical_not(), Value::Boolean(false));
    /// ```
    pub fn logical_not(&self) -> Value {
        Value::Boolean(!self.is_truthy())
    }

    /// Returns the JavaScript typeof result for this value.
    ///
    /// This follows JavaScript's `typeof` operator behavior, including the
    /// historical quirk that `typeof null` is `"object"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Undefined.type_of(), "undefined");
    /// assert_eq!(Value::Null.type_of(), "object");
    /// assert_eq!(Value::Boolean(true).type_of(), "boolean");
    /// assert_eq!(Value::function("f").type_of(), "function");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object", // JavaScript quirk
            Value::Boolean(_) => "boolean",
            Value::Smi(_) | Value::Double(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::BigInt(_) => "bigint",
            Value::Function(_) => "function",
            Value::Object(_) => "object",
        }
    }

    /// The object behind this value, if it is one
    pub fn as_object(&self) -> Option<&JsObject> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// `value instanceof String`
    pub fn is_string_wrapper(&self) -> bool {
        matches!(self.as_object(), Some(JsObject::StringWrapper(_)))
    }

    /// `value instanceof Date`
    pub fn is_date(&self) -> bool {
        matches!(self.as_object(), Some(JsObject::Date(_)))
    }

    /// `value instanceof Set`
    pub fn is_set(&self) -> bool {
        matches!(self.as_object(), Some(JsObject::Set(_)))
    }

    /// `Array.isArray(value)`
    pub fn is_array(&self) -> bool {
        matches!(self.as_object(), Some(JsObject::Array(_)))
    }

    /// `value instanceof Boolean`
    pub fn is_boolean_wrapper(&self) -> bool {
        matches!(self.as_object(), Some(JsObject::BooleanWrapper(_)))
    }

    /// `value === null`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// `value instanceof RegExp`
    pub fn is_regexp(&self) -> bool {
        matches!(self.as_object(), Some(JsObject::RegExp(_)))
    }

    /// `Number.isNaN(value)`
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Double(n) if n.is_nan())
    }

    /// `value === Infinity || value === -Infinity`
    pub fn is_infinite(&self) -> bool {
        matches!(self, Value::Double(n) if n.is_infinite())
    }

    /// SameValueZero: strict equality except that NaN equals NaN.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        (self.is_nan() && other.is_nan()) || self == other
    }
}

impl From<JsObject> for Value {
    fn from(obj: JsObject) -> Self {
        Value::Object(Rc::new(obj))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Smi(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

/// Strict equality (`===`).
///
/// NaN is unequal to everything including itself, `0 === -0`, and objects
/// compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Smi(a), Value::Smi(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Smi(a), Value::Double(b)) | (Value::Double(b), Value::Smi(a)) => {
                f64::from(*a) == *b
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

fn format_double(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        // Integer-valued doubles display without decimal point
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

/// Implementation of Display trait for JavaScript string conversion.
///
/// This follows JavaScript's `String()` conversion rules:
/// - undefined → "undefined"
/// - null → "null"
/// - number → decimal representation, NaN, Infinity
/// - array → elements joined by "," (null and undefined become "")
/// - plain object → "[object Object]"
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// assert_eq!(Value::Undefined.to_string(), "undefined");
/// assert_eq!(Value::Double(f64::NAN).to_string(), "NaN");
/// assert_eq!(
///     Value::array(vec![Value::Smi(1), Value::Null, Value::Smi(2)]).to_string(),
///     "1,,2"
/// );
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Smi(n) => write!(f, "{}", n),
            Value::Double(n) => format_double(f, *n),
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::BigInt(n) => write!(f, "{}", n),
            Value::Function(name) => write!(f, "function {}() {{ [native code] }}", name),
            Value::Object(obj) => match obj.as_ref() {
                JsObject::Plain(_) => write!(f, "[object Object]"),
                JsObject::Array(elements) => {
                    for (i, element) in elements.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        if !matches!(element, Value::Undefined | Value::Null) {
                            write!(f, "{}", element)?;
                        }
                    }
                    Ok(())
                }
                JsObject::Date(ms) => {
                    match DateTime::from_timestamp_millis(*ms as i64).filter(|_| ms.is_finite()) {
                        Some(dt) => write!(f, "{}", dt.format("%a %b %d %Y %H:%M:%S GMT+0000")),
                        None => write!(f, "Invalid Date"),
                    }
                }
                JsObject::RegExp(re) => write!(f, "/{}/{}", re.source(), re.flags()),
                JsObject::Set(_) => write!(f, "[object Set]"),
                JsObject::Map(_) => write!(f, "[object Map]"),
                JsObject::Error(message) if message.is_empty() => write!(f, "Error"),
                JsObject::Error(message) => write!(f, "Error: {}", message),
                JsObject::StringWrapper(s) => write!(f, "{}", s),
                JsObject::BooleanWrapper(b) => write!(f, "{}", b),
                JsObject::NumberWrapper(n) => format_double(f, *n),
            },
        }
    }
}
