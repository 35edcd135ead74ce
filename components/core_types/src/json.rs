//! Conversion from JSON documents into the value model.

use crate::value::Value;
use serde_json::Value as JsonValue;

impl Value {
    /// Convert a parsed JSON document the way `JSON.parse` would.
    ///
    /// Integers that fit in 32 bits become `Smi`; other numbers become
    /// `Double`. Objects keep their key order.
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// let json: serde_json::Value = serde_json::from_str(r#"[1, "a", null, {}]"#).unwrap();
    /// let value = Value::from_json(&json);
    /// assert!(value.is_array());
    /// assert_eq!(value.to_string(), "1,a,,[object Object]");
    /// ```
    pub fn from_json(json: &JsonValue) -> Value {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Boolean(*b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => i32::try_from(i)
                    .map(Value::Smi)
                    .unwrap_or(Value::Double(i as f64)),
                None => Value::number(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Array(items) => Value::array(items.iter().map(Value::from_json).collect()),
            JsonValue::Object(map) => Value::plain_object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
        }
    }
}
