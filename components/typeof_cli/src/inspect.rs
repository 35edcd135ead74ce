//! Classification of values supplied as JSON.

use crate::error::CliResult;
use core_types::{JsObject, Value};
use serde::Serialize;
use std::fmt;
use tracing::debug;
use type_inspect::{
    all_same_type, all_unique_type, basic_type, count_by_type, real_type, FrequencyEntry,
    RealTypeTag, TypeTag,
};

/// Types of one inspected value
#[derive(Debug, Clone, Serialize)]
pub struct ItemTypes {
    /// `String(value)`
    pub value: String,
    /// `typeof` tag
    pub basic: TypeTag,
    /// Refined tag
    pub real: RealTypeTag,
    /// Constructor name for objects
    pub class: Option<&'static str>,
}

/// Analysis of a list of values
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    /// Per-item tags, in input order
    pub items: Vec<ItemTypes>,
    /// All items share one real type
    pub all_same_type: bool,
    /// No two items share a real type
    pub all_unique_type: bool,
    /// Real type frequencies, sorted by tag
    pub counts: Vec<FrequencyEntry>,
}

impl Inspection {
    /// Analyse `values`
    pub fn of(values: &[Value]) -> Self {
        Inspection {
            items: values
                .iter()
                .map(|value| ItemTypes {
                    value: value.to_string(),
                    basic: basic_type(value),
                    real: real_type(value),
                    class: value.as_object().map(JsObject::class_name),
                })
                .collect(),
            all_same_type: all_same_type(values),
            all_unique_type: all_unique_type(values),
            counts: count_by_type(values),
        }
    }
}

/// Parse `input` as JSON and analyse it.
///
/// A top-level array is inspected element by element; any other document
/// is treated as a single value.
pub fn inspect(input: &str) -> CliResult<Inspection> {
    let json: serde_json::Value = serde_json::from_str(input)?;
    let values: Vec<Value> = match &json {
        serde_json::Value::Array(items) => items.iter().map(Value::from_json).collect(),
        other => vec![Value::from_json(other)],
    };
    debug!(items = values.len(), "inspecting JSON input");
    Ok(Inspection::of(&values))
}

impl fmt::Display for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            writeln!(
                f,
                "{:<24} {:<10} {:<10} {}",
                item.value,
                item.basic,
                item.real,
                item.class.unwrap_or("-")
            )?;
        }
        writeln!(f, "all same type: {}", self.all_same_type)?;
        writeln!(f, "all unique type: {}", self.all_unique_type)?;
        let counts: Vec<String> = self.counts.iter().map(FrequencyEntry::to_string).collect();
        write!(f, "counts: [{}]", counts.join(", "))
    }
}
