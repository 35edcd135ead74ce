//! Heap object kinds.
//!
//! The classifier only needs to know which built-in constructor produced an
//! object, so each kind keeps just enough state to display itself.

use crate::error::{JsError, JsResult};
use crate::value::Value;
use chrono::Utc;
use regex::RegexBuilder;

/// A JavaScript object, tagged by the built-in that created it.
#[derive(Debug, Clone)]
pub enum JsObject {
    /// `{}` or any object literal
    Plain(Vec<(String, Value)>),
    /// `[]`
    Array(Vec<Value>),
    /// `new Date(..)`, time value in ms since the epoch (NaN when invalid)
    Date(f64),
    /// `new RegExp(..)` or a regex literal
    RegExp(RegExpData),
    /// `new Set(..)`, insertion ordered
    Set(Vec<Value>),
    /// `new Map(..)`, insertion ordered
    Map(Vec<(Value, Value)>),
    /// `new Error(..)`
    Error(String),
    /// `new String(..)`
    StringWrapper(String),
    /// `new Boolean(..)`
    BooleanWrapper(bool),
    /// `new Number(..)`
    NumberWrapper(f64),
}

impl JsObject {
    /// Name of the constructor that produced this object
    pub fn class_name(&self) -> &'static str {
        match self {
            JsObject::Plain(_) => "Object",
            JsObject::Array(_) => "Array",
            JsObject::Date(_) => "Date",
            JsObject::RegExp(_) => "RegExp",
            JsObject::Set(_) => "Set",
            JsObject::Map(_) => "Map",
            JsObject::Error(_) => "Error",
            JsObject::StringWrapper(_) => "String",
            JsObject::BooleanWrapper(_) => "Boolean",
            JsObject::NumberWrapper(_) => "Number",
        }
    }

    /// Current time value for `new Date()`
    pub fn now() -> f64 {
        Utc::now().timestamp_millis() as f64
    }
}

/// Validated regular expression source and flags
#[derive(Debug, Clone)]
pub struct RegExpData {
    source: String,
    flags: String,
}

impl RegExpData {
    /// Check that `pattern` compiles under JavaScript `flags`.
    ///
    /// Unknown or repeated flags, `u` together with `v`, and patterns the
    /// engine cannot compile produce a `SyntaxError`.
    pub fn new(pattern: &str, flags: &str) -> JsResult<Self> {
        let mut seen = String::new();
        for ch in flags.chars() {
            let unicode_clash = (ch == 'u' && seen.contains('v')) || (ch == 'v' && seen.contains('u'));
            if !"dgimsuvy".contains(ch) || seen.contains(ch) || unicode_clash {
                return Err(JsError::syntax_error(format!(
                    "Invalid regular expression flags '{}'",
                    flags
                )));
            }
            seen.push(ch);
        }

        RegexBuilder::new(pattern)
            .case_insensitive(seen.contains('i'))
            .multi_line(seen.contains('m'))
            .dot_matches_new_line(seen.contains('s'))
            .build()
            .map_err(|e| {
                JsError::syntax_error(format!("Invalid regular expression: /{}/: {}", pattern, e))
            })?;

        let mut sorted: Vec<char> = seen.chars().collect();
        sorted.sort_unstable();

        Ok(RegExpData {
            source: pattern.to_string(),
            flags: sorted.into_iter().collect(),
        })
    }

    /// Pattern source; an empty pattern reads back as `(?:)`
    pub fn source(&self) -> &str {
        if self.source.is_empty() {
            "(?:)"
        } else {
            &self.source
        }
    }

    /// Flags in canonical (sorted) order
    pub fn flags(&self) -> &str {
        &self.flags
    }
}
