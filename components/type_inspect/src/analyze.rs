//! Type analysis over sequences of values.
//!
//! All functions borrow the input slice and never fail. Empty input:
//! [`all_same_type`] is `false` (there is no single type shared by the
//! elements), [`all_unique_type`] is `true`, and [`count_by_type`] returns
//! an empty list.

use crate::classify::{basic_type, real_type};
use crate::tag::{RealTypeTag, TypeTag};
use core_types::Value;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Number of elements sharing one real type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    /// The real type
    pub tag: RealTypeTag,
    /// How many elements have it (at least 1)
    pub count: usize,
}

impl FrequencyEntry {
    /// Create an entry
    pub fn new(tag: RealTypeTag, count: usize) -> Self {
        FrequencyEntry { tag, count }
    }
}

impl fmt::Display for FrequencyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "['{}', {}]", self.tag, self.count)
    }
}

/// `typeof` of every element, in order
pub fn map_basic_types(values: &[Value]) -> Vec<TypeTag> {
    values.iter().map(basic_type).collect()
}

/// Real type of every element, in order
pub fn map_real_types(values: &[Value]) -> Vec<RealTypeTag> {
    values.iter().map(real_type).collect()
}

fn distinct_real_types(values: &[Value]) -> usize {
    values.iter().map(real_type).collect::<HashSet<_>>().len()
}

/// Whether every element has the same real type
///
/// ```
/// use core_types::Value;
/// use type_inspect::all_same_type;
///
/// assert!(all_same_type(&[Value::Smi(11), Value::Smi(12), Value::Smi(13)]));
/// assert!(!all_same_type(&[Value::string("11"), Value::string_object("12")]));
/// assert!(!all_same_type(&[]));
/// ```
pub fn all_same_type(values: &[Value]) -> bool {
    distinct_real_types(values) == 1
}

/// Whether no two elements share a real type
pub fn all_unique_type(values: &[Value]) -> bool {
    distinct_real_types(values) == values.len()
}

/// Occurrences of each real type, sorted by tag.
///
/// ```
/// use core_types::Value;
/// use type_inspect::{count_by_type, FrequencyEntry, RealTypeTag, TypeTag};
///
/// let counts = count_by_type(&[Value::Boolean(true), Value::Null, Value::Boolean(false)]);
/// assert_eq!(
///     counts,
///     vec![
///         FrequencyEntry::new(RealTypeTag::Basic(TypeTag::Boolean), 2),
///         FrequencyEntry::new(RealTypeTag::Null, 1),
///     ]
/// );
/// ```
pub fn count_by_type(values: &[Value]) -> Vec<FrequencyEntry> {
    let mut tags = map_real_types(values);
    tags.sort();

    let mut entries: Vec<FrequencyEntry> = Vec::new();
    for tag in tags {
        match entries.last_mut() {
            Some(last) if last.tag == tag => last.count += 1,
            _ => entries.push(FrequencyEntry::new(tag, 1)),
        }
    }

    debug!(
        items = values.len(),
        distinct = entries.len(),
        "counted real types"
    );
    entries
}
