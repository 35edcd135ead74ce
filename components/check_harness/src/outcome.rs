//! Shapes of checked results.
//!
//! Every result the analysis functions produce is a scalar, a list of
//! scalars, or a list of `(tag, count)` pairs. Fixtures pick the shape
//! through the `From` conversions below, so the comparator only ever
//! matches on [`Outcome`] variants.

use serde::Serialize;
use std::fmt;
use type_inspect::{FrequencyEntry, RealTypeTag, TypeTag};

/// A single comparable value
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean result
    Bool(bool),
    /// Numeric result; compared with IEEE equality
    Number(f64),
    /// Text result, including type tags
    Text(String),
}

/// A checked result
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// One scalar
    Scalar(Scalar),
    /// Ordered list of scalars
    Sequence(Vec<Scalar>),
    /// `(tag, count)` pairs; order is not significant
    Pairs(Vec<(String, usize)>),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "'{}'", s),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Scalar(scalar) => write!(f, "{}", scalar),
            Outcome::Sequence(items) if items.is_empty() => write!(f, "[]"),
            Outcome::Sequence(items) => {
                let parts: Vec<String> = items.iter().map(Scalar::to_string).collect();
                write!(f, "[ {} ]", parts.join(", "))
            }
            Outcome::Pairs(pairs) if pairs.is_empty() => write!(f, "[]"),
            Outcome::Pairs(pairs) => {
                let parts: Vec<String> = pairs
                    .iter()
                    .map(|(tag, count)| format!("[ '{}', {} ]", tag, count))
                    .collect();
                write!(f, "[ {} ]", parts.join(", "))
            }
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<TypeTag> for Scalar {
    fn from(tag: TypeTag) -> Self {
        Scalar::Text(tag.as_str().to_string())
    }
}

impl From<RealTypeTag> for Scalar {
    fn from(tag: RealTypeTag) -> Self {
        Scalar::Text(tag.as_str().to_string())
    }
}

macro_rules! outcome_from {
    ($($item:ty),*) => {$(
        impl From<$item> for Outcome {
            fn from(value: $item) -> Self {
                Outcome::Scalar(Scalar::from(value))
            }
        }

        impl From<Vec<$item>> for Outcome {
            fn from(items: Vec<$item>) -> Self {
                Outcome::Sequence(items.into_iter().map(Scalar::from).collect())
            }
        }
    )*};
}

outcome_from!(bool, f64, &str, String, TypeTag, RealTypeTag);

impl From<Vec<FrequencyEntry>> for Outcome {
    fn from(entries: Vec<FrequencyEntry>) -> Self {
        Outcome::Pairs(
            entries
                .into_iter()
                .map(|entry| (entry.tag.as_str().to_string(), entry.count))
                .collect(),
        )
    }
}

impl From<Vec<(&str, usize)>> for Outcome {
    fn from(pairs: Vec<(&str, usize)>) -> Self {
        Outcome::Pairs(
            pairs
                .into_iter()
                .map(|(tag, count)| (tag.to_string(), count))
                .collect(),
        )
    }
}
