//! Closed sets of type tags.
//!
//! [`TypeTag`] is what `typeof` reports. [`RealTypeTag`] refines it: values
//! that `typeof` lumps into `"object"` or `"number"` get a tag naming the
//! built-in they really are.
//!
//! Both enums order by their lexical representation, the way a default
//! JavaScript `Array.prototype.sort` orders the strings, so uppercase tags
//! (`"Array"`, `"Date"`) sort before lowercase ones (`"boolean"`).

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tag string that names no known type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type tag '{0}'")]
pub struct UnknownTag(pub String);

/// Result of the `typeof` operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `"boolean"`
    Boolean,
    /// `"string"`
    String,
    /// `"object"`, including `null`
    Object,
    /// `"function"`
    Function,
    /// `"undefined"`
    Undefined,
    /// `"number"`, including NaN and the infinities
    Number,
    /// `"symbol"`
    Symbol,
    /// `"bigint"`
    BigInt,
}

impl TypeTag {
    /// All tags, in declaration order
    pub const ALL: [TypeTag; 8] = [
        TypeTag::Boolean,
        TypeTag::String,
        TypeTag::Object,
        TypeTag::Function,
        TypeTag::Undefined,
        TypeTag::Number,
        TypeTag::Symbol,
        TypeTag::BigInt,
    ];

    /// The string `typeof` would produce
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Boolean => "boolean",
            TypeTag::String => "string",
            TypeTag::Object => "object",
            TypeTag::Function => "function",
            TypeTag::Undefined => "undefined",
            TypeTag::Number => "number",
            TypeTag::Symbol => "symbol",
            TypeTag::BigInt => "bigint",
        }
    }
}

/// Refined type tag
///
/// `Basic` carries the `typeof` result through unchanged for values that
/// need no refinement (finite numbers, plain objects, strings, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RealTypeTag {
    /// Unrefined `typeof` result
    Basic(TypeTag),
    /// `"String"`: a `new String(..)` wrapper
    StringObject,
    /// `"Date"`
    Date,
    /// `"Set"`
    Set,
    /// `"Array"`
    Array,
    /// `"Boolean"`: a `new Boolean(..)` wrapper
    BooleanObject,
    /// `"null"`
    Null,
    /// `"RegExp"`
    RegExp,
    /// `"NaN"`
    NaN,
    /// `"Infinity"`, either sign
    Infinity,
}

impl RealTypeTag {
    /// Tags that only exist after refinement
    pub const EXTENDED: [RealTypeTag; 9] = [
        RealTypeTag::StringObject,
        RealTypeTag::Date,
        RealTypeTag::Set,
        RealTypeTag::Array,
        RealTypeTag::BooleanObject,
        RealTypeTag::Null,
        RealTypeTag::RegExp,
        RealTypeTag::NaN,
        RealTypeTag::Infinity,
    ];

    /// Lexical representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RealTypeTag::Basic(tag) => tag.as_str(),
            RealTypeTag::StringObject => "String",
            RealTypeTag::Date => "Date",
            RealTypeTag::Set => "Set",
            RealTypeTag::Array => "Array",
            RealTypeTag::BooleanObject => "Boolean",
            RealTypeTag::Null => "null",
            RealTypeTag::RegExp => "RegExp",
            RealTypeTag::NaN => "NaN",
            RealTypeTag::Infinity => "Infinity",
        }
    }
}

impl From<TypeTag> for RealTypeTag {
    fn from(tag: TypeTag) -> Self {
        RealTypeTag::Basic(tag)
    }
}

impl FromStr for TypeTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

impl FromStr for RealTypeTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RealTypeTag::EXTENDED
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .map(Ok)
            .unwrap_or_else(|| s.parse::<TypeTag>().map(RealTypeTag::Basic))
    }
}

macro_rules! lexical_tag_impls {
    ($($ty:ty),*) => {$(
        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> Ordering {
                self.as_str().cmp(other.as_str())
            }
        }

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    )*};
}

lexical_tag_impls!(TypeTag, RealTypeTag);
