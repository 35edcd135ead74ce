//! Runtime type classification for JavaScript values.
//!
//! - [`basic_type`] answers what `typeof` answers.
//! - [`real_type`] tells apart the values `typeof` groups together: `null`,
//!   arrays, dates, sets, regular expressions, wrapped primitives, NaN and
//!   Infinity.
//! - The `analyze` functions apply those over slices: per-item tags,
//!   uniform and unique type checks, and sorted frequency counts.
//!
//! # Examples
//!
//! ```
//! use core_types::Value;
//! use type_inspect::{all_unique_type, real_type, RealTypeTag};
//!
//! assert_eq!(real_type(&Value::date_now()), RealTypeTag::Date);
//! assert!(all_unique_type(&[Value::Boolean(true), Value::Smi(123), Value::string("123")]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod analyze;
mod classify;
mod tag;

pub use analyze::{
    all_same_type, all_unique_type, count_by_type, map_basic_types, map_real_types,
    FrequencyEntry,
};
pub use classify::{basic_type, real_type};
pub use tag::{RealTypeTag, TypeTag, UnknownTag};
