//! Core JavaScript value types and error handling.
//!
//! This crate provides the value model the type classifiers work on: every
//! primitive, plus the built-in object kinds whose `typeof` is `"object"`
//! but which a finer classification can tell apart.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of JavaScript values
//! - [`JsObject`] - Built-in object kinds (Array, Date, Set, wrappers, ...)
//! - [`Symbol`] - Unique symbol primitive
//! - [`JsError`] - JavaScript errors raised by fallible constructors
//! - [`ErrorKind`] - Types of JavaScript errors
//!
//! # Examples
//!
//! ```
//! use core_types::Value;
//!
//! let num = Value::Smi(42);
//! assert!(num.is_truthy());
//! assert_eq!(num.type_of(), "number");
//!
//! let boxed = Value::string_object("12");
//! assert_eq!(boxed.type_of(), "object");
//! assert!(boxed.is_string_wrapper());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod json;
mod object;
mod symbol;
mod value;

pub use error::{ErrorKind, JsError, JsResult};
pub use object::{JsObject, RegExpData};
pub use symbol::Symbol;
pub use value::Value;
