//! Assertion harness for type classification checks
//!
//! Checks compare an actual result against an expected fixture with
//! [`deep_equal`], print `[OK]`/`[FAIL]` lines grouped under named blocks,
//! and accumulate a [`CheckReport`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod equal;
pub mod harness;
pub mod outcome;
pub mod report;
pub mod writer;

pub use equal::deep_equal;
pub use harness::{CheckResult, Harness};
pub use outcome::{Outcome, Scalar};
pub use report::{CheckFailure, CheckReport};
pub use writer::{CaptureWriter, CheckWriter, StdoutWriter};
