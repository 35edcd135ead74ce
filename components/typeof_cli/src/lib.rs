//! Type classification CLI library
//!
//! Provides argument parsing, the built-in check suite, JSON inspection
//! and command dispatch for the `typeof-check` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod inspect;
pub mod runner;
pub mod suite;

pub use cli::{Cli, Command};
pub use error::{CliError, CliResult};
pub use inspect::{inspect, Inspection, ItemTypes};
pub use runner::{run, run_checks};
