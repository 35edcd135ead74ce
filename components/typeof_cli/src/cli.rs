//! Command-line arguments

use clap::{Parser, Subcommand};

/// Classify JavaScript values by type and run the type check suite
#[derive(Parser, Debug)]
#[command(name = "typeof-check", version, about)]
pub struct Cli {
    /// Log debug events (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Run the built-in check suite
    Check {
        /// Only run the block with this name
        #[arg(short, long)]
        block: Option<String>,

        /// Print the report as JSON instead of check lines
        #[arg(long = "json")]
        as_json: bool,
    },
    /// Classify the values of a JSON document (an array is inspected element-wise)
    Inspect {
        /// JSON text
        input: String,

        /// Print the result as JSON
        #[arg(long = "json")]
        as_json: bool,
    },
}
