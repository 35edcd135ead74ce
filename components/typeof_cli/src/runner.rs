//! Command dispatch

use crate::cli::{Cli, Command};
use crate::error::{CliError, CliResult};
use crate::inspect::inspect;
use crate::suite::{run_suite, BLOCKS};
use check_harness::{CaptureWriter, CheckReport, CheckWriter, Harness, StdoutWriter};
use tracing::info;

/// Run the check suite, optionally restricted to one block
pub fn run_checks(block: Option<&str>, writer: Box<dyn CheckWriter>) -> CliResult<CheckReport> {
    let mut harness = Harness::with_writer(writer);
    if let Some(name) = block {
        if !BLOCKS.contains(&name) {
            return Err(CliError::UnknownBlock(name.to_string()));
        }
        harness = harness.with_block_filter(name);
    }

    run_suite(&mut harness)?;
    let report = harness.finish();
    info!(passed = report.passed, failed = report.failed, "suite complete");
    Ok(report)
}

/// Execute the parsed command line, printing results to stdout
pub fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Command::Check { block, as_json } => {
            let report = if *as_json {
                let report = run_checks(block.as_deref(), Box::new(CaptureWriter::new()))?;
                println!("{}", report.to_json()?);
                report
            } else {
                run_checks(block.as_deref(), Box::new(StdoutWriter))?
            };

            if report.is_success() {
                Ok(())
            } else {
                Err(CliError::ChecksFailed {
                    failed: report.failed,
                    total: report.total,
                })
            }
        }
        Command::Inspect { input, as_json } => {
            let inspection = inspect(input)?;
            if *as_json {
                println!("{}", serde_json::to_string_pretty(&inspection)?);
            } else {
                println!("{}", inspection);
            }
            Ok(())
        }
    }
}
