//! Type classification CLI
//!
//! Entry point: sets up logging, parses arguments and delegates to
//! [`typeof_cli::run`].

use clap::Parser;
use tracing_subscriber::EnvFilter;
use typeof_cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    // Log level comes from RUST_LOG unless --verbose asks for debug output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
