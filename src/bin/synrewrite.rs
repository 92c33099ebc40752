//! synrewrite CLI binary.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use synrewrite::cli::args::*;
use synrewrite::cli::commands::*;

fn main() {
    // Parse command line arguments using clap
    let args = SynrewriteArgs::parse();

    // RUST_LOG wins; otherwise the level follows -v / -q
    let level = match args.verbosity() {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
