// CLI module
// Command-line interface, argument parsing and logging setup

mod args;

pub use args::CliArgs;

use crate::core::{FixedClock, SystemClock};
use crate::replay::{replay, ReplayReport};
use crate::types::ReplayError;
use clap::Parser;
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints a message and exits the
/// process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the tracing subscriber
///
/// Call once per process; a second call panics.
///
/// Logs go to stderr so stdout stays pure CSV. The filter defaults to
/// `wallet_engine=info` and can be overridden with `RUST_LOG`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wallet_engine=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run a replay for the parsed arguments, writing the result to `output`
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<ReplayReport, ReplayError> {
    let config = args.to_replay_config();

    let report = match args.today {
        Some(date) => replay(&config, FixedClock::new(date), output)?.0,
        None => replay(&config, SystemClock, output)?.0,
    };

    Ok(report)
}
