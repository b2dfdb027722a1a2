//! Wallet Engine CLI
//!
//! Replays a CSV of deposits and withdrawals against a single account and
//! prints the result to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv
//! cargo run -- --initial-balance 5000 --today 2024-05-10 operations.csv
//! cargo run -- --history history.csv --output movements operations.csv > history.next.csv
//! ```
//!
//! Rejected operations are logged to stderr (see `RUST_LOG`) and do not stop
//! the replay.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, etc.)

use std::process;
use wallet_engine::cli;

fn main() {
    let args = cli::parse_args();
    cli::init_logging();

    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
