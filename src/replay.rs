//! Replay pipeline
//!
//! Drives a single account through a CSV of operations:
//! 1. Builds the account, rehydrating stored history when one is supplied
//! 2. Streams operations through `OperationReader`
//! 3. Applies each one via the validated `deposit`/`withdraw` path
//! 4. Writes the requested output view
//!
//! Malformed rows and rejected operations are logged and counted, and the
//! replay continues. Only missing files and I/O failures are fatal.

use crate::core::{Account, Clock};
use crate::io::{
    read_history, write_movements_csv, write_summary_csv, Operation, OperationReader,
};
use crate::types::{AccountError, MovementKind, ReplayError};
use clap::ValueEnum;
use rust_decimal::Decimal;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// Output view written after a replay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    /// One row: balance, deposits, withdrawals, withdrawn_today
    #[default]
    Summary,
    /// Full movement history as `date,type,amount`
    Movements,
}

/// Inputs of a replay run
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// Operations CSV
    pub input: PathBuf,
    pub initial_balance: Decimal,
    /// History CSV rehydrated before replaying
    pub history: Option<PathBuf>,
    pub output: OutputKind,
}

/// Counters describing how a replay went
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub applied: usize,
    pub rejected: usize,
    pub skipped: usize,
}

/// Apply one operation through the validated path
pub fn apply_operation<C: Clock>(
    account: &mut Account<C>,
    operation: Operation,
) -> Result<(), AccountError> {
    match operation.kind {
        MovementKind::Deposit => account.deposit(operation.amount),
        MovementKind::Withdrawal => account.withdraw(operation.amount),
    }
}

/// Replay operations from any reader against an existing account
pub fn replay_operations<C: Clock, R: Read>(
    account: &mut Account<C>,
    operations: OperationReader<R>,
) -> ReplayReport {
    let mut report = ReplayReport::default();

    for result in operations {
        match result {
            Ok(operation) => match apply_operation(account, operation) {
                Ok(()) => report.applied += 1,
                Err(e) => {
                    warn!(
                        kind = operation.kind.as_str(),
                        amount = %operation.amount,
                        error = %e,
                        "operation rejected"
                    );
                    report.rejected += 1;
                }
            },
            Err(e) => {
                warn!(error = %e, "skipping malformed operation");
                report.skipped += 1;
            }
        }
    }

    report
}

/// Run a full replay and write the selected view to `output`
///
/// Returns the report together with the final account so callers can
/// inspect state beyond what the output view shows.
pub fn replay<C: Clock>(
    config: &ReplayConfig,
    clock: C,
    output: &mut dyn Write,
) -> Result<(ReplayReport, Account<C>), ReplayError> {
    let mut account = match &config.history {
        Some(path) => {
            let movements = read_history(path)?;
            info!(
                path = %path.display(),
                movements = movements.len(),
                "rehydrating account history"
            );
            Account::rehydrated(config.initial_balance, movements, clock)
        }
        None => Account::with_clock(config.initial_balance, clock),
    };

    let operations = OperationReader::from_path(&config.input)?;
    let report = replay_operations(&mut account, operations);

    info!(
        applied = report.applied,
        rejected = report.rejected,
        skipped = report.skipped,
        balance = %account.balance(),
        "replay finished"
    );

    match config.output {
        OutputKind::Summary => write_summary_csv(&account, output)?,
        OutputKind::Movements => write_movements_csv(account.movements(), output)?,
    }

    Ok((report, account))
}
