//! CSV format handling for operations, movement history and account output
//!
//! This module centralizes all CSV format concerns:
//! - `OperationCsvRecord`: one requested deposit/withdrawal (`type,amount`)
//! - `MovementCsvRecord`: one stored movement (`date,type,amount`)
//! - Writers for the account summary and the movement history
//!
//! All functions are pure (no file handling) for easy testing.

use crate::core::{Account, Clock};
use crate::types::{Movement, MovementKind, ReplayError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Column layout of the movement history CSV
pub const MOVEMENT_HEADERS: [&str; 3] = ["date", "type", "amount"];

/// Column layout of the account summary CSV
pub const SUMMARY_HEADERS: [&str; 4] = ["balance", "deposits", "withdrawals", "withdrawn_today"];

/// A requested account operation as read from the operations CSV
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OperationCsvRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Option<String>,
}

/// A stored movement as read from a history CSV
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MovementCsvRecord {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
}

/// A parsed operation, ready to be replayed against an account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub kind: MovementKind,
    pub amount: Decimal,
}

fn parse_kind(kind: &str) -> Result<MovementKind, String> {
    match kind.trim().to_lowercase().as_str() {
        "deposit" => Ok(MovementKind::Deposit),
        "withdrawal" => Ok(MovementKind::Withdrawal),
        _ => Err(format!("Invalid movement type: '{}'", kind)),
    }
}

fn parse_amount(amount: &str) -> Result<Decimal, String> {
    Decimal::from_str(amount.trim()).map_err(|_| format!("Invalid amount '{}'", amount))
}

/// Convert an operations CSV row into an [`Operation`]
///
/// Only the format is checked here. Business rules such as amount positivity
/// belong to the account, so `deposit,-1` converts successfully.
pub fn convert_operation_record(
    record: OperationCsvRecord,
    line: u64,
) -> Result<Operation, ReplayError> {
    let kind = parse_kind(&record.kind).map_err(|e| ReplayError::parse(Some(line), e))?;

    let amount = match record.amount {
        Some(amount) if !amount.trim().is_empty() => {
            parse_amount(&amount).map_err(|e| ReplayError::parse(Some(line), e))?
        }
        _ => {
            return Err(ReplayError::parse(
                Some(line),
                format!("{} requires an amount", kind.as_str()),
            ))
        }
    };

    Ok(Operation { kind, amount })
}

/// Convert a history CSV row into a [`Movement`]
pub fn convert_movement_record(
    record: MovementCsvRecord,
    line: u64,
) -> Result<Movement, ReplayError> {
    let date = NaiveDate::from_str(record.date.trim()).map_err(|_| {
        ReplayError::parse(Some(line), format!("Invalid date '{}'", record.date))
    })?;
    let kind = parse_kind(&record.kind).map_err(|e| ReplayError::parse(Some(line), e))?;
    let amount = parse_amount(&record.amount).map_err(|e| ReplayError::parse(Some(line), e))?;

    Ok(Movement::new(date, amount, kind))
}

/// Write a one-row account summary
///
/// Columns: balance, deposits, withdrawals, withdrawn_today. Amounts use two
/// decimal places.
pub fn write_summary_csv<C: Clock>(
    account: &Account<C>,
    output: &mut dyn Write,
) -> Result<(), ReplayError> {
    let withdrawn_today = account.total_withdrawn_on(account.today())?;
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(SUMMARY_HEADERS)?;
    writer.write_record(&[
        format!("{:.2}", account.balance()),
        account.deposit_count().to_string(),
        account.withdrawal_count().to_string(),
        format!("{:.2}", withdrawn_today),
    ])?;
    writer.flush()?;

    Ok(())
}

/// Write the movement history in insertion order
///
/// The layout matches what [`convert_movement_record`] reads back.
pub fn write_movements_csv(
    movements: &[Movement],
    output: &mut dyn Write,
) -> Result<(), ReplayError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(MOVEMENT_HEADERS)?;
    for movement in movements {
        writer.write_record(&[
            movement.date().to_string(),
            movement.kind().as_str().to_string(),
            format!("{:.2}", movement.amount()),
        ])?;
    }
    writer.flush()?;

    Ok(())
}
