//! CSV readers for operations and movement history
//!
//! [`OperationReader`] streams operations one row at a time through an
//! iterator, so malformed rows can be reported and skipped without aborting
//! the whole replay. [`read_history`] loads a full movement history for
//! rehydration and fails on the first malformed row, since a partially loaded
//! history would misstate the account.
//!
//! Fatal errors (missing file, I/O) are returned from the constructors.

use crate::io::csv_format::{
    convert_movement_record, convert_operation_record, MovementCsvRecord, Operation,
    OperationCsvRecord,
};
use crate::types::{Movement, ReplayError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

fn open(path: &Path) -> Result<File, ReplayError> {
    if !path.exists() {
        return Err(ReplayError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(File::open(path)?)
}

fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input)
}

/// Streaming reader over an operations CSV (`type,amount`)
#[derive(Debug)]
pub struct OperationReader<R: Read> {
    reader: csv::Reader<R>,
    line_num: u64,
}

impl OperationReader<File> {
    /// Open an operations CSV file
    pub fn from_path(path: &Path) -> Result<Self, ReplayError> {
        Ok(OperationReader::new(open(path)?))
    }
}

impl<R: Read> OperationReader<R> {
    pub fn new(input: R) -> Self {
        OperationReader {
            reader: csv_reader(input),
            // header row
            line_num: 1,
        }
    }
}

impl<R: Read> Iterator for OperationReader<R> {
    type Item = Result<Operation, ReplayError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<OperationCsvRecord>();
        let result = deserializer.next()?;
        self.line_num += 1;

        Some(match result {
            Ok(record) => convert_operation_record(record, self.line_num),
            Err(e) => Err(ReplayError::parse(Some(self.line_num), e.to_string())),
        })
    }
}

/// Load a movement history CSV (`date,type,amount`) from any reader
pub fn read_movements<R: Read>(input: R) -> Result<Vec<Movement>, ReplayError> {
    let mut reader = csv_reader(input);
    let mut movements = Vec::new();

    for (index, result) in reader.deserialize::<MovementCsvRecord>().enumerate() {
        // +2: one-based, after the header row
        let line = index as u64 + 2;
        let record = result.map_err(|e| ReplayError::parse(Some(line), e.to_string()))?;
        movements.push(convert_movement_record(record, line)?);
    }

    Ok(movements)
}

/// Load a movement history CSV file
pub fn read_history(path: &Path) -> Result<Vec<Movement>, ReplayError> {
    read_movements(open(path)?)
}
