//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output serialization)
//! - `reader` - Operation and movement-history readers

pub mod csv_format;
pub mod reader;

pub use csv_format::{
    convert_movement_record, convert_operation_record, write_movements_csv, write_summary_csv,
    MovementCsvRecord, Operation, OperationCsvRecord,
};
pub use reader::{read_history, read_movements, OperationReader};
