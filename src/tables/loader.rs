//! Load payout and incentive tables from JSON or CSV sources
//!
//! The payout table ships as a JSON array (and as a CSV export of the same
//! columns); the incentive table is a JSON object keyed by insurer name.
//! A missing row at calculation time is not a load error — loaders only fail
//! on unreadable or malformed sources.

use super::{IncentiveRecord, IncentiveTable, PayoutRateRecord, PayoutTable};
use log::info;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a lookup table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read table file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed CSV table: {0}")]
    Csv(#[from] csv::Error),
}

/// Load the non-life payout-rate table from a JSON array file
pub fn load_payout_table<P: AsRef<Path>>(path: P) -> Result<PayoutTable, TableError> {
    let file = File::open(path.as_ref())?;
    let table = load_payout_table_from_reader(BufReader::new(file))?;
    info!(
        "loaded {} payout rows from {}",
        table.len(),
        path.as_ref().display()
    );
    Ok(table)
}

/// Load the payout table from any JSON reader (used by tests)
pub fn load_payout_table_from_reader<R: Read>(reader: R) -> Result<PayoutTable, TableError> {
    let records: Vec<PayoutRateRecord> = serde_json::from_reader(reader)?;
    Ok(PayoutTable::from_records(records))
}

/// Load the payout table from a CSV export with a header row matching the
/// record field names
pub fn load_payout_table_csv<P: AsRef<Path>>(path: P) -> Result<PayoutTable, TableError> {
    let file = File::open(path.as_ref())?;
    let table = load_payout_table_csv_from_reader(BufReader::new(file))?;
    info!(
        "loaded {} payout rows from {}",
        table.len(),
        path.as_ref().display()
    );
    Ok(table)
}

/// Load the payout table from any CSV reader (used by tests)
pub fn load_payout_table_csv_from_reader<R: Read>(reader: R) -> Result<PayoutTable, TableError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: PayoutRateRecord = result?;
        records.push(record);
    }
    Ok(PayoutTable::from_records(records))
}

/// Load the agency incentive table from a JSON object file
pub fn load_incentive_table<P: AsRef<Path>>(path: P) -> Result<IncentiveTable, TableError> {
    let file = File::open(path.as_ref())?;
    let table = load_incentive_table_from_reader(BufReader::new(file))?;
    info!(
        "loaded {} incentive insurers from {}",
        table.len(),
        path.as_ref().display()
    );
    Ok(table)
}

/// Load the incentive table from any JSON reader (used by tests)
pub fn load_incentive_table_from_reader<R: Read>(reader: R) -> Result<IncentiveTable, TableError> {
    let records: HashMap<String, IncentiveRecord> = serde_json::from_reader(reader)?;
    Ok(IncentiveTable::from_records(records))
}
