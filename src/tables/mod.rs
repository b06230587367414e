//! Read-only lookup tables: non-life payout rates and agency incentives

mod data;
pub mod loader;

pub use data::{IncentiveRecord, IncentiveTable, PayoutRateRecord, PayoutRates, PayoutTable};
pub use loader::{
    load_incentive_table, load_incentive_table_from_reader, load_payout_table,
    load_payout_table_csv, load_payout_table_csv_from_reader, load_payout_table_from_reader,
    TableError,
};
