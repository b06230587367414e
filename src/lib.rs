//! Commission Engine - payout calculator for FA insurance sales
//!
//! This library provides:
//! - Grade classification from recognized performance (eight ordered tiers)
//! - Basic commission from the non-life payout-rate table
//! - Agency direct/extra incentives from the per-insurer incentive table
//! - Settlement support over the first 24 contract months, capped
//! - Table loading from JSON and CSV sources
//!
//! The engine is a pure function over immutable inputs and read-only
//! tables: missing data degrades to zero-valued components plus
//! diagnostics, never a failure.

pub mod calc;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use calc::{
    persistency_multiplier, settlement_support, CalcInput, CalcOutput, CommissionEngine,
    SETTLEMENT_CAP,
};
pub use tables::{IncentiveRecord, IncentiveTable, PayoutRateRecord, PayoutTable, TableError};
pub use types::{FaGrade, InsuranceType};
