//! Lookup-table record structures for payout rates and agency incentives

use crate::types::FaGrade;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the non-life payout-rate table
///
/// Percentages are expressed as hundredths: `first_pct` of 276.66 means
/// the first-year commission is 2.7666× the base premium.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutRateRecord {
    pub insurer: String,
    pub product_group: String,
    pub fa_grade: String,
    pub first_pct: f64,
    pub renewal_pct: f64,
}

/// Resolved payout percentages for one (insurer, product group, grade) key
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoutRates {
    /// First-year payout percentage (e.g. 276.66)
    pub first_pct: f64,
    /// Renewal/contract-management payout percentage (e.g. 70.67)
    pub renewal_pct: f64,
}

/// Non-life payout-rate table, read-only after construction
///
/// Absence of a key is a valid, expected state: the engine reports it as a
/// diagnostic and contributes zero, it is not a load failure.
#[derive(Debug, Clone, Default)]
pub struct PayoutTable {
    records: Vec<PayoutRateRecord>,
}

impl PayoutTable {
    /// Build from loaded records
    pub fn from_records(records: Vec<PayoutRateRecord>) -> Self {
        Self { records }
    }

    /// Look up payout percentages by (insurer, product group, grade)
    pub fn lookup(&self, insurer: &str, product_group: &str, grade: FaGrade) -> Option<PayoutRates> {
        self.records
            .iter()
            .find(|r| {
                r.insurer == insurer
                    && r.product_group == product_group
                    && r.fa_grade == grade.as_str()
            })
            .map(|r| PayoutRates {
                first_pct: r.first_pct,
                renewal_pct: r.renewal_pct,
            })
    }

    /// Number of loaded rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Agency incentive percentages for one insurer
///
/// Either percentage may be absent; the engine reports each gap
/// independently and contributes zero for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncentiveRecord {
    /// Direct (직영) incentive percentage of monthly premium
    pub direct_pct: Option<f64>,
    /// Extra (추가) incentive percentage of monthly premium
    pub extra_pct: Option<f64>,
}

/// Agency incentive table keyed by insurer name
#[derive(Debug, Clone, Default)]
pub struct IncentiveTable {
    records: HashMap<String, IncentiveRecord>,
}

impl IncentiveTable {
    /// Build from a loaded insurer → record mapping
    pub fn from_records(records: HashMap<String, IncentiveRecord>) -> Self {
        Self { records }
    }

    /// Look up the incentive record for an insurer
    pub fn lookup(&self, insurer: &str) -> Option<&IncentiveRecord> {
        self.records.get(insurer)
    }

    /// Number of insurers in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
