//! Calculation result bundle

use serde::{Deserialize, Serialize};

/// Commission breakdown returned by the engine
///
/// Always complete and well-typed: missing lookup data zeroes the affected
/// field and appends a diagnostic instead of failing. Errors mark a required
/// payout rate that was entirely missing; warnings mark advisory notices and
/// partial incentive gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalcOutput {
    /// Missing required payout data, surfaced prominently
    pub errors: Vec<String>,

    /// Advisory notices and partial data gaps
    pub warnings: Vec<String>,

    /// First-year basic commission (기본수수료-초회)
    pub basic_first: f64,

    /// Contract-management commission (기본수수료-계약관리, total of installments)
    pub basic_manage: f64,

    /// Sum of the two basic components
    pub basic_total: f64,

    /// Insurer award, passed through from user input (보험사 시상)
    pub insurer_award: f64,

    /// Agency direct incentive (직영 법인시상)
    pub inca_direct: f64,

    /// Agency extra incentive (추가시상)
    pub inca_extra: f64,

    /// Settlement support (정착지원금)
    pub settlement: f64,

    /// Sum of all payout components
    pub grand_total: f64,
}

impl CalcOutput {
    /// True when no required payout data was missing
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
