//! Calculation input bundle

use crate::types::{FaGrade, InsuranceType};
use serde::{Deserialize, Serialize};

/// Everything the engine needs for one commission calculation
///
/// Built fresh per invocation; the engine never mutates it. Amounts are in
/// KRW. Negative amounts and out-of-range percentages are not rejected here —
/// they pass through the formulas, matching the form boundary's behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcInput {
    /// Insurance category (non-life or life)
    pub insurance_type: InsuranceType,

    /// Insurer name, a key into both lookup tables
    pub insurer: String,

    /// Product group within the insurer's payout table (e.g. 보장/연금/저축)
    pub product_group: String,

    /// FA grade tier; callers usually derive it via
    /// [`FaGrade::from_recognized`] and let the user override
    pub fa_grade: FaGrade,

    /// Recognized performance (인정실적) in KRW
    pub recognized: f64,

    /// Rate multiplier (수정률/환산률) as a factor, not a percentage:
    /// 1.2 means 120%
    pub rate_factor: f64,

    /// Monthly premium (월보험료) in KRW, the incentive base
    pub monthly_premium: f64,

    /// 2nd-25th installment persistency percentage (0-100), life first-year
    /// commission only; absent means fully qualifying
    #[serde(default)]
    pub life_persist_rate_pct: Option<f64>,

    /// Insurer award (보험사 시상) entered directly by the user, in KRW
    #[serde(default)]
    pub insurer_award: Option<f64>,
}
