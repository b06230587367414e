//! Commission calculation engine
//!
//! Stateless and side-effect-free: borrows the two lookup tables and turns
//! one [`CalcInput`] plus a contract month number into a [`CalcOutput`].
//! Missing data never aborts a calculation — the affected component is
//! zeroed and a diagnostic accumulated.

use super::persistency::persistency_multiplier;
use super::settlement::settlement_support;
use super::{CalcInput, CalcOutput};
use crate::tables::{IncentiveTable, PayoutTable};
use crate::types::InsuranceType;
use log::debug;

/// Convert a table percentage to a multiplier: 276.66 → 2.7666
fn pct_to_multiplier(pct: f64) -> f64 {
    pct / 100.0
}

/// Commission engine over borrowed, read-only lookup tables
///
/// Cheap to construct; safe to share across threads since it holds only
/// shared references and `calc` takes `&self`.
#[derive(Debug, Clone, Copy)]
pub struct CommissionEngine<'a> {
    payout: &'a PayoutTable,
    incentives: &'a IncentiveTable,
}

impl<'a> CommissionEngine<'a> {
    pub fn new(payout: &'a PayoutTable, incentives: &'a IncentiveTable) -> Self {
        Self { payout, incentives }
    }

    /// Compute the full commission breakdown for one input
    ///
    /// `month_no` is the contract month (위촉 차월, 1-24 expected) driving
    /// settlement support. Out-of-range months are not rejected; they fall
    /// through the settlement formula to zero.
    pub fn calc(&self, input: &CalcInput, month_no: u32) -> CalcOutput {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        // 노블레스/시그니처 eligibility (combined-category 25th-month
        // persistency ≥ 90%) is not modeled; surface it as advisory only.
        if input.fa_grade.has_persistency_condition() {
            warnings.push(
                "노블레스/시그니처 등급은 손보+생보 합산 25회차 통산유지율 90% 이상 시 적용(안내)."
                    .to_string(),
            );
        }

        let base_premium = input.recognized * input.rate_factor;

        let rates = match input.insurance_type {
            InsuranceType::NonLife => {
                let rates =
                    self.payout
                        .lookup(&input.insurer, &input.product_group, input.fa_grade);
                if rates.is_none() {
                    debug!(
                        "payout miss: insurer={} group={} grade={}",
                        input.insurer, input.product_group, input.fa_grade
                    );
                    errors.push("손보 지급률 정보없음(보험사/상품군/등급 조합).".to_string());
                }
                rates
            }
            InsuranceType::Life => {
                // Life payout table is not wired up in this version
                errors.push(
                    "생보 지급률표(보험사/상품/등급) 연결이 아직 필요합니다. 현재는 정보없음 처리."
                        .to_string(),
                );
                None
            }
        };

        let life_mult = match input.insurance_type {
            InsuranceType::Life => persistency_multiplier(input.life_persist_rate_pct),
            InsuranceType::NonLife => 1.0,
        };

        // Persistency scales only the first-year component
        let basic_first = rates
            .map(|r| base_premium * pct_to_multiplier(r.first_pct) * life_mult)
            .unwrap_or(0.0);
        let basic_manage = rates
            .map(|r| base_premium * pct_to_multiplier(r.renewal_pct))
            .unwrap_or(0.0);
        let basic_total = basic_first + basic_manage;

        let insurer_award = input.insurer_award.unwrap_or(0.0).max(0.0);

        let mut inca_direct = 0.0;
        let mut inca_extra = 0.0;
        match self.incentives.lookup(&input.insurer) {
            None => {
                warnings.push(
                    "인카 시상표에서 보험사 정보를 찾지 못했습니다(직영/추가 시상: 정보없음)."
                        .to_string(),
                );
            }
            Some(rec) => {
                match rec.direct_pct {
                    Some(pct) => inca_direct = input.monthly_premium * pct_to_multiplier(pct),
                    None => warnings.push("직영시상: 정보없음".to_string()),
                }
                match rec.extra_pct {
                    Some(pct) => inca_extra = input.monthly_premium * pct_to_multiplier(pct),
                    None => warnings.push("추가시상: 정보없음".to_string()),
                }
            }
        }

        let settlement = settlement_support(month_no, input.recognized);

        let grand_total = basic_total + insurer_award + inca_direct + inca_extra + settlement;

        CalcOutput {
            errors,
            warnings,
            basic_first,
            basic_manage,
            basic_total,
            insurer_award,
            inca_direct,
            inca_extra,
            settlement,
            grand_total,
        }
    }
}
