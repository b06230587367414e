//! End-to-end quote tests against the shipped sample tables

use approx::assert_relative_eq;
use commission_engine::{
    tables::{load_incentive_table, load_payout_table},
    CalcInput, CommissionEngine, FaGrade, InsuranceType,
};
use std::path::Path;

fn load_engine_tables() -> (
    commission_engine::PayoutTable,
    commission_engine::IncentiveTable,
) {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let payout = load_payout_table(data_dir.join("nonlife_payout.json")).unwrap();
    let incentives = load_incentive_table(data_dir.join("nonlife_sasang.json")).unwrap();
    (payout, incentives)
}

fn meritz_excellent() -> CalcInput {
    CalcInput {
        insurance_type: InsuranceType::NonLife,
        insurer: "메리츠".to_string(),
        product_group: "보장".to_string(),
        fa_grade: FaGrade::Excellent,
        recognized: 700_000.0,
        rate_factor: 1.0,
        monthly_premium: 100_000.0,
        life_persist_rate_pct: None,
        insurer_award: Some(0.0),
    }
}

#[test]
fn meritz_excellent_month_one() {
    let (payout, incentives) = load_engine_tables();
    let engine = CommissionEngine::new(&payout, &incentives);

    let out = engine.calc(&meritz_excellent(), 1);
    assert!(out.errors.is_empty());

    // Base premium 700,000 at the 우수/보장 row (276.66 / 70.67)
    assert_relative_eq!(out.basic_first, 700_000.0 * 2.7666, epsilon = 1e-6);
    assert_relative_eq!(out.basic_manage, 700_000.0 * 0.7067, epsilon = 1e-6);

    // Month 1, 700k falls in the 300k-1.0M settlement band (×1.5)
    assert_relative_eq!(out.settlement, 1_050_000.0);

    // Incentives from the 메리츠 row: 5% and 2% of the monthly premium
    assert_relative_eq!(out.inca_direct, 5_000.0);
    assert_relative_eq!(out.inca_extra, 2_000.0);

    assert_eq!(out.insurer_award, 0.0);
    assert_relative_eq!(
        out.grand_total,
        out.basic_total + out.inca_direct + out.inca_extra + 1_050_000.0
    );
}

#[test]
fn auto_grade_matches_recognized_band() {
    // 700,000 sits in the [700k, 1.0M) band → 우수
    assert_eq!(FaGrade::from_recognized(700_000.0), FaGrade::Excellent);

    let (payout, incentives) = load_engine_tables();
    let engine = CommissionEngine::new(&payout, &incentives);

    let mut input = meritz_excellent();
    input.fa_grade = FaGrade::from_recognized(input.recognized);
    let out = engine.calc(&input, 1);
    assert!(out.errors.is_empty());
}

#[test]
fn missing_payout_row_keeps_other_components() {
    let (payout, incentives) = load_engine_tables();
    let engine = CommissionEngine::new(&payout, &incentives);

    // 현대 has no 연금 rows in the sample table
    let input = CalcInput {
        insurer: "현대".to_string(),
        product_group: "연금".to_string(),
        ..meritz_excellent()
    };
    let out = engine.calc(&input, 1);

    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.basic_total, 0.0);
    assert_relative_eq!(out.inca_direct, 4_000.0);
    assert_relative_eq!(out.settlement, 1_050_000.0);
    assert_relative_eq!(
        out.grand_total,
        out.inca_direct + out.inca_extra + out.settlement
    );
}

#[test]
fn insurer_missing_from_incentive_table() {
    let (payout, incentives) = load_engine_tables();
    let engine = CommissionEngine::new(&payout, &incentives);

    // 라이나 is carried by the agency but absent from the sample incentive table
    let input = CalcInput {
        insurer: "라이나".to_string(),
        ..meritz_excellent()
    };
    let out = engine.calc(&input, 1);

    assert!(out.warnings.iter().any(|w| w.contains("시상표")));
    assert_eq!(out.inca_direct, 0.0);
    assert_eq!(out.inca_extra, 0.0);
}

#[test]
fn settlement_window_against_sample_tables() {
    let (payout, incentives) = load_engine_tables();
    let engine = CommissionEngine::new(&payout, &incentives);

    // Second-year months pay recognized flat
    let out = engine.calc(&meritz_excellent(), 13);
    assert_relative_eq!(out.settlement, 700_000.0);

    // Beyond month 24 settlement drops out entirely
    let out = engine.calc(&meritz_excellent(), 25);
    assert_eq!(out.settlement, 0.0);
}

#[test]
fn capped_settlement_for_signature_grade() {
    let (payout, incentives) = load_engine_tables();
    let engine = CommissionEngine::new(&payout, &incentives);

    let input = CalcInput {
        fa_grade: FaGrade::Signature,
        recognized: 2_500_000.0,
        ..meritz_excellent()
    };
    let out = engine.calc(&input, 1);

    // 2.5M × 2.0 hits the 5M ceiling exactly
    assert_relative_eq!(out.settlement, 5_000_000.0);
    // Top tiers carry the advisory persistency warning
    assert!(out.warnings.iter().any(|w| w.contains("통산유지율")));
    assert!(out.errors.is_empty());
}
