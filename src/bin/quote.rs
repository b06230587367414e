//! Compute a single commission quote from the command line
//!
//! Loads the payout and incentive tables from --data-dir, builds the input
//! from flags, and prints the formatted breakdown with diagnostics.

use anyhow::{bail, Context, Result};
use clap::Parser;
use commission_engine::{
    tables::{load_incentive_table, load_payout_table},
    types::{INSURERS_NONLIFE, PRODUCT_GROUPS_NONLIFE},
    CalcInput, CommissionEngine, FaGrade, InsuranceType,
};
use log::warn;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quote", about = "FA commission quote calculator")]
struct Args {
    /// Insurance category: 손보 (nonlife) or 생보 (life)
    #[arg(long, default_value = "손보")]
    insurance_type: InsuranceType,

    /// Insurer name (table key, e.g. 메리츠)
    #[arg(long, default_value = "메리츠")]
    insurer: String,

    /// Product group (e.g. 보장, 연금, 저축)
    #[arg(long, default_value = "보장")]
    product_group: String,

    /// FA grade override; defaults to the grade classified from --recognized
    #[arg(long)]
    fa_grade: Option<FaGrade>,

    /// Recognized performance (인정실적) in KRW
    #[arg(long, default_value_t = 700_000.0)]
    recognized: f64,

    /// Rate multiplier (수정률/환산률) as a factor, e.g. 1.2
    #[arg(long, default_value_t = 1.0)]
    rate_factor: f64,

    /// Monthly premium (월보험료) in KRW
    #[arg(long, default_value_t = 100_000.0)]
    monthly_premium: f64,

    /// Life persistency percentage (2~25회 통산유지율), life only
    #[arg(long)]
    life_persist: Option<f64>,

    /// Insurer award (보험사 시상) in KRW
    #[arg(long)]
    insurer_award: Option<f64>,

    /// Contract month number (위촉 차월, 1-24)
    #[arg(long, default_value_t = 1)]
    month_no: u32,

    /// Directory holding nonlife_payout.json and nonlife_sasang.json
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

/// Contract months eligible for a quote (위촉 차월 window)
fn month_in_window(month_no: u32) -> bool {
    (1..=24).contains(&month_no)
}

/// Format a KRW amount with thousands separators, rounded to whole won
fn fmt_krw(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if rounded < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // The engine itself passes months through; the boundary validates.
    if !month_in_window(args.month_no) {
        bail!("month-no must be between 1 and 24, got {}", args.month_no);
    }
    if args.insurance_type == InsuranceType::NonLife {
        if !INSURERS_NONLIFE.contains(&args.insurer.as_str()) {
            warn!("insurer '{}' is not in the carried non-life list", args.insurer);
        }
        if !PRODUCT_GROUPS_NONLIFE.contains(&args.product_group.as_str()) {
            warn!(
                "product group '{}' is not a known non-life group",
                args.product_group
            );
        }
    }

    let payout = load_payout_table(args.data_dir.join("nonlife_payout.json"))
        .context("failed to load payout table")?;
    let incentives = load_incentive_table(args.data_dir.join("nonlife_sasang.json"))
        .context("failed to load incentive table")?;

    let auto_grade = FaGrade::from_recognized(args.recognized);
    let fa_grade = args.fa_grade.unwrap_or(auto_grade);

    let input = CalcInput {
        insurance_type: args.insurance_type,
        insurer: args.insurer,
        product_group: args.product_group,
        fa_grade,
        recognized: args.recognized,
        rate_factor: args.rate_factor,
        monthly_premium: args.monthly_premium,
        life_persist_rate_pct: args.life_persist,
        insurer_award: args.insurer_award,
    };

    let engine = CommissionEngine::new(&payout, &incentives);
    let out = engine.calc(&input, args.month_no);

    println!(
        "{} / {} / {} / {} (자동 등급: {})",
        input.insurance_type.as_str(),
        input.insurer,
        input.product_group,
        fa_grade,
        auto_grade
    );
    println!();
    println!("기본수수료-초회      {:>15}", fmt_krw(out.basic_first));
    println!("기본수수료-계약관리  {:>15}", fmt_krw(out.basic_manage));
    println!("기본수수료 합계      {:>15}", fmt_krw(out.basic_total));
    println!("보험사 시상          {:>15}", fmt_krw(out.insurer_award));
    println!("직영 법인시상        {:>15}", fmt_krw(out.inca_direct));
    println!("추가시상             {:>15}", fmt_krw(out.inca_extra));
    println!("정착지원금           {:>15}", fmt_krw(out.settlement));
    println!("총 합계              {:>15}", fmt_krw(out.grand_total));

    if !out.errors.is_empty() {
        println!("\n[정보없음/에러]");
        for e in &out.errors {
            println!("  - {}", e);
        }
    }
    if !out.warnings.is_empty() {
        println!("\n[안내]");
        for w in &out.warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
