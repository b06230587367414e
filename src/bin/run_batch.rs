//! Run commission quotes for a whole batch of FA inputs from CSV
//!
//! Reads one quote row per line, computes breakdowns in parallel, writes
//! per-row results to an output CSV, and prints aggregate totals.

use anyhow::{Context, Result};
use clap::Parser;
use commission_engine::{
    tables::{load_incentive_table, load_payout_table},
    CalcInput, CalcOutput, CommissionEngine, FaGrade, InsuranceType,
};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Batch commission quote runner")]
struct Args {
    /// Input CSV of quote rows
    input: PathBuf,

    /// Output CSV path for per-row breakdowns
    #[arg(long, default_value = "batch_output.csv")]
    output: PathBuf,

    /// Directory holding nonlife_payout.json and nonlife_sasang.json
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

/// Raw CSV row; fa_grade left empty means "classify from recognized"
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    insurance_type: String,
    insurer: String,
    product_group: String,
    #[serde(default)]
    fa_grade: Option<String>,
    recognized: f64,
    rate_factor: f64,
    monthly_premium: f64,
    #[serde(default)]
    life_persist_rate_pct: Option<f64>,
    #[serde(default)]
    insurer_award: Option<f64>,
    month_no: u32,
}

impl CsvRow {
    fn to_input(&self) -> Result<(CalcInput, u32)> {
        let insurance_type: InsuranceType = self
            .insurance_type
            .parse()
            .map_err(anyhow::Error::msg)?;

        let fa_grade = match self.fa_grade.as_deref().filter(|s| !s.is_empty()) {
            Some(s) => s.parse::<FaGrade>().map_err(anyhow::Error::msg)?,
            None => FaGrade::from_recognized(self.recognized),
        };

        let input = CalcInput {
            insurance_type,
            insurer: self.insurer.clone(),
            product_group: self.product_group.clone(),
            fa_grade,
            recognized: self.recognized,
            rate_factor: self.rate_factor,
            monthly_premium: self.monthly_premium,
            life_persist_rate_pct: self.life_persist_rate_pct,
            insurer_award: self.insurer_award,
        };
        Ok((input, self.month_no))
    }
}

/// Aggregated totals across all rows
#[derive(Debug, Clone, Default)]
struct Aggregate {
    rows: usize,
    rows_with_errors: usize,
    total_basic: f64,
    total_award: f64,
    total_direct: f64,
    total_extra: f64,
    total_settlement: f64,
    grand_total: f64,
}

impl Aggregate {
    fn add(&mut self, out: &CalcOutput) {
        self.rows += 1;
        if !out.is_clean() {
            self.rows_with_errors += 1;
        }
        self.total_basic += out.basic_total;
        self.total_award += out.insurer_award;
        self.total_direct += out.inca_direct;
        self.total_extra += out.inca_extra;
        self.total_settlement += out.settlement;
        self.grand_total += out.grand_total;
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();

    let payout = load_payout_table(args.data_dir.join("nonlife_payout.json"))
        .context("failed to load payout table")?;
    let incentives = load_incentive_table(args.data_dir.join("nonlife_sasang.json"))
        .context("failed to load incentive table")?;

    let mut reader = csv::Reader::from_path(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let mut quotes = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        quotes.push(row.to_input()?);
    }
    println!("Loaded {} quote rows in {:?}", quotes.len(), start.elapsed());

    let calc_start = Instant::now();
    let engine = CommissionEngine::new(&payout, &incentives);
    let results: Vec<CalcOutput> = quotes
        .par_iter()
        .map(|(input, month_no)| engine.calc(input, *month_no))
        .collect();
    println!("Calculated in {:?}", calc_start.elapsed());

    let mut aggregate = Aggregate::default();
    for out in &results {
        aggregate.add(out);
    }

    let mut file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    writeln!(
        file,
        "Insurer,ProductGroup,FaGrade,MonthNo,BasicFirst,BasicManage,BasicTotal,InsurerAward,IncaDirect,IncaExtra,Settlement,GrandTotal,Errors,Warnings"
    )?;
    for ((input, month_no), out) in quotes.iter().zip(&results) {
        writeln!(
            file,
            "{},{},{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{},{}",
            input.insurer,
            input.product_group,
            input.fa_grade,
            month_no,
            out.basic_first,
            out.basic_manage,
            out.basic_total,
            out.insurer_award,
            out.inca_direct,
            out.inca_extra,
            out.settlement,
            out.grand_total,
            out.errors.len(),
            out.warnings.len(),
        )?;
    }
    println!("Output written to {}", args.output.display());

    println!("\nBatch Summary:");
    println!("  Rows:            {}", aggregate.rows);
    println!("  Rows w/ errors:  {}", aggregate.rows_with_errors);
    println!("  Basic total:     {:.0}", aggregate.total_basic);
    println!("  Insurer awards:  {:.0}", aggregate.total_award);
    println!("  Direct incent.:  {:.0}", aggregate.total_direct);
    println!("  Extra incent.:   {:.0}", aggregate.total_extra);
    println!("  Settlement:      {:.0}", aggregate.total_settlement);
    println!("  Grand total:     {:.0}", aggregate.grand_total);

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
