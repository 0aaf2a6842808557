//! `relcalc allocate` command - reliability apportionment over a record file

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::commands::predict::print_diagnostics;
use crate::cli::OutputFormat;
use crate::core::allocation::{allocate, foo_weight};
use crate::entities::{AllocationMethod, AllocationRecord, ApportionmentResult};

#[derive(clap::Args, Debug)]
pub struct AllocateArgs {
    /// YAML file with the child allocation records
    pub records: PathBuf,

    /// Apportionment method
    #[arg(long, short = 'm')]
    pub method: AllocationMethod,

    /// Parent goal (hazard rate for arinc/foo, reliability otherwise)
    #[arg(long, short = 'g')]
    pub goal: f64,

    /// Mission time override in hours
    #[arg(long, short = 't')]
    pub mission_time: Option<f64>,

    /// Output format
    #[arg(long, short = 'f', default_value = "table")]
    pub format: OutputFormat,
}

pub fn run(args: AllocateArgs) -> Result<()> {
    let text = fs::read_to_string(&args.records)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading {}", args.records.display()))?;
    let mut records: Vec<AllocationRecord> = serde_yml::from_str(&text)
        .into_diagnostic()
        .wrap_err_with(|| format!("parsing {}", args.records.display()))?;

    if let Some(mission_time) = args.mission_time {
        for record in &mut records {
            record.mission_time = mission_time;
        }
    }

    // Equal apportionment spreads the goal uniformly across the included
    // children; the FOO pre-pass sums the sibling scores.
    let included = records.iter().filter(|r| r.included).count();
    if args.method == AllocationMethod::Equal && included > 0 {
        let weight = 1.0 / included as f64;
        for record in &mut records {
            record.weight_factor = weight;
        }
    }
    let cumulative_weight: f64 = records.iter().map(foo_weight).sum();

    let mut results: Vec<(i32, ApportionmentResult)> = Vec::with_capacity(records.len());
    for record in &records {
        let (result, diagnostics) = allocate(args.method, args.goal, cumulative_weight, record);
        print_diagnostics(&diagnostics);
        results.push((record.hardware_id, result));
    }

    match args.format {
        OutputFormat::Table => {
            let mut builder = Builder::default();
            builder.push_record(["ID", "WEIGHT", "PERCENT", "HR ALLOC", "MTBF ALLOC", "R ALLOC"]);
            for (hardware_id, result) in &results {
                builder.push_record([
                    hardware_id.to_string(),
                    format!("{:.4}", result.weight_factor),
                    format!("{:.4}", result.percent_weight_factor),
                    format!("{:.6e}", result.hazard_rate_alloc),
                    format!("{:.3}", result.mtbf_alloc),
                    format!("{:.6}", result.reliability_alloc),
                ]);
            }
            println!("{}", builder.build().with(Style::sharp()));
            println!(
                "{}",
                style(format!("{} method over {} records", args.method, records.len())).dim()
            );
        }
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = results
                .iter()
                .map(|(id, r)| {
                    serde_json::json!({
                        "hardware_id": id,
                        "weight_factor": r.weight_factor,
                        "percent_weight_factor": r.percent_weight_factor,
                        "hazard_rate_alloc": r.hazard_rate_alloc,
                        "mtbf_alloc": r.mtbf_alloc,
                        "reliability_alloc": r.reliability_alloc,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&rows).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            let rows: Vec<ApportionmentResult> = results.iter().map(|(_, r)| *r).collect();
            print!("{}", serde_yml::to_string(&rows).into_diagnostic()?);
        }
    }

    Ok(())
}
