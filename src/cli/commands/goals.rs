//! `relcalc goals` command - goal measure conversion

use miette::{miette, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::commands::predict::print_diagnostics;
use crate::cli::OutputFormat;
use crate::core::diagnostic::has_errors;
use crate::core::goal::convert_goal;
use crate::entities::GoalMeasure;

#[derive(clap::Args, Debug)]
pub struct GoalsArgs {
    /// Measure the goal value is stated in
    #[arg(long, short = 'm')]
    pub measure: GoalMeasure,

    /// Goal value (reliability in (0,1), hazard rate in failures/hour, or MTBF hours)
    #[arg(long, short = 'v')]
    pub value: f64,

    /// Mission time in hours
    #[arg(long, short = 't')]
    pub mission_time: f64,

    /// Output format
    #[arg(long, short = 'f', default_value = "table")]
    pub format: OutputFormat,
}

pub fn run(args: GoalsArgs) -> Result<()> {
    let mut diagnostics = Vec::new();
    let (reliability, hazard_rate, mtbf) = convert_goal(
        args.measure,
        args.mission_time,
        args.value,
        &mut diagnostics,
    );
    print_diagnostics(&diagnostics);
    if has_errors(&diagnostics) {
        return Err(miette!("goal conversion failed"));
    }

    match args.format {
        OutputFormat::Table => {
            let mut builder = Builder::default();
            builder.push_record(["MEASURE", "VALUE"]);
            builder.push_record(["reliability".to_string(), format!("{:.9}", reliability)]);
            builder.push_record(["hazard-rate".to_string(), format!("{:.6e}", hazard_rate)]);
            builder.push_record(["mtbf".to_string(), format!("{:.3}", mtbf)]);
            println!("{}", builder.build().with(Style::sharp()));
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "reliability": reliability,
                    "hazard_rate": hazard_rate,
                    "mtbf": mtbf,
                })
            );
        }
        OutputFormat::Yaml => {
            println!("reliability: {}", reliability);
            println!("hazard_rate: {}", hazard_rate);
            println!("mtbf: {}", mtbf);
        }
    }

    Ok(())
}
