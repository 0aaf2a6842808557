//! `relcalc predict` command - hazard rate prediction over a record file

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::OutputFormat;
use crate::core::diagnostic::Diagnostic;
use crate::core::{calculate, calculate_dormant, check_overstress, StressLimits};
use crate::entities::PartRecord;

#[derive(clap::Args, Debug)]
pub struct PredictArgs {
    /// YAML file with a list of hardware records
    pub records: PathBuf,

    /// YAML file overriding the default derating limits
    #[arg(long)]
    pub limits: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', default_value = "table")]
    pub format: OutputFormat,
}

pub fn run(args: PredictArgs) -> Result<()> {
    let text = fs::read_to_string(&args.records)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading {}", args.records.display()))?;
    let mut records: Vec<PartRecord> = serde_yml::from_str(&text)
        .into_diagnostic()
        .wrap_err_with(|| format!("parsing {}", args.records.display()))?;

    let limits = match &args.limits {
        Some(path) => {
            let text = fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("reading {}", path.display()))?;
            serde_yml::from_str(&text)
                .into_diagnostic()
                .wrap_err_with(|| format!("parsing {}", path.display()))?
        }
        None => StressLimits::default(),
    };

    let mut diagnostics = Vec::new();
    for record in &mut records {
        let mut diags = calculate(record);
        diags.extend(calculate_dormant(record));
        check_overstress(&limits, record);
        diagnostics.extend(diags);
    }

    print_diagnostics(&diagnostics);

    match args.format {
        OutputFormat::Table => print_table(&records),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&records).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&records).into_diagnostic()?);
        }
    }

    Ok(())
}

pub(crate) fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        if diag.is_error() {
            eprintln!("{}", style(diag).red());
        } else {
            eprintln!("{}", style(diag).yellow());
        }
    }
}

fn print_table(records: &[PartRecord]) {
    let mut builder = Builder::default();
    builder.push_record([
        "ID",
        "CATEGORY",
        "HR ACTIVE",
        "HR DORMANT",
        "OVERSTRESS",
    ]);
    for record in records {
        builder.push_record([
            record.hardware_id.to_string(),
            record.category.to_string(),
            format!("{:.6e}", record.hazard_rate_active),
            format!("{:.6e}", record.hazard_rate_dormant),
            if record.overstress {
                "yes".to_string()
            } else {
                "no".to_string()
            },
        ]);
    }
    println!("{}", builder.build().with(Style::sharp()));

    for record in records {
        if record.overstress {
            eprintln!(
                "{}",
                style(format!(
                    "hardware ID {} is overstressed:\n{}",
                    record.hardware_id, record.reason
                ))
                .red()
            );
        }
    }
}
