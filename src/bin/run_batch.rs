//! Run projections for every scenario in a CSV file
//!
//! Usage: cargo run --bin run_batch -- scenarios.csv [--output results.csv] [--strict]

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use interest_projector::{projection::ProjectionConfig, ScenarioRunner};

#[derive(Parser)]
#[command(about = "Project every scenario in a CSV of principal,annual_rate,years,monthly_contribution rows.")]
struct Args {
    /// Scenario CSV with a header row.
    scenarios: PathBuf,

    /// Reject invalid scenarios instead of projecting them permissively.
    #[arg(long)]
    strict: bool,

    /// Write one summary row per scenario to this CSV file.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let scenarios = ScenarioRunner::from_csv_path(&args.scenarios)
        .with_context(|| format!("failed to load {}", args.scenarios.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::with_config(ProjectionConfig {
        validate_inputs: args.strict,
    });

    let proj_start = Instant::now();
    let results = runner.run_batch(&scenarios);
    println!("Projections complete in {:?}\n", proj_start.elapsed());

    let mut writer = match &args.output {
        Some(path) => {
            let mut w = csv::Writer::from_path(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            w.write_record([
                "Scenario",
                "Years",
                "FinalBalance",
                "FinalBalanceWithoutContribution",
                "TotalContributed",
                "InterestEarned",
                "Error",
            ])?;
            Some(w)
        }
        None => None,
    };

    let mut failures = 0;
    for (i, (inputs, result)) in scenarios.iter().zip(&results).enumerate() {
        let scenario = i + 1;
        match result {
            Ok(result) => {
                let s = result.summary();
                println!(
                    "  #{:<4} P={:<12.2} r={:<8.4} y={:<4} m={:<10.2} -> {:>14.0} ({:.0} without deposits)",
                    scenario,
                    inputs.principal,
                    inputs.annual_rate,
                    inputs.years,
                    inputs.monthly_contribution,
                    s.final_balance,
                    s.final_balance_without_contribution,
                );
                if let Some(w) = writer.as_mut() {
                    w.write_record([
                        scenario.to_string(),
                        s.years.to_string(),
                        format!("{:.0}", s.final_balance),
                        format!("{:.0}", s.final_balance_without_contribution),
                        format!("{:.2}", s.total_contributed),
                        format!("{:.2}", s.interest_earned),
                        String::new(),
                    ])?;
                }
            }
            Err(e) => {
                failures += 1;
                println!("  #{:<4} rejected: {}", scenario, e);
                if let Some(w) = writer.as_mut() {
                    w.write_record([
                        scenario.to_string(),
                        String::new(),
                        String::new(),
                        String::new(),
                        String::new(),
                        String::new(),
                        e.to_string(),
                    ])?;
                }
            }
        }
    }

    if let Some(mut w) = writer {
        w.flush()?;
    }
    if let Some(path) = &args.output {
        println!("\nOutput written to {}", path.display());
    }

    println!("\n{} projected, {} rejected", results.len() - failures, failures);
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
