//! Interest Projector CLI
//!
//! Projects yearly balances for a single set of inputs and prints them as a table

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use interest_projector::{
    projection::{ProjectionConfig, ProjectionEngine, ProjectionResult},
    ProjectionInputs,
};

#[derive(Parser)]
#[command(about = "Project compound interest growth with and without monthly contributions.")]
struct Args {
    /// Starting balance.
    #[arg(long)]
    principal: f64,

    /// Annual rate as a fraction (0.05 for 5%).
    #[arg(long, allow_hyphen_values = true)]
    rate: f64,

    /// Number of years to project.
    #[arg(long, allow_hyphen_values = true)]
    years: i64,

    /// Amount deposited at the start of every month.
    #[arg(long, default_value_t = 0.0)]
    monthly: f64,

    /// Reject non-finite inputs, out-of-range years and rates at or below -100%.
    #[arg(long)]
    strict: bool,

    /// Also write the yearly schedule to this CSV file.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let inputs = ProjectionInputs::new(args.principal, args.rate, args.years, args.monthly);
    let engine = ProjectionEngine::new(ProjectionConfig {
        validate_inputs: args.strict,
    });
    let result = engine
        .project(&inputs)
        .with_context(|| format!("invalid projection inputs {:?}", inputs))?;

    println!("Interest Projector v0.1.0");
    println!("=========================\n");
    println!("  Principal:            {:.2}", inputs.principal);
    println!("  Annual Rate:          {:.4}", inputs.annual_rate);
    println!("  Monthly Contribution: {:.2}", inputs.monthly_contribution);
    println!();

    println!(
        "{:>5} {:>18} {:>18} {:>16}",
        "Year", "WithContribution", "NoContribution", "Contributed"
    );
    println!("{}", "-".repeat(60));
    for row in result.rows() {
        println!(
            "{:>5} {:>18.0} {:>18.0} {:>16.2}",
            row.year, row.with_contribution, row.without_contribution, row.total_contributed,
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Years:                       {}", summary.years);
    println!("  Final Balance:               {:.0}", summary.final_balance);
    println!(
        "  Final Balance (no deposits): {:.0}",
        summary.final_balance_without_contribution
    );
    println!("  Total Contributed:           {:.2}", summary.total_contributed);
    println!("  Interest Earned:             {:.2}", summary.interest_earned);

    if let Some(path) = &args.output {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_schedule(&mut writer, &result)?;
        println!("\nSchedule written to: {}", path.display());
    }

    Ok(())
}

/// Write the yearly schedule as CSV with a header row
fn write_schedule<W: Write>(
    writer: &mut csv::Writer<W>,
    result: &ProjectionResult,
) -> Result<()> {
    writer.write_record(["Year", "WithContribution", "WithoutContribution", "TotalContributed"])?;
    for row in result.rows() {
        writer.write_record([
            row.year.to_string(),
            format!("{:.0}", row.with_contribution),
            format!("{:.0}", row.without_contribution),
            format!("{:.2}", row.total_contributed),
        ])?;
    }
    writer.flush()?;

    Ok(())
}
