use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use terma_calendar::AcademicYear;

use crate::cli::YearArgs;
use crate::config::TermaConfig;
use crate::convert;

/// JSON document emitted by `terma year --json`.
#[derive(Serialize)]
struct YearOutput {
    start_year: i32,
    start: String,
    end: String,
}

/// Run the `year` subcommand.
pub fn run(args: YearArgs) -> Result<()> {
    let config = TermaConfig::load(&args.config)?;
    let reference = convert::resolve_date(args.date.as_deref())?;
    let year = AcademicYear::of(reference);
    info!(start_year = year.start_year(), "resolved academic year");

    if args.json || config.output.json {
        let output = YearOutput {
            start_year: year.start_year(),
            start: year.start().format("%Y-%m-%d").to_string(),
            end: year.end().format("%Y-%m-%d").to_string(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("failed to serialize academic year")?
        );
    } else {
        let formatter = convert::build_date_formatter(&config.display)?;
        println!("start  {}", formatter.format(year.start()));
        println!("end    {}", formatter.format(year.end()));
    }

    Ok(())
}
