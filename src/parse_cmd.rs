use anyhow::{Context, Result};
use serde::Serialize;

use terma_datetime::{get_date, parse_backend_date, CalendarDate};
use terma_format::format_date_time;

use crate::cli::ParseArgs;

/// JSON document emitted by `terma parse --json`.
#[derive(Serialize)]
struct ParsedOutput {
    iso_date: String,
    display: String,
    utc: String,
}

/// Run the `parse` subcommand.
pub fn run(args: ParseArgs) -> Result<()> {
    let date: CalendarDate = if args.backend {
        parse_backend_date(&args.input)
            .with_context(|| format!("invalid backend timestamp {:?}", args.input))?
    } else {
        get_date(args.input.as_str())
            .with_context(|| format!("unparseable date input {:?}", args.input))?
    };

    if args.json {
        let output = ParsedOutput {
            iso_date: date.iso_date(),
            display: format_date_time(date),
            utc: date.to_utc().to_rfc3339(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("failed to serialize parsed date")?
        );
    } else {
        println!("iso date  {}", date.iso_date());
        println!("display   {}", format_date_time(date));
        println!("utc       {}", date.to_utc().to_rfc3339());
    }

    Ok(())
}
