use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use terma_calendar::{year_block_starts, AcademicYear};

use crate::cli::BlocksArgs;
use crate::config::TermaConfig;
use crate::convert;

/// JSON document emitted by `terma blocks --json`.
#[derive(Serialize)]
struct BlocksOutput {
    start_year: i32,
    block_starts: Vec<String>,
}

/// Run the `blocks` subcommand.
pub fn run(args: BlocksArgs) -> Result<()> {
    let config = TermaConfig::load(&args.config)?;
    let reference = convert::resolve_date(args.date.as_deref())?;
    let year = AcademicYear::of(reference);
    let blocks = year_block_starts(reference);
    info!(
        start_year = year.start_year(),
        n_blocks = blocks.len(),
        "computed block starts"
    );

    if args.json || config.output.json {
        let output = BlocksOutput {
            start_year: year.start_year(),
            block_starts: blocks
                .iter()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("failed to serialize block starts")?
        );
    } else {
        let formatter = convert::build_date_formatter(&config.display)?;
        println!("academic year {}", year.start_year());
        for (i, start) in blocks.iter().enumerate() {
            println!("block {i:>2}  {}", formatter.format(*start));
        }
    }

    Ok(())
}
