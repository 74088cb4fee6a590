use anyhow::{bail, Result};

use terma_format::{camel_case_to_words, format_number, format_percent};

use crate::cli::FormatArgs;
use crate::config::TermaConfig;
use crate::convert;

/// Run the `format` subcommand.
pub fn run(args: FormatArgs) -> Result<()> {
    if args.date.is_none()
        && args.number.is_none()
        && args.percent.is_none()
        && args.label.is_none()
    {
        bail!("nothing to format: pass --date, --number, --percent, or --label");
    }

    let config = TermaConfig::load(&args.config)?;

    if let Some(date) = &args.date {
        // Unparseable dates render as the "Invalid date" placeholder
        // rather than failing the command, matching the display layer.
        let formatter = convert::build_date_formatter(&config.display)?;
        println!("{}", formatter.format(date.as_str()));
    }
    if let Some(number) = args.number {
        println!("{}", format_number(number));
    }
    if let Some(fraction) = args.percent {
        println!("{}", format_percent(fraction));
    }
    if let Some(label) = &args.label {
        println!("{}", camel_case_to_words(label));
    }

    Ok(())
}
