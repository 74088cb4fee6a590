//! Shared helpers mapping CLI and TOML settings onto library types.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};

use terma_datetime::parse_date;
use terma_format::{DateFormatter, DateStyle};

use crate::config::DisplayConfig;

/// Resolves an optional CLI date argument, defaulting to today's local
/// date.
pub fn resolve_date(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(text) => parse_date(text).with_context(|| format!("invalid --date {text:?}")),
        None => Ok(Local::now().date_naive()),
    }
}

/// Builds a [`DateFormatter`] from the `[display]` config section.
pub fn build_date_formatter(display: &DisplayConfig) -> Result<DateFormatter> {
    let style = match display.style.as_str() {
        "long" if display.with_time => DateStyle::LongWithTime,
        "long" => DateStyle::Long,
        "short" => DateStyle::Short,
        other => bail!("unknown display style {other:?} (expected \"long\" or \"short\")"),
    };
    Ok(DateFormatter::new(style))
}
