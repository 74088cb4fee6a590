use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Terma academic-year reporting calendar.
#[derive(Parser)]
#[command(
    name = "terma",
    version,
    about = "Academic-year reporting calendar toolkit"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List the 13 reporting block start dates of an academic year.
    Blocks(BlocksArgs),
    /// Show the academic year containing a date.
    Year(YearArgs),
    /// Normalize a raw date input and print its canonical forms.
    Parse(ParseArgs),
    /// Render dates, numbers, percentages, or field labels for display.
    Format(FormatArgs),
}

/// Arguments for the `blocks` subcommand.
#[derive(clap::Args)]
pub struct BlocksArgs {
    /// Reference date (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "terma.toml")]
    pub config: PathBuf,

    /// Emit JSON instead of formatted text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Reference date (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "terma.toml")]
    pub config: PathBuf,

    /// Emit JSON instead of formatted text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `parse` subcommand.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// Raw input: YYYY-MM-DD, or "YYYY-MM-DD HH:MM" (quote the space).
    pub input: String,

    /// Treat the input as a backend UTC timestamp with offset suffix.
    #[arg(long)]
    pub backend: bool,

    /// Emit JSON instead of formatted text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `format` subcommand.
#[derive(clap::Args)]
pub struct FormatArgs {
    /// Date input to render in the configured style.
    #[arg(long)]
    pub date: Option<String>,

    /// Number to render with en-US grouping.
    #[arg(long)]
    pub number: Option<f64>,

    /// Fraction to render as a percentage (0.5 -> 50%).
    #[arg(long)]
    pub percent: Option<f64>,

    /// camelCase identifier to render as a label.
    #[arg(long)]
    pub label: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "terma.toml")]
    pub config: PathBuf,
}
