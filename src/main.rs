mod blocks_cmd;
mod cli;
mod config;
mod convert;
mod format_cmd;
mod logging;
mod parse_cmd;
mod year_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Blocks(args) => blocks_cmd::run(args),
        Command::Year(args) => year_cmd::run(args),
        Command::Parse(args) => parse_cmd::run(args),
        Command::Format(args) => format_cmd::run(args),
    }
}
