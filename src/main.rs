use anyhow::Result;
use clap::Parser;

use netfun::{cli, logger};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    logger::initialize_logger(&cli.config)?;

    cli::run_cli_command(cli)?;

    Ok(())
}
