use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;

mod document;

pub use document::{decode_document, Decoded, DocumentArgs, Kind};

#[derive(Debug, PartialEq, Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,
    #[command(subcommand)]
    pub commands: Commands,
}

#[derive(Debug, PartialEq, Subcommand)]
pub enum Commands {
    /// Decode a document and report whether it matches the catalog model
    Check(DocumentArgs),
    /// Decode a document and write it back out in canonical form
    Normalize(DocumentArgs),
}

pub fn run_cli_command(cli: Cli) -> Result<()> {
    match cli.commands {
        Commands::Check(args) => document::execute_check_cmd(args)?,
        Commands::Normalize(args) => document::execute_normalize_cmd(args, &cli.config)?,
    }

    Ok(())
}
