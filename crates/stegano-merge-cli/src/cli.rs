use clap::{Parser, Subcommand};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Merge(merge::MergeArgs),
    Unmerge(unmerge::UnmergeArgs),
}

impl Commands {
    pub fn run(self) -> CliResult<()> {
        match self {
            Commands::Merge(args) => args.run(),
            Commands::Unmerge(args) => args.run(),
        }
    }
}
