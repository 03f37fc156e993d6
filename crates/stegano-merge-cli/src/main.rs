use clap::Parser;

use stegano_merge_core::SteganoError;

mod cli;
mod commands;

pub type CliResult<T> = Result<T, SteganoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = cli::CliArgs::parse();
    log::debug!("{args:?}");

    args.command.run()
}
