use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Extracts a secret previously merged into an image
#[derive(Args, Debug)]
pub struct UnmergeArgs {
    /// Image that contains a merged secret
    #[arg(long, value_name = "merged image", required = true)]
    pub image: PathBuf,

    /// Recovered secret will be stored as PNG file
    #[arg(long, value_name = "output image file", required = true)]
    pub output: PathBuf,
}

impl UnmergeArgs {
    pub fn run(self) -> CliResult<()> {
        stegano_merge_core::commands::unmerge(&self.image, &self.output)
    }
}
