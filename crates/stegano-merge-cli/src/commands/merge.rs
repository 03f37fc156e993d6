use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Hides the image2 inside of image1, image2 must not exceed image1 in either axis
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Carrier image, used readonly
    #[arg(long, value_name = "carrier image", required = true)]
    pub image1: PathBuf,

    /// Secret image that will be hidden in the carrier
    #[arg(long, value_name = "secret image", required = true)]
    pub image2: PathBuf,

    /// Merged image will be stored as PNG file
    #[arg(long, value_name = "output image file", required = true)]
    pub output: PathBuf,
}

impl MergeArgs {
    pub fn run(self) -> CliResult<()> {
        stegano_merge_core::commands::merge(&self.image1, &self.image2, &self.output)
    }
}
