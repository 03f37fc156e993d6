use std::path::{Path, PathBuf};

use log::debug;

use crate::media::image::PixelMerger;
use crate::media::{Media, Persist};
use crate::SteganoError;

pub fn prepare() -> UnmergeApi {
    UnmergeApi::default()
}

#[derive(Default, Debug)]
pub struct UnmergeApi {
    merged_image: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl UnmergeApi {
    /// This is the image that contains a previously merged secret
    pub fn from_merged_image(mut self, merged_image: impl AsRef<Path>) -> Self {
        self.merged_image = Some(merged_image.as_ref().to_path_buf());
        self
    }

    /// The recovered secret will be stored as PNG in this file
    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Execute the unmerge process and blocks until it is finished
    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(merged_image) = self.merged_image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };

        let media = Media::from_file(&merged_image)?;
        let unmerged = PixelMerger::unmerge(media.image());
        Media::from_image(unmerged).save_as(&output)?;
        debug!("unmerged {merged_image:?} into {output:?}");

        Ok(())
    }
}
