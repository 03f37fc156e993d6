use std::path::{Path, PathBuf};

use log::debug;

use crate::media::image::PixelMerger;
use crate::media::{Media, Persist};
use crate::SteganoError;

pub fn prepare() -> MergeApi {
    MergeApi::default()
}

#[derive(Default, Debug)]
pub struct MergeApi {
    carrier: Option<PathBuf>,
    secret: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl MergeApi {
    /// This is the image that visibly carries the secret, used readonly
    pub fn with_carrier<A: AsRef<Path>>(mut self, carrier: A) -> Self {
        self.carrier = Some(carrier.as_ref().to_path_buf());
        self
    }

    /// This is the image that gets hidden, it must not exceed the carrier in either axis
    pub fn with_secret<A: AsRef<Path>>(mut self, secret: A) -> Self {
        self.secret = Some(secret.as_ref().to_path_buf());
        self
    }

    /// The merged image will be stored as PNG in this file
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Execute the merge process and blocks until it is finished
    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(carrier) = self.carrier else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(secret) = self.secret else {
            return Err(SteganoError::SecretNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };

        let carrier_media = Media::from_file(&carrier)?;
        let secret_media = Media::from_file(&secret)?;

        let merged = PixelMerger::merge(carrier_media.image(), secret_media.image())?;
        Media::from_image(merged).save_as(&output)?;
        debug!("merged {secret:?} into {carrier:?}, written to {output:?}");

        Ok(())
    }
}
