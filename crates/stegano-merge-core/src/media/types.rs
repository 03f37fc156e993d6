use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::{ImageError, ImageFormat};
pub use image::{Rgb, RgbImage};
use log::{debug, error};

use crate::error::SteganoError;
use crate::result::Result;

use super::Persist;

/// an image media, always normalized to 3 color channels with 8 bit each
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    image: RgbImage,
}

impl Media {
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    /// Decodes a PNG or JPEG file, alpha channels and palettes are dropped on the way.
    ///
    /// The format is sniffed from the file content, the extension is only a fallback.
    pub fn from_file(f: &Path) -> Result<Self> {
        let mut reader = image::io::Reader::open(f)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| {
                error!("Error opening file {f:?}: {e}");
                SteganoError::ReadError { source: e }
            })?;

        let format = match reader.format() {
            Some(format @ (ImageFormat::Png | ImageFormat::Jpeg)) => format,
            Some(other) => {
                error!("Unsupported image format {other:?} in {f:?}");
                return Err(SteganoError::UnsupportedMedia);
            }
            None => format_from_extension(f)?,
        };
        reader.set_format(format);

        let image = reader.decode().map_err(|e| {
            error!("Error decoding image {f:?}: {e}");
            match e {
                ImageError::IoError(source) => SteganoError::ReadError { source },
                _ => SteganoError::InvalidImageMedia,
            }
        })?;
        debug!(
            "loaded {f:?} as {}x{} {:?}",
            image.width(),
            image.height(),
            image.color()
        );

        Ok(Self::from_image(image.to_rgb8()))
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// always encodes as PNG, any lossy format would destroy the low bits
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                SteganoError::ImageEncodingError
            })
    }
}

fn format_from_extension(f: &Path) -> Result<ImageFormat> {
    let Some(ext) = f.extension().and_then(|e| e.to_str()) else {
        return Err(SteganoError::UnsupportedMedia);
    };

    match ext.to_lowercase().as_str() {
        "png" => Ok(ImageFormat::Png),
        "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
        _ => Err(SteganoError::UnsupportedMedia),
    }
}

impl From<RgbImage> for Media {
    fn from(image: RgbImage) -> Self {
        Self::from_image(image)
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer)?;

        writer
            .flush()
            .map_err(|source| SteganoError::WriteError { source })
    }
}
