use image::{ImageBuffer, Rgb, RgbImage};
use log::{debug, trace};

use super::channel_codec::{ChannelCodec, CARRIER_BITS, SECRET_BITS};
use crate::error::SteganoError;
use crate::result::Result;

/// Whole image merge and unmerge, one color channel at a time.
///
/// ## Example of usage
/// ```rust
/// use image::{Rgb, RgbImage};
/// use stegano_merge_core::media::image::PixelMerger;
///
/// let carrier = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
/// let secret = RgbImage::from_pixel(1, 1, Rgb([0, 0, 0]));
///
/// let merged = PixelMerger::merge(&carrier, &secret).expect("secret fits into carrier");
/// assert_eq!(merged.dimensions(), (2, 2));
/// assert_eq!(merged.get_pixel(1, 1), &Rgb([252, 252, 252]));
///
/// let unmerged = PixelMerger::unmerge(&merged);
/// assert_eq!(unmerged.get_pixel(0, 0), &Rgb([0, 0, 0]));
/// ```
pub struct PixelMerger;

impl PixelMerger {
    /// stands in for the secret where the secret image does not reach
    pub const BLACK_PIXEL: Rgb<u8> = Rgb([0, 0, 0]);

    /// Hides `secret` inside of `carrier` and returns a new image of the carrier's size.
    ///
    /// The secret must not exceed the carrier in either axis.
    pub fn merge(carrier: &RgbImage, secret: &RgbImage) -> Result<RgbImage> {
        let (width, height) = carrier.dimensions();
        let (secret_width, secret_height) = secret.dimensions();
        if secret_width > width || secret_height > height {
            return Err(SteganoError::SizeMismatch {
                carrier: (width, height),
                secret: (secret_width, secret_height),
            });
        }
        debug!("merging {secret_width}x{secret_height} secret into {width}x{height} carrier");

        let mut merged = RgbImage::new(width, height);
        for (x, y, pixel) in merged.enumerate_pixels_mut() {
            let secret_pixel = if x < secret_width && y < secret_height {
                *secret.get_pixel(x, y)
            } else {
                Self::BLACK_PIXEL
            };
            *pixel = Self::merge_pixel(*carrier.get_pixel(x, y), secret_pixel)?;
        }

        Ok(merged)
    }

    /// Recovers the hidden image, only the 2 top bits of each channel survive.
    pub fn unmerge(merged: &RgbImage) -> RgbImage {
        let (width, height) = merged.dimensions();
        debug!("unmerging {width}x{height} image");

        let unmerged = ImageBuffer::from_fn(width, height, |x, y| {
            Self::unmerge_pixel(*merged.get_pixel(x, y))
        });
        trace!("unmerged pixels: {:?}", unmerged.as_raw());

        unmerged
    }

    pub fn merge_pixel(carrier: Rgb<u8>, secret: Rgb<u8>) -> Result<Rgb<u8>> {
        let mut merged = Rgb([0; 3]);
        for ((m, c), s) in merged.0.iter_mut().zip(carrier.0).zip(secret.0) {
            let c = ChannelCodec::to_binary(c);
            let s = ChannelCodec::to_binary(s);
            *m = ChannelCodec::merge_channels(s.high_bits(SECRET_BITS), c.high_bits(CARRIER_BITS))?;
        }

        Ok(merged)
    }

    pub fn unmerge_pixel(merged: Rgb<u8>) -> Rgb<u8> {
        Rgb(merged.0.map(ChannelCodec::extract_channels))
    }
}
