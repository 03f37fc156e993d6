//! # Stegano Merge Core API
//!
//! Hides one image inside the two least significant bits of every color channel
//! of another image, and recovers it later.
//!
//! The building blocks are
//! - [`ChannelCodec`][codec] for splicing the bits of a single color channel
//! - [`PixelMerger`][merger] for merging and unmerging whole images
//! - [`Media`][media] for loading and saving images
//!
//! # Usage Examples
//!
//! ## Hide an image inside another image
//!
//! ```rust,no_run
//! stegano_merge_core::api::merge::prepare()
//!     .with_carrier("carrier.png")   // stays visible, only its 2 lowest bits change
//!     .with_secret("secret.png")     // must not exceed the carrier in either axis
//!     .with_output("merged.png")
//!     .execute()
//!     .expect("Failed to merge the secret image");
//! ```
//!
//! ## Recover the hidden image
//!
//! ```rust,no_run
//! stegano_merge_core::api::unmerge::prepare()
//!     .from_merged_image("merged.png")
//!     .with_output("secret.png")
//!     .execute()
//!     .expect("Failed to unmerge the secret image");
//! ```
//!
//! Only the 2 most significant bits of each secret channel survive, the
//! recovered image is a 4 level per channel approximation of the secret.
//!
//! [codec]: ./media/image/channel_codec/struct.ChannelCodec.html
//! [merger]: ./media/image/pixel_merger/struct.PixelMerger.html
//! [media]: ./media/struct.Media.html

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;

pub use crate::error::SteganoError;
pub use crate::media::image::{BinaryChannel, ChannelCodec, PixelMerger};
pub use crate::media::{Media, Persist};
pub use crate::result::Result;
