pub mod channel_codec;
pub mod pixel_merger;

pub use channel_codec::{BinaryChannel, ChannelCodec};
pub use pixel_merger::PixelMerger;
