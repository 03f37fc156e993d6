use std::fmt;
use std::str::FromStr;

use crate::error::SteganoError;
use crate::result::Result;

/// number of bits of one color channel
pub const CHANNEL_BITS: usize = 8;

/// number of secret bits that are hidden in the low end of a carrier channel
pub const SECRET_BITS: usize = 2;

/// number of carrier bits that stay untouched in the high end of a channel
pub const CARRIER_BITS: usize = CHANNEL_BITS - SECRET_BITS;

/// One color channel written as 8 characters of `'0'` and `'1'`, most significant bit first.
///
/// ## Example of usage
/// ```rust
/// use stegano_merge_core::media::image::channel_codec::ChannelCodec;
///
/// let bits = ChannelCodec::to_binary(220);
/// assert_eq!(bits.as_str(), "11011100");
/// assert_eq!(bits.high_bits(6), "110111");
/// assert_eq!(bits.low_bits(2), "00");
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BinaryChannel(String);

impl BinaryChannel {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// the `n` most significant bits, `n` is clamped to 8
    pub fn high_bits(&self, n: usize) -> &str {
        &self.0[..n.min(CHANNEL_BITS)]
    }

    /// the `n` least significant bits, `n` is clamped to 8
    pub fn low_bits(&self, n: usize) -> &str {
        &self.0[CHANNEL_BITS - n.min(CHANNEL_BITS)..]
    }
}

impl FromStr for BinaryChannel {
    type Err = SteganoError;

    fn from_str(bits: &str) -> Result<Self> {
        ensure_bits(bits, CHANNEL_BITS)?;
        Ok(Self(bits.to_owned()))
    }
}

impl fmt::Display for BinaryChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BinaryChannel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Conversion between a color channel value and its binary string form,
/// plus the splicing rules used to hide one channel inside another.
pub struct ChannelCodec;

impl ChannelCodec {
    /// zero padded, most significant bit first
    pub fn to_binary(value: u8) -> BinaryChannel {
        BinaryChannel(format!("{value:08b}"))
    }

    /// parses exactly 8 characters of `'0'` and `'1'` as a base 2 number
    pub fn from_binary(bits: &str) -> Result<u8> {
        ensure_bits(bits, CHANNEL_BITS)?;
        u8::from_str_radix(bits, 2).map_err(|_| SteganoError::InvalidFormat(bits.to_owned()))
    }

    /// Joins the 6 high carrier bits with the 2 high secret bits.
    ///
    /// The resulting byte is `carrier_high6 << 2 | secret_high2`.
    ///
    /// ## Example of usage
    /// ```rust
    /// use stegano_merge_core::media::image::channel_codec::ChannelCodec;
    ///
    /// let merged = ChannelCodec::merge_channels("10", "111111").unwrap();
    /// assert_eq!(merged, 0b1111_1110);
    /// ```
    pub fn merge_channels(secret_msb2: &str, carrier_msb6: &str) -> Result<u8> {
        ensure_bits(secret_msb2, SECRET_BITS)?;
        ensure_bits(carrier_msb6, CARRIER_BITS)?;

        Self::from_binary(&format!("{carrier_msb6}{secret_msb2}"))
    }

    /// Moves the 2 low bits of a merged channel into the high end, the rest stays zero.
    pub fn extract_channels(merged_value: u8) -> u8 {
        let bits = Self::to_binary(merged_value);
        let restored = format!("{}{}", bits.low_bits(SECRET_BITS), "0".repeat(CARRIER_BITS));

        // 2 bits out of a valid channel plus 6 zeros, always 8 binary digits
        u8::from_str_radix(&restored, 2).unwrap_or_default()
    }
}

fn ensure_bits(bits: &str, len: usize) -> Result<()> {
    if bits.len() != len || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(SteganoError::InvalidFormat(bits.to_owned()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_every_channel_value_back_and_forth() {
        for v in 0..=u8::MAX {
            let bits = ChannelCodec::to_binary(v);
            assert_eq!(bits.as_str().len(), 8, "{v} was not padded to 8 bits");
            assert_eq!(
                ChannelCodec::from_binary(bits.as_str()).unwrap(),
                v,
                "{v} did not survive the conversion"
            );
        }
    }

    #[test]
    fn should_write_most_significant_bit_first() {
        assert_eq!(ChannelCodec::to_binary(0).as_str(), "00000000");
        assert_eq!(ChannelCodec::to_binary(1).as_str(), "00000001");
        assert_eq!(ChannelCodec::to_binary(128).as_str(), "10000000");
        assert_eq!(ChannelCodec::to_binary(255).as_str(), "11111111");
    }

    #[test]
    fn should_reject_malformed_binary_strings() {
        for bits in ["", "0", "0000000", "000000000", "0000000a", "+0000001", "0000 001"] {
            match ChannelCodec::from_binary(bits) {
                Err(SteganoError::InvalidFormat(given)) => assert_eq!(given, bits),
                other => panic!("{bits:?} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn should_reject_malformed_binary_channels() {
        assert!("1010101".parse::<BinaryChannel>().is_err());
        assert!("1010x010".parse::<BinaryChannel>().is_err());

        let bits: BinaryChannel = "10100101".parse().unwrap();
        assert_eq!(bits.to_string(), "10100101");
        assert_eq!(bits.high_bits(2), "10");
        assert_eq!(bits.low_bits(6), "100101");
    }

    #[test]
    fn should_place_carrier_bits_high_and_secret_bits_low() {
        // carrier 220 = 110111|00, secret 240 = 11|110000
        let carrier = ChannelCodec::to_binary(220);
        let secret = ChannelCodec::to_binary(240);

        let merged = ChannelCodec::merge_channels(
            secret.high_bits(SECRET_BITS),
            carrier.high_bits(CARRIER_BITS),
        )
        .unwrap();

        assert_eq!(merged, 0b1101_1111);
        assert_eq!(merged, (220 & 0b1111_1100) | (240 >> 6));
    }

    #[test]
    fn should_reject_pieces_of_wrong_length() {
        assert!(ChannelCodec::merge_channels("1", "111111").is_err());
        assert!(ChannelCodec::merge_channels("11", "11111").is_err());
        assert!(ChannelCodec::merge_channels("111111", "11").is_err());
        assert!(ChannelCodec::merge_channels("1x", "111111").is_err());
    }

    #[test]
    fn should_move_low_bits_to_the_top() {
        assert_eq!(ChannelCodec::extract_channels(0b0000_0000), 0b0000_0000);
        assert_eq!(ChannelCodec::extract_channels(0b1111_1101), 0b0100_0000);
        assert_eq!(ChannelCodec::extract_channels(0b0000_0010), 0b1000_0000);
        assert_eq!(ChannelCodec::extract_channels(0b1010_1011), 0b1100_0000);

        for v in 0..=u8::MAX {
            assert_eq!(ChannelCodec::extract_channels(v), (v & 0b11) << 6);
        }
    }

    #[test]
    fn should_keep_only_the_secret_top_bits_after_a_roundtrip() {
        for carrier in [0u8, 1, 127, 128, 200, 255] {
            for secret in 0..=u8::MAX {
                let c = ChannelCodec::to_binary(carrier);
                let s = ChannelCodec::to_binary(secret);
                let merged = ChannelCodec::merge_channels(
                    s.high_bits(SECRET_BITS),
                    c.high_bits(CARRIER_BITS),
                )
                .unwrap();

                assert_eq!(
                    ChannelCodec::extract_channels(merged),
                    secret & 0b1100_0000,
                    "carrier={carrier} secret={secret}"
                );
            }
        }
    }
}
