use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents an unsupported media. For example, a movie file or a file without extension
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a secret image that does not fit into the carrier image
    #[error(
        "Size mismatch: secret image must not exceed carrier image dimensions in either axis. The carrier is {}x{} but the secret is {}x{}",
        carrier.0,
        carrier.1,
        secret.0,
        secret.1
    )]
    SizeMismatch {
        carrier: (u32, u32),
        secret: (u32, u32),
    },

    /// Represents a malformed binary channel, anything that is not a string of '0' and '1' of the expected length
    #[error("Invalid binary channel format: {0:?}")]
    InvalidFormat(String),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No secret media set")]
    SecretNotSet,

    #[error("No target file set")]
    TargetNotSet,
}
