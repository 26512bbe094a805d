use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents an unsupported carrier media. For example, a JPEG or a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure to open or read an input file.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents an encoded image that does not line up with its master image
    #[error(
        "Size Mismatch: The encoded image has the dimensions {0}x{1} but the master image has {2}x{3}"
    )]
    SizeMismatch(u32, u32, u32, u32),

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No master media set")]
    MasterNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error(
        "Capacity Error: The provided input image with the dimensions {0}x{1} can carry {2} characters,
                but the message has {3} characters"
    )]
    ImageCapacityError(u32, u32, usize, usize),

    #[error("API Error: Missing message")]
    MissingMessage,
}
