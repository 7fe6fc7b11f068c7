use thiserror::Error;

/// Families of failures the codec can report
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ErrorKind {
    Config,
    Bounds,
    Capacity,
    Compression,
    Format,
    Io,
}

#[derive(Error, Debug)]
pub enum BlipError {
    /// A channel is set to derive its value by XOR, but no channel is preserved to XOR against
    #[error("Config Error: no preserve byte available for XOR")]
    NoXorSource,

    /// No channel is set to overwrite, so there is no room for any data in a pixel
    #[error("Config Error: no channel available for data")]
    NoDataChannel,

    #[error("Config Error: width must be defined and greater than 0")]
    InvalidWidth,

    #[error("Config Error: no embed regions provided")]
    MissingRegions,

    #[error("Config Error: no embed carrier image provided")]
    CarrierNotSet,

    #[error("Config Error: no payload provided")]
    PayloadNotSet,

    #[error("Config Error: no target file set")]
    TargetNotSet,

    /// Represents a region whose corners are swapped, e.g. `x1 > x2`
    #[error("Bounds Error: invalid region coordinates ({x1}..={x2}, {y1}..={y2})")]
    InvalidRegion { x1: u32, x2: u32, y1: u32, y2: u32 },

    /// Represents a region that reaches outside of the image
    #[error(
        "Bounds Error: region ({x1}..={x2}, {y1}..={y2}) is not within the image boundaries of {width}x{height}"
    )]
    RegionOutOfBounds {
        x1: u32,
        x2: u32,
        y1: u32,
        y2: u32,
        width: u32,
        height: u32,
    },

    #[error("Capacity Error: insufficient region area to store provided data, need {needed} pixels but only {available} available")]
    InsufficientRegionArea { needed: u64, available: u64 },

    #[error("Capacity Error: an image of {width}x{height} exceeds the maximum dimension of {max}")]
    DimensionsExceeded { width: u64, height: u64, max: u32 },

    #[error("Compression error")]
    CompressionError { source: std::io::Error },

    #[error("Decompression error")]
    DecompressionError { source: std::io::Error },

    #[error("Format Error: hex data has an odd length of {0}")]
    OddHexLength(usize),

    #[error("Format Error: invalid hex digit {digit:?} at position {position}")]
    InvalidHexDigit { digit: char, position: usize },

    /// Represents an image that cannot be opened or decoded. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl BlipError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlipError::NoXorSource
            | BlipError::NoDataChannel
            | BlipError::InvalidWidth
            | BlipError::MissingRegions
            | BlipError::CarrierNotSet
            | BlipError::PayloadNotSet
            | BlipError::TargetNotSet => ErrorKind::Config,
            BlipError::InvalidRegion { .. } | BlipError::RegionOutOfBounds { .. } => {
                ErrorKind::Bounds
            }
            BlipError::InsufficientRegionArea { .. } | BlipError::DimensionsExceeded { .. } => {
                ErrorKind::Capacity
            }
            BlipError::CompressionError { .. } | BlipError::DecompressionError { .. } => {
                ErrorKind::Compression
            }
            BlipError::OddHexLength(_) | BlipError::InvalidHexDigit { .. } => ErrorKind::Format,
            BlipError::InvalidImageMedia
            | BlipError::ImageEncodingError
            | BlipError::ReadError { .. }
            | BlipError::WriteError { .. }
            | BlipError::IoError(_) => ErrorKind::Io,
        }
    }
}
