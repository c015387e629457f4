/// Errors from BMP decoding and pixel queries.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a BMP file: missing 'BM' signature")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("unsupported bit depth: {0} (must be 24 or 32)")]
    UnsupportedDepth(u16),

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("truncated pixel data: needed {needed} bytes, got {actual}")]
    TruncatedPixelData { needed: usize, actual: usize },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Coarse classification of a [`BmpError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The file could not be opened or read.
    Io,
    /// The bytes are not a BMP this crate accepts.
    Format,
    /// A pixel query outside the image extent.
    Bounds,
}

impl BmpError {
    /// Which class of failure this is, for callers that discriminate
    /// without matching individual variants.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BmpError::Io(_) => ErrorKind::Io,
            BmpError::OutOfBounds { .. } => ErrorKind::Bounds,
            _ => ErrorKind::Format,
        }
    }
}
