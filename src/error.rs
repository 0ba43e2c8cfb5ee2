use std::io;
use thiserror::Error;

/// Errors that can occur when probing an image header
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("File too short: fewer than {expected} header bytes")]
    TruncatedHeader { expected: usize },

    #[error("Unsupported or unrecognized image format")]
    UnsupportedFormat,

    #[error("Corrupt {format} signature")]
    CorruptSignature { format: &'static str },

    #[error("Malformed JPEG stream: no SOF marker found")]
    MalformedStream,

    #[error("Invalid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

impl ProbeError {
    /// True when the file was readable but its size cannot be determined.
    ///
    /// Callers skip such images; `Io` failures are reported separately.
    pub fn is_undeterminable(&self) -> bool {
        !matches!(self, ProbeError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;

/// Errors raised while loading an image-file map
#[derive(Error, Debug)]
pub enum MapError {
    #[error("I/O error reading image map: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid image map: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum OptionsError {
    #[error("Viewport fraction must be in (0, 1], got {0}")]
    InvalidFraction(f64),

    #[error("Viewport dimensions must be positive, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
}
