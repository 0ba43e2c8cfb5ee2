use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::formats::{gif, jpeg, png};

/// Number of leading bytes read for format classification.
pub const HEAD_SIZE: usize = 24;

pub type Head = [u8; HEAD_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Gif,
    Jpeg,
}

impl ImageFormat {
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Jpeg => "JPEG",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Format classification decided once from the head bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    Png,
    Gif,
    Jpeg,
    Unknown,
}

impl Signature {
    pub fn classify(head: &[u8]) -> Self {
        if head.starts_with(png::PNG_PREFIX) {
            Signature::Png
        } else if gif::is_gif_signature(head) {
            Signature::Gif
        } else if head.starts_with(&jpeg::JPEG_SOI) {
            Signature::Jpeg
        } else {
            Signature::Unknown
        }
    }

    pub fn format(&self) -> Option<ImageFormat> {
        match self {
            Signature::Png => Some(ImageFormat::Png),
            Signature::Gif => Some(ImageFormat::Gif),
            Signature::Jpeg => Some(ImageFormat::Jpeg),
            Signature::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageHeaderInfo {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

impl fmt::Display for ImageHeaderInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}x{}", self.format, self.width, self.height)
    }
}

/// Visible editor area, in the editor's layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

/// One image reference written by the document compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub start: usize,
    pub end: usize,
    pub file: PathBuf,
}

/// An image reference whose size could be determined, ready to be placed
/// over the `start..end` text range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub start: usize,
    pub end: usize,
    pub file: PathBuf,
    pub info: ImageHeaderInfo,
    pub size: DisplaySize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file)?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
            if let Some(column) = self.column {
                write!(f, ":{}", column)?;
            }
        }
        Ok(())
    }
}
