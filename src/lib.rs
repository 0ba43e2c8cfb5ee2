pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod formats;
pub mod image_map;
pub mod layout;
pub mod options;
pub mod sniffer;
pub mod types;

pub use error::{MapError, OptionsError, ProbeError};
pub use image_map::ImageFileMap;
pub use options::PreviewOptions;
pub use sniffer::{probe, probe_reader};
pub use types::{
    DisplaySize, ImageFormat, ImageHeaderInfo, ImageRef, Preview, Signature, SourceLocation,
    Viewport,
};
