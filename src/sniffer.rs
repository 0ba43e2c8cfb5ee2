//! Header-only image dimension probing.
//!
//! Only the first [`HEAD_SIZE`] bytes are read for PNG and GIF. JPEG stores
//! its dimensions in a Start-Of-Frame segment, so the marker stream is walked
//! from the start of the file until the first SOF marker.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::Path;

use tracing::debug;

use crate::error::{ProbeError, Result};
use crate::formats::{gif, jpeg, png};
use crate::types::{HEAD_SIZE, Head, ImageFormat, ImageHeaderInfo, Signature};

/// Determines the format and pixel dimensions of the image at `path`.
///
/// Open failures surface as [`ProbeError::Io`]; every other error means the
/// file is readable but its size cannot be determined.
pub fn probe(path: impl AsRef<Path>) -> Result<ImageHeaderInfo> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let result = probe_reader(BufReader::new(file));

    match &result {
        Ok(info) => debug!(path = %path.display(), %info, "probed image"),
        Err(e) => debug!(path = %path.display(), error = %e, "probe failed"),
    }

    result
}

/// Same as [`probe`] for any seekable source positioned at its start.
pub fn probe_reader<R: Read + Seek>(mut reader: R) -> Result<ImageHeaderInfo> {
    let head = read_head(&mut reader)?;

    let format = Signature::classify(&head)
        .format()
        .ok_or(ProbeError::UnsupportedFormat)?;

    let (width, height) = match format {
        ImageFormat::Png => png::png_dimensions(&head)?,
        ImageFormat::Gif => gif::gif_dimensions(&head),
        ImageFormat::Jpeg => jpeg::jpeg_dimensions(&mut reader)?,
    };

    if width == 0 || height == 0 {
        return Err(ProbeError::InvalidDimensions { width, height });
    }

    Ok(ImageHeaderInfo {
        width,
        height,
        format,
    })
}

fn read_head<R: Read>(reader: &mut R) -> Result<Head> {
    let mut head = [0u8; HEAD_SIZE];
    match reader.read_exact(&mut head) {
        Ok(()) => Ok(head),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(ProbeError::TruncatedHeader {
            expected: HEAD_SIZE,
        }),
        Err(e) => Err(ProbeError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_probe_reader_gif() {
        let mut data = b"GIF87a".to_vec();
        data.extend_from_slice(&[0x10, 0x00, 0x0A, 0x00]);
        data.resize(32, 0);

        let info = probe_reader(Cursor::new(data)).unwrap();
        assert_eq!(info.format, ImageFormat::Gif);
        assert_eq!((info.width, info.height), (16, 10));
    }

    #[test]
    fn test_probe_reader_short_input() {
        let data = b"GIF89a\x10\x00".to_vec();
        assert!(matches!(
            probe_reader(Cursor::new(data)),
            Err(ProbeError::TruncatedHeader { expected: 24 })
        ));
    }

    #[test]
    fn test_probe_reader_unknown_signature() {
        let data = vec![0x42; 64];
        assert!(matches!(
            probe_reader(Cursor::new(data)),
            Err(ProbeError::UnsupportedFormat)
        ));
    }

    #[test]
    fn test_probe_reader_zero_width() {
        let mut data = b"GIF89a".to_vec();
        data.extend_from_slice(&[0x00, 0x00, 0x0A, 0x00]);
        data.resize(24, 0);

        let err = probe_reader(Cursor::new(data)).unwrap_err();
        assert!(matches!(
            err,
            ProbeError::InvalidDimensions {
                width: 0,
                height: 10
            }
        ));
        assert!(err.is_undeterminable());
    }
}
