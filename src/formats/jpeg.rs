use std::io::{self, Read, Seek, SeekFrom};

use tracing::trace;

use crate::error::{ProbeError, Result};

pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

const MARKER_PREFIX: u8 = 0xFF;
const LENGTH_FIELD_SIZE: u16 = 2;

/// SOF0..SOF15. The first marker in this range ends the walk, including
/// DHT (0xC4), JPG (0xC8) and DAC (0xCC).
#[inline]
pub fn is_sof_marker(marker: u8) -> bool {
    matches!(marker, 0xC0..=0xCF)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    /// Skip the previous segment's payload, then read the next byte.
    SeekMarker { skip: u16 },
    /// Consume 0xFF fill bytes until the marker type shows up.
    SkipPadding,
    ReadSegmentLength { marker: u8 },
    CheckSof { marker: u8, length: u16 },
    ExtractDimensions,
}

/// Walks the marker segments of a JPEG stream and returns `(width, height)`
/// from the first SOF segment.
///
/// The reader may be positioned anywhere; the walk starts right after the
/// SOI marker at offset 2. Every read failure, a non-SOF segment length
/// below 2, or running past the step budget yields
/// [`ProbeError::MalformedStream`].
pub fn jpeg_dimensions<R: Read + Seek>(reader: &mut R) -> Result<(u32, u32)> {
    let stream_len = reader.seek(SeekFrom::End(0)).map_err(malformed)?;
    reader
        .seek(SeekFrom::Start(JPEG_SOI.len() as u64))
        .map_err(malformed)?;

    // Every step but CheckSof consumes at least one byte.
    let max_steps = stream_len.saturating_mul(2).saturating_add(4);
    let mut state = WalkState::SeekMarker { skip: 0 };
    let mut steps = 0u64;

    loop {
        steps += 1;
        if steps > max_steps {
            return Err(ProbeError::MalformedStream);
        }

        state = match state {
            WalkState::SeekMarker { skip } => {
                if skip > 0 {
                    reader
                        .seek(SeekFrom::Current(skip as i64))
                        .map_err(malformed)?;
                }
                match read_u8(reader)? {
                    MARKER_PREFIX => WalkState::SkipPadding,
                    marker => WalkState::ReadSegmentLength { marker },
                }
            }
            WalkState::SkipPadding => match read_u8(reader)? {
                MARKER_PREFIX => WalkState::SkipPadding,
                marker => WalkState::ReadSegmentLength { marker },
            },
            WalkState::ReadSegmentLength { marker } => {
                let length = read_be_u16(reader)?;
                WalkState::CheckSof { marker, length }
            }
            WalkState::CheckSof { marker, length } => {
                trace!(marker, length, "jpeg segment");
                if is_sof_marker(marker) {
                    // SOF length is not used; dimensions follow at fixed offsets.
                    WalkState::ExtractDimensions
                } else if length < LENGTH_FIELD_SIZE {
                    return Err(ProbeError::MalformedStream);
                } else {
                    WalkState::SeekMarker {
                        skip: length - LENGTH_FIELD_SIZE,
                    }
                }
            }
            WalkState::ExtractDimensions => {
                let _precision = read_u8(reader)?;
                let height = read_be_u16(reader)?;
                let width = read_be_u16(reader)?;
                return Ok((width as u32, height as u32));
            }
        };
    }
}

fn malformed(_: io::Error) -> ProbeError {
    ProbeError::MalformedStream
}

#[inline]
fn read_u8<R: Read>(reader: &mut R) -> Result<u8> {
    let mut buf = [0u8; 1];
    reader.read_exact(&mut buf).map_err(malformed)?;
    Ok(buf[0])
}

#[inline]
fn read_be_u16<R: Read>(reader: &mut R) -> Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf).map_err(malformed)?;
    Ok(u16::from_be_bytes(buf))
}
