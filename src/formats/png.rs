use crate::error::{ProbeError, Result};
use crate::types::Head;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// `\x89PNG`, enough to claim the file as PNG before the tail is checked.
pub const PNG_PREFIX: &[u8; 4] = b"\x89PNG";

/// Second half of the signature (`\r\n\x1a\n`), re-checked before trusting IHDR.
pub const PNG_MAGIC_TAIL: u32 = 0x0D0A_1A0A;

const WIDTH_OFFSET: usize = 16;
const HEIGHT_OFFSET: usize = 20;

/// Reads IHDR width and height from the head. Both are big-endian.
pub fn png_dimensions(head: &Head) -> Result<(u32, u32)> {
    let check = u32::from_be_bytes([head[4], head[5], head[6], head[7]]);
    if check != PNG_MAGIC_TAIL {
        return Err(ProbeError::CorruptSignature { format: "PNG" });
    }

    let width = be_u32_at(head, WIDTH_OFFSET);
    let height = be_u32_at(head, HEIGHT_OFFSET);

    Ok((width, height))
}

#[inline]
fn be_u32_at(head: &Head, pos: usize) -> u32 {
    u32::from_be_bytes([head[pos], head[pos + 1], head[pos + 2], head[pos + 3]])
}
