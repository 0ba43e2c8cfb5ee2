use crate::types::Head;

pub const GIF87A_SIGNATURE: &[u8; 6] = b"GIF87a";
pub const GIF89A_SIGNATURE: &[u8; 6] = b"GIF89a";

#[inline]
pub fn is_gif_signature(head: &[u8]) -> bool {
    head.starts_with(GIF87A_SIGNATURE) || head.starts_with(GIF89A_SIGNATURE)
}

/// Logical screen width and height, little-endian at offsets 6 and 8.
pub fn gif_dimensions(head: &Head) -> (u32, u32) {
    let width = u16::from_le_bytes([head[6], head[7]]);
    let height = u16::from_le_bytes([head[8], head[9]]);
    (width as u32, height as u32)
}
