use crate::types::{DisplaySize, Viewport};

/// Scales `width x height` down so it fits within `fraction` of the viewport
/// in both dimensions, preserving aspect ratio. Never scales up.
///
/// Width is clamped first, then height is clamped against the already
/// narrowed size.
pub fn fit_to_viewport(width: u32, height: u32, viewport: Viewport, fraction: f64) -> DisplaySize {
    let max_width = viewport.width * fraction;
    let max_height = viewport.height * fraction;

    let mut w = width as f64;
    let mut h = height as f64;

    if w > max_width {
        let m = max_width / w;
        h *= m;
        w = max_width;
    }

    if h > max_height {
        let m = max_height / h;
        w *= m;
        h = max_height;
    }

    DisplaySize {
        width: w,
        height: h,
    }
}
