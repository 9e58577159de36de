//! Vegetation channel extraction.
//!
//! Reduces a BGR frame to a single channel that maximizes crop/soil contrast
//! using the excess-green index `2G − R − B`. The sum is computed in `i32`
//! and clamped to `[0, 255]`: saturation keeps "more green" monotone in the
//! output, where 8-bit wraparound would fold the brightest vegetation back
//! to near-zero and invert the downstream binarization.

use crate::image::{ColorImageU8, GrayImageU8};

/// Per-pixel excess-green index of a color frame. Pure function; the input
/// is never touched.
pub fn excess_green(image: &ColorImageU8) -> GrayImageU8 {
    let mut out = GrayImageU8::new(image.w, image.h);
    for y in 0..image.h {
        let dst = out.row_mut(y);
        for (x, px) in dst.iter_mut().enumerate() {
            let [b, g, r] = image.bgr(x, y);
            let v = 2 * i32::from(g) - i32::from(r) - i32::from(b);
            *px = v.clamp(0, 255) as u8;
        }
    }
    out
}
