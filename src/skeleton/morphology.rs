//! Binary erosion and dilation with a 3×3 cross structuring element.
//!
//! Pixels outside the image are background for both operations. That choice
//! makes erosion strictly shrinking on every iteration (border foreground is
//! always peeled), which is what guarantees the thinning fixed point in
//! [`super::skeletonize`] is reached.

use crate::image::GrayImageU8;

const FOREGROUND: u8 = 255;

/// A pixel survives erosion when it and its 4-neighborhood are all foreground.
pub fn erode_cross(src: &GrayImageU8) -> GrayImageU8 {
    let (w, h) = (src.w, src.h);
    let mut out = GrayImageU8::new(w, h);
    for y in 0..h {
        for x in 0..w {
            if src.get(x, y) == 0 {
                continue;
            }
            let interior = x > 0 && x + 1 < w && y > 0 && y + 1 < h;
            if interior
                && src.get(x - 1, y) != 0
                && src.get(x + 1, y) != 0
                && src.get(x, y - 1) != 0
                && src.get(x, y + 1) != 0
            {
                out.set(x, y, FOREGROUND);
            }
        }
    }
    out
}

/// A pixel is foreground after dilation when any pixel under the cross is.
pub fn dilate_cross(src: &GrayImageU8) -> GrayImageU8 {
    let (w, h) = (src.w, src.h);
    let mut out = GrayImageU8::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let hit = src.get(x, y) != 0
                || (x > 0 && src.get(x - 1, y) != 0)
                || (x + 1 < w && src.get(x + 1, y) != 0)
                || (y > 0 && src.get(x, y - 1) != 0)
                || (y + 1 < h && src.get(x, y + 1) != 0);
            if hit {
                out.set(x, y, FOREGROUND);
            }
        }
    }
    out
}
