//! Binarization and topological thinning of the vegetation channel.
//!
//! The skeletonizer runs a morphological fixed-point iteration: each round
//! erodes the working image, re-dilates the eroded copy, and collects the
//! pixels the re-dilation could not restore. The union of those residues over
//! all rounds is the skeleton, a roughly one-pixel-wide trace of the medial
//! structure of the foreground blobs.
//!
//! Termination is guaranteed because erosion strictly shrinks the working
//! image (see [`morphology`] for the border policy); a defensive iteration
//! cap of `min(width, height)` fails safely against structuring-element or
//! image-format bugs rather than looping.

pub mod morphology;
pub mod otsu;

pub use morphology::{dilate_cross, erode_cross};
pub use otsu::{binarize, otsu_threshold};

use crate::image::GrayImageU8;

/// Skeletonization output with the facts diagnostics care about.
#[derive(Clone, Debug)]
pub struct Skeleton {
    /// Binary skeleton image (background 0, foreground 255).
    pub image: GrayImageU8,
    /// Otsu threshold chosen for the binarization step.
    pub threshold: u8,
    /// Thinning rounds executed before the working image emptied.
    pub iterations: usize,
}

/// Binarize an intensity image with Otsu's threshold and thin the result to
/// its skeleton. An all-background input yields an all-zero skeleton after
/// zero rounds; that is a valid result, not an error.
pub fn skeletonize(gray: &GrayImageU8) -> Skeleton {
    let threshold = otsu_threshold(gray);
    let mut working = binarize(gray, threshold);
    let mut skeleton = GrayImageU8::new(gray.w, gray.h);

    let cap = gray.w.min(gray.h).max(1);
    let mut iterations = 0;
    while iterations < cap && working.count_nonzero() > 0 {
        let eroded = erode_cross(&working);
        let opened = dilate_cross(&eroded);
        // residue: pixels lost to erosion that the re-dilation left behind
        for i in 0..working.data.len() {
            if working.data[i] != 0 && opened.data[i] == 0 {
                skeleton.data[i] = 255;
            }
        }
        working = eroded;
        iterations += 1;
    }

    if working.count_nonzero() > 0 {
        log::warn!(
            "skeletonize hit the {cap}-iteration cap with {} foreground pixels left",
            working.count_nonzero()
        );
    }

    Skeleton {
        image: skeleton,
        threshold,
        iterations,
    }
}
