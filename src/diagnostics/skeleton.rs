use serde::Serialize;

/// Report of the binarization + thinning stage.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkeletonStage {
    pub elapsed_ms: f64,
    /// Otsu threshold chosen for binarization.
    pub otsu_threshold: u8,
    /// Thinning rounds executed before the working image emptied.
    pub iterations: usize,
    /// Foreground pixels in the final skeleton.
    pub foreground_pixels: usize,
}
