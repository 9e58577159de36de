#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// “Expert” modules – still public, but considered unstable internals.
pub mod angle;
pub mod config;
pub mod hough;
pub mod skeleton;
pub mod vegetation;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{FilterOptions, RowDetector, RowParams, VotingOptions};
pub use crate::error::DetectError;
pub use crate::types::{LineSegment, PolarLine, RowResult};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, DiagnosticSink, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use row_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let bgr = vec![0u8; w * h * 3];
/// let image = ColorImageU8 { w, h, stride: 3 * w, data: &bgr };
///
/// let detector = RowDetector::new(RowParams::default());
/// let result = detector.process(image).expect("valid frame");
/// println!(
///     "target_met={} rows={} latency_ms={:.3}",
///     result.target_met,
///     result.lines.len(),
///     result.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ColorImageU8;
    pub use crate::{RowDetector, RowParams, RowResult};
}
