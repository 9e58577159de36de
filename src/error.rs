use thiserror::Error;

/// Errors surfaced by the detector.
///
/// Only violations of the input-image contract are fatal; data-dependent
/// sparsity (an empty skeleton, an exhausted threshold sweep) is reported as
/// a status on the result instead.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("invalid input image {width}x{height}: {reason}")]
    InvalidInput {
        width: usize,
        height: usize,
        reason: String,
    },
}
