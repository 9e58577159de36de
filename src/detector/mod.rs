//! Row detector orchestrating the candidate-extraction pipeline.
//!
//! Overview
//! - Reduces the color frame to an excess-green vegetation channel.
//! - Binarizes with Otsu's threshold and thins the mask to a one-pixel
//!   skeleton by iterated morphological erosion.
//! - Votes the skeleton into a polar-line accumulator and sweeps the vote
//!   threshold from strict to lenient until the filtered candidate set
//!   reaches the configured row count.
//! - Filters candidates for near-vertical orientation and collapses
//!   near-duplicates onto the strongest representative.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and the demo.
//! - `pipeline` – the main [`RowDetector`] implementation.
//! - [`filter`] – geometric plausibility and duplicate filtering.
//!
//! Key ideas
//! - Line orientations are π-periodic; candidates always carry
//!   `theta ∈ [0, π)` and the near-vertical band wraps around 0.
//! - A frame with too little structure is not an error: the sweep reports
//!   `target_met = false` with the best rows it could find.

pub mod filter;
pub mod params;
mod pipeline;

pub use params::{FilterOptions, RowParams, VotingOptions};
pub use pipeline::RowDetector;
