//! Parameter types configuring the detector stages.
//!
//! This module groups knobs for the vote accumulator, the adaptive threshold
//! sweep, and the candidate filter. Defaults are tuned for field images with
//! a handful of visible rows; for other crops start with the vote-threshold
//! range and the target row count.

use serde::Deserialize;

/// Detector-wide parameters controlling the pipeline.
#[derive(Clone, Debug, Deserialize)]
pub struct RowParams {
    /// Accumulator resolutions and the threshold sweep range.
    pub voting: VotingOptions,
    /// Geometric plausibility and duplicate suppression.
    pub filter: FilterOptions,
    /// Number of rows the sweep tries to reach before stopping early. Also
    /// bounds how many segments one invocation returns.
    pub target_row_count: usize,
}

impl Default for RowParams {
    fn default() -> Self {
        Self {
            voting: VotingOptions::default(),
            filter: FilterOptions::default(),
            target_row_count: 4,
        }
    }
}

/// Vote accumulator and threshold-sweep configuration.
///
/// The sweep starts strict at `vote_threshold_max` and relaxes by
/// `vote_threshold_step` per pass, never dropping below
/// `vote_threshold_min`. A strict threshold keeps only strongly supported
/// lines; the sweep finds the tightest value that still yields the target
/// row count.
#[derive(Clone, Debug, Deserialize)]
pub struct VotingOptions {
    /// Rho bin width of the accumulator (pixels).
    pub rho_resolution_px: f32,
    /// Theta bin width of the accumulator (radians).
    pub theta_resolution_rad: f32,
    pub vote_threshold_max: u32,
    pub vote_threshold_min: u32,
    /// Decrement per sweep pass; a zero here is treated as one.
    pub vote_threshold_step: u32,
}

impl Default for VotingOptions {
    fn default() -> Self {
        Self {
            rho_resolution_px: 1.0,
            theta_resolution_rad: (6.0f32).to_radians(),
            vote_threshold_max: 60,
            vote_threshold_min: 10,
            vote_threshold_step: 1,
        }
    }
}

/// Candidate filter configuration.
///
/// - `angle_thresh_rad`: half-width of the accepted near-vertical band;
///   candidates further than this from vertical are rejected.
/// - `theta_sim_thresh_rad` / `rho_sim_thresh_px`: two candidates closer
///   than either bound are the same physical row seen in adjacent
///   accumulator bins; only the stronger survives.
#[derive(Clone, Debug, Deserialize)]
pub struct FilterOptions {
    pub angle_thresh_rad: f32,
    pub theta_sim_thresh_rad: f32,
    pub rho_sim_thresh_px: f32,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            angle_thresh_rad: (30.0f32).to_radians(),
            theta_sim_thresh_rad: 0.1,
            rho_sim_thresh_px: 10.0,
        }
    }
}
