//! Straight-line voting over the skeleton in polar `(rho, theta)` form.
//!
//! [`VoteAccumulator`] holds the discretized vote grid; [`round_candidates`]
//! snaps reported lines to a coarse grid so near-identical accumulator bins
//! collapse before filtering. The adaptive threshold sweep that drives both
//! lives in the detector pipeline.

pub mod accumulator;

pub use accumulator::VoteAccumulator;

use crate::types::PolarLine;

/// Reported rho values are snapped to this grid (pixels).
pub const RHO_ROUND_PX: f32 = 10.0;
/// Reported theta values keep this many fractional digits.
pub const THETA_DECIMALS: i32 = 4;

/// Round candidates to fixed precision and drop exact repeats, keeping the
/// first (strongest) occurrence of each rounded pair.
pub fn round_candidates(candidates: Vec<PolarLine>) -> Vec<PolarLine> {
    let theta_scale = 10f32.powi(THETA_DECIMALS);
    let mut out: Vec<PolarLine> = Vec::with_capacity(candidates.len());
    for c in candidates {
        let rho = (c.rho / RHO_ROUND_PX).round() * RHO_ROUND_PX;
        let theta = (c.theta * theta_scale).round() / theta_scale;
        if !out.iter().any(|p| p.rho == rho && p.theta == theta) {
            out.push(PolarLine {
                rho,
                theta,
                votes: c.votes,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(rho: f32, theta: f32, votes: u32) -> PolarLine {
        PolarLine { rho, theta, votes }
    }

    #[test]
    fn rounding_snaps_rho_to_tens() {
        let rounded = round_candidates(vec![line(23.0, 0.1, 5)]);
        assert_eq!(rounded[0].rho, 20.0);
        let rounded = round_candidates(vec![line(-26.0, 0.1, 5)]);
        assert_eq!(rounded[0].rho, -30.0);
    }

    #[test]
    fn adjacent_bins_collapse_to_first_occurrence() {
        let candidates = vec![line(48.0, 0.10472, 40), line(52.0, 0.10474, 31)];
        let rounded = round_candidates(candidates);
        assert_eq!(rounded.len(), 1);
        assert_eq!(rounded[0].votes, 40);
    }

    #[test]
    fn distinct_lines_survive() {
        let candidates = vec![line(20.0, 0.1, 9), line(60.0, 0.1, 8), line(20.0, 0.8, 7)];
        let rounded = round_candidates(candidates);
        assert_eq!(rounded.len(), 3);
    }
}
