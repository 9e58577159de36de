//! Geometric plausibility and duplicate filtering of line candidates.
//!
//! Crop rows imaged by a forward-looking camera converge toward vertical, so
//! candidates in the near-horizontal middle band are noise (field edges, the
//! horizon). Near-duplicate candidates are the same physical row reported
//! from adjacent accumulator bins; the filter keeps the first-seen (and
//! therefore strongest) representative and surfaces a per-candidate decision
//! record for diagnostics.

use crate::angle::angular_difference;
use crate::detector::params::FilterOptions;
use crate::types::PolarLine;
use serde::Serialize;

/// Theta values this close to exactly 0 are degenerate accumulator artifacts
/// and rejected outright.
pub const DEGENERATE_THETA_EPS: f32 = 1e-4;

/// Why a candidate was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RejectReason {
    /// Orientation outside the near-vertical band.
    OutsideAngleBand,
    /// Theta at or near exactly 0.
    DegenerateTheta,
    /// Near-duplicate of the accepted candidate at `index` (position in the
    /// input candidate set).
    DuplicateOfAccepted { index: usize },
}

/// Per-candidate filter outcome, in candidate order.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDecision {
    pub index: usize,
    pub line: PolarLine,
    pub kept: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectReason>,
}

/// Aggregate outcome of one filter run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterDiagnostics {
    pub total: usize,
    pub kept: usize,
    pub rejected_angle: usize,
    pub rejected_degenerate: usize,
    pub rejected_duplicate: usize,
    pub decisions: Vec<CandidateDecision>,
}

/// Filters an ordered candidate set. The surviving lines are a subsequence
/// of the input; a candidate is dropped when its orientation is implausible
/// for a crop row or when it duplicates an already accepted candidate
/// (first-seen-in-vote-rank-order wins).
pub fn filter_candidates(
    candidates: &[PolarLine],
    opts: &FilterOptions,
) -> (Vec<PolarLine>, FilterDiagnostics) {
    let mut kept: Vec<PolarLine> = Vec::new();
    let mut kept_indices: Vec<usize> = Vec::new();
    let mut diag = FilterDiagnostics {
        total: candidates.len(),
        ..Default::default()
    };

    for (index, cand) in candidates.iter().enumerate() {
        let reason = classify(cand, &kept, &kept_indices, opts);
        match reason {
            None => {
                kept.push(*cand);
                kept_indices.push(index);
            }
            Some(RejectReason::OutsideAngleBand) => diag.rejected_angle += 1,
            Some(RejectReason::DegenerateTheta) => diag.rejected_degenerate += 1,
            Some(RejectReason::DuplicateOfAccepted { .. }) => diag.rejected_duplicate += 1,
        }
        diag.decisions.push(CandidateDecision {
            index,
            line: *cand,
            kept: reason.is_none(),
            reason,
        });
    }

    diag.kept = kept.len();
    (kept, diag)
}

fn classify(
    cand: &PolarLine,
    kept: &[PolarLine],
    kept_indices: &[usize],
    opts: &FilterOptions,
) -> Option<RejectReason> {
    if cand.theta < DEGENERATE_THETA_EPS {
        return Some(RejectReason::DegenerateTheta);
    }
    if angular_difference(cand.theta, 0.0) > opts.angle_thresh_rad {
        return Some(RejectReason::OutsideAngleBand);
    }
    for (slot, accepted) in kept.iter().enumerate() {
        if (cand.theta - accepted.theta).abs() < opts.theta_sim_thresh_rad
            || (cand.rho - accepted.rho).abs() < opts.rho_sim_thresh_px
        {
            return Some(RejectReason::DuplicateOfAccepted {
                index: kept_indices[slot],
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn line(rho: f32, theta: f32, votes: u32) -> PolarLine {
        PolarLine { rho, theta, votes }
    }

    fn opts() -> FilterOptions {
        FilterOptions {
            angle_thresh_rad: PI / 6.0,
            theta_sim_thresh_rad: 0.1,
            rho_sim_thresh_px: 10.0,
        }
    }

    #[test]
    fn near_horizontal_candidates_are_rejected() {
        let candidates = vec![line(50.0, FRAC_PI_2, 30), line(80.0, 0.2, 20)];
        let (kept, diag) = filter_candidates(&candidates, &opts());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].rho, 80.0);
        assert_eq!(diag.rejected_angle, 1);
    }

    #[test]
    fn both_sides_of_the_vertical_band_are_accepted() {
        let candidates = vec![line(40.0, 0.2, 30), line(-60.0, PI - 0.2, 20)];
        let (kept, _) = filter_candidates(&candidates, &opts());
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn exactly_zero_theta_is_degenerate() {
        let candidates = vec![line(30.0, 0.0, 30)];
        let (kept, diag) = filter_candidates(&candidates, &opts());
        assert!(kept.is_empty());
        assert_eq!(diag.rejected_degenerate, 1);
    }

    #[test]
    fn close_theta_far_rho_collapses_to_one() {
        // duplicate by theta similarity even though rho differs widely
        let candidates = vec![line(20.0, 0.20, 35), line(90.0, 0.25, 25)];
        let (kept, diag) = filter_candidates(&candidates, &opts());
        assert_eq!(kept.len(), 1);
        assert_eq!(diag.rejected_duplicate, 1);
    }

    #[test]
    fn close_rho_far_theta_collapses_to_one() {
        let candidates = vec![line(20.0, 0.15, 35), line(24.0, 0.45, 25)];
        let (kept, _) = filter_candidates(&candidates, &opts());
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn first_seen_wins_and_is_recorded() {
        let candidates = vec![line(20.0, 0.20, 35), line(22.0, 0.21, 30)];
        let (kept, diag) = filter_candidates(&candidates, &opts());
        assert_eq!(kept, vec![candidates[0]]);
        assert_eq!(
            diag.decisions[1].reason,
            Some(RejectReason::DuplicateOfAccepted { index: 0 })
        );
    }

    #[test]
    fn rejected_candidates_do_not_suppress_later_ones() {
        // the middle candidate is outside the band; the third must be
        // compared against the accepted first only
        let candidates = vec![
            line(20.0, 0.20, 35),
            line(55.0, FRAC_PI_2, 30),
            line(57.0, 0.35, 25),
        ];
        let (kept, _) = filter_candidates(&candidates, &opts());
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].rho, 57.0);
    }

    #[test]
    fn three_mutually_close_lines_keep_only_the_strongest() {
        let candidates = vec![
            line(20.0, 0.20, 35),
            line(25.0, 0.21, 30),
            line(28.0, 0.22, 25),
        ];
        let (kept, diag) = filter_candidates(&candidates, &opts());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].votes, 35);
        assert_eq!(diag.rejected_duplicate, 2);
    }

    #[test]
    fn output_is_a_subsequence_of_the_input() {
        let candidates = vec![
            line(10.0, 0.2, 40),
            line(90.0, 0.4, 30),
            line(-50.0, PI - 0.1, 20),
            line(150.0, FRAC_PI_2, 10),
        ];
        let (kept, diag) = filter_candidates(&candidates, &opts());
        assert!(kept.len() <= candidates.len());
        let mut cursor = 0usize;
        for k in &kept {
            let pos = candidates[cursor..]
                .iter()
                .position(|c| c == k)
                .expect("kept line must come from the input, in order");
            cursor += pos + 1;
        }
        assert_eq!(diag.total, candidates.len());
        assert_eq!(diag.decisions.len(), candidates.len());
    }
}
