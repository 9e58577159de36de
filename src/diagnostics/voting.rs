use crate::types::PolarLine;
use serde::Serialize;

/// One pass of the adaptive threshold sweep.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPass {
    pub threshold: u32,
    /// Rounded candidates reported at this threshold.
    pub raw_candidates: usize,
    /// Candidates surviving the filter at this threshold.
    pub kept_candidates: usize,
}

/// Report of the adaptive line-voting stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingStage {
    pub elapsed_ms: f64,
    pub rho_bins: usize,
    pub theta_bins: usize,
    pub max_rho: f32,
    /// Skeleton pixels that contributed votes.
    pub foreground_pixels: usize,
    /// Every pass the sweep executed, in strictly decreasing threshold order.
    pub passes: Vec<SweepPass>,
    /// Threshold of the pass whose candidate set is reported below.
    pub final_threshold: u32,
    pub target_met: bool,
    /// Rounded candidate set of the reported pass, before filtering. Kept
    /// for diagnostic rendering only.
    pub candidates: Vec<PolarLine>,
}
