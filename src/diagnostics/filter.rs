use crate::detector::filter::{CandidateDecision, FilterDiagnostics};
use crate::types::PolarLine;
use serde::Serialize;

/// Report of the candidate filter applied to the reported sweep pass.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStage {
    pub elapsed_ms: f64,
    pub total: usize,
    pub kept: usize,
    pub rejected_angle: usize,
    pub rejected_degenerate: usize,
    pub rejected_duplicate: usize,
    /// Per-candidate outcomes, in candidate order.
    pub decisions: Vec<CandidateDecision>,
    /// Surviving lines, order preserved (a subsequence of the candidates).
    pub lines: Vec<PolarLine>,
}

impl FilterStage {
    pub fn from_run(diag: FilterDiagnostics, lines: Vec<PolarLine>, elapsed_ms: f64) -> Self {
        Self {
            elapsed_ms,
            total: diag.total,
            kept: diag.kept,
            rejected_angle: diag.rejected_angle,
            rejected_degenerate: diag.rejected_degenerate,
            rejected_duplicate: diag.rejected_duplicate,
            decisions: diag.decisions,
            lines,
        }
    }
}
