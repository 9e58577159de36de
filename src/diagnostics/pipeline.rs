use crate::diagnostics::{
    FilterStage, SkeletonStage, TimingBreakdown, VegetationStage, VotingStage,
};
use crate::types::RowResult;
use serde::Serialize;

/// Result produced by `RowDetector::process_with_diagnostics`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub rows: RowResult,
    pub trace: PipelineTrace,
}

/// End-to-end trace describing the internal execution of the detector.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub vegetation: VegetationStage,
    pub skeleton: SkeletonStage,
    pub voting: VotingStage,
    pub filter: FilterStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub target_row_count: usize,
}
