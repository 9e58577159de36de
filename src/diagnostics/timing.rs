use serde::Serialize;

/// Per-stage timing trace for one detector run. The filter runs once per
/// sweep pass; its entry is the sum over all passes.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub vegetation_ms: f64,
    pub skeleton_ms: f64,
    pub voting_ms: f64,
    pub filter_ms: f64,
    pub total_ms: f64,
}
