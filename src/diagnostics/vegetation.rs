use serde::Serialize;

/// Report of the vegetation channel extraction.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VegetationStage {
    pub elapsed_ms: f64,
    /// Mean excess-green intensity; a rough proxy for plant coverage.
    pub mean_intensity: f32,
}
