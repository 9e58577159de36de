use crate::image::GrayImageU8;
use crate::types::PolarLine;

/// Optional collaborator receiving intermediate artifacts as the pipeline
/// runs: the vegetation channel, the skeleton, and the raw/filtered
/// candidate sets of the reported sweep pass.
///
/// The detector calls each method at most once per invocation, after the
/// corresponding stage completes; a sink can never influence the pipeline
/// output. Implementations that persist artifacts across frames own their
/// frame identifiers (the detector itself is stateless between calls).
pub trait DiagnosticSink {
    fn vegetation_image(&mut self, _image: &GrayImageU8) {}
    fn skeleton_image(&mut self, _image: &GrayImageU8) {}
    fn raw_candidates(&mut self, _lines: &[PolarLine]) {}
    fn filtered_candidates(&mut self, _lines: &[PolarLine]) {}
}
