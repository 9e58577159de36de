//! Structured diagnostics exposed by the detector.
//!
//! [`DetectionReport`] is the entry point returned by
//! `RowDetector::process_with_diagnostics`, bundling the compact result
//! (`RowResult`) with a [`PipelineTrace`] describing every stage the
//! pipeline executed. The [`DiagnosticSink`] trait is the optional
//! collaborator hook for streaming intermediate images and candidate sets
//! out of a run without touching its output.

pub mod filter;
pub mod pipeline;
pub mod sink;
pub mod skeleton;
pub mod timing;
pub mod vegetation;
pub mod voting;

pub use filter::FilterStage;
pub use pipeline::{DetectionReport, InputDescriptor, PipelineTrace};
pub use sink::DiagnosticSink;
pub use skeleton::SkeletonStage;
pub use timing::TimingBreakdown;
pub use vegetation::VegetationStage;
pub use voting::{SweepPass, VotingStage};
