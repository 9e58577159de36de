//! Detector pipeline driving crop-row detection end-to-end.
//!
//! The [`RowDetector`] exposes a simple API: feed a color frame and get the
//! detected rows with detailed diagnostics. Internally it wires the
//! excess-green extraction, skeletonization, the adaptive vote-threshold
//! sweep and the candidate filter, and converts the surviving polar lines to
//! renderable segments at the boundary.
//!
//! Typical usage:
//! ```no_run
//! use row_detector::image::ColorImageU8;
//! use row_detector::{RowDetector, RowParams};
//!
//! # fn example(frame: ColorImageU8) {
//! let detector = RowDetector::new(RowParams::default());
//! let report = detector.process_with_diagnostics(frame).expect("valid frame");
//! if !report.rows.target_met {
//!     println!("only {} rows found", report.rows.lines.len());
//! }
//! # }
//! ```
use super::filter::{filter_candidates, FilterDiagnostics};
use super::params::RowParams;
use crate::diagnostics::{
    DetectionReport, DiagnosticSink, FilterStage, InputDescriptor, PipelineTrace, SkeletonStage,
    SweepPass, TimingBreakdown, VegetationStage, VotingStage,
};
use crate::error::DetectError;
use crate::hough::{round_candidates, VoteAccumulator};
use crate::image::ColorImageU8;
use crate::skeleton::skeletonize;
use crate::types::{LineSegment, PolarLine, RowResult};
use crate::vegetation::excess_green;
use log::debug;
use std::time::Instant;

/// Row detector orchestrating vegetation extraction, skeletonization, the
/// adaptive Hough sweep and candidate filtering.
///
/// Holds nothing but its read-only parameters: every invocation is
/// independent, so one detector may serve frames from several threads.
pub struct RowDetector {
    params: RowParams,
}

/// Everything one threshold sweep produces.
struct SweepOutcome {
    passes: Vec<SweepPass>,
    /// Rounded candidate set of the reported pass.
    candidates: Vec<PolarLine>,
    /// Filtered subsequence of `candidates`.
    filtered: Vec<PolarLine>,
    filter_diag: FilterDiagnostics,
    final_threshold: u32,
    target_met: bool,
    filter_ms: f64,
}

impl RowDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: RowParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RowParams {
        &self.params
    }

    /// Run the detector on a color frame, returning a compact result.
    pub fn process(&self, image: ColorImageU8) -> Result<RowResult, DetectError> {
        self.run(image, None).map(|report| report.rows)
    }

    /// Run the detector and return both the result and a detailed trace.
    pub fn process_with_diagnostics(
        &self,
        image: ColorImageU8,
    ) -> Result<DetectionReport, DetectError> {
        self.run(image, None)
    }

    /// Like [`process_with_diagnostics`](Self::process_with_diagnostics),
    /// additionally streaming intermediate artifacts to `sink`.
    pub fn process_with_sink(
        &self,
        image: ColorImageU8,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<DetectionReport, DetectError> {
        self.run(image, Some(sink))
    }

    fn run(
        &self,
        image: ColorImageU8,
        mut sink: Option<&mut dyn DiagnosticSink>,
    ) -> Result<DetectionReport, DetectError> {
        validate_input(&image)?;
        let total_start = Instant::now();
        debug!(
            "RowDetector::process start w={} h={} target={}",
            image.w, image.h, self.params.target_row_count
        );

        let veg_start = Instant::now();
        let gray = excess_green(&image);
        let vegetation_ms = veg_start.elapsed().as_secs_f64() * 1000.0;
        if let Some(s) = sink.as_deref_mut() {
            s.vegetation_image(&gray);
        }
        let vegetation_stage = VegetationStage {
            elapsed_ms: vegetation_ms,
            mean_intensity: gray.mean(),
        };

        let skel_start = Instant::now();
        let skeleton = skeletonize(&gray);
        let skeleton_ms = skel_start.elapsed().as_secs_f64() * 1000.0;
        if let Some(s) = sink.as_deref_mut() {
            s.skeleton_image(&skeleton.image);
        }
        let skeleton_stage = SkeletonStage {
            elapsed_ms: skeleton_ms,
            otsu_threshold: skeleton.threshold,
            iterations: skeleton.iterations,
            foreground_pixels: skeleton.image.count_nonzero(),
        };
        debug!(
            "skeletonize: otsu={} iterations={} foreground={}",
            skeleton.threshold, skeleton.iterations, skeleton_stage.foreground_pixels
        );

        let vote_start = Instant::now();
        let accumulator = VoteAccumulator::build(
            &skeleton.image,
            self.params.voting.rho_resolution_px,
            self.params.voting.theta_resolution_rad,
        );
        let sweep = self.sweep(&accumulator);
        let voting_ms = (vote_start.elapsed().as_secs_f64() * 1000.0 - sweep.filter_ms).max(0.0);
        debug!(
            "sweep: passes={} final_threshold={} candidates={} kept={} target_met={}",
            sweep.passes.len(),
            sweep.final_threshold,
            sweep.candidates.len(),
            sweep.filtered.len(),
            sweep.target_met
        );
        if let Some(s) = sink.as_deref_mut() {
            s.raw_candidates(&sweep.candidates);
            s.filtered_candidates(&sweep.filtered);
        }

        let lines: Vec<LineSegment> = sweep
            .filtered
            .iter()
            .take(self.params.target_row_count)
            .map(LineSegment::from_polar)
            .collect();
        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        let rows = RowResult {
            target_met: sweep.target_met,
            lines,
            latency_ms: total_ms,
        };
        let trace = PipelineTrace {
            input: InputDescriptor {
                width: image.w,
                height: image.h,
                target_row_count: self.params.target_row_count,
            },
            timings: TimingBreakdown {
                vegetation_ms,
                skeleton_ms,
                voting_ms,
                filter_ms: sweep.filter_ms,
                total_ms,
            },
            vegetation: vegetation_stage,
            skeleton: skeleton_stage,
            voting: VotingStage {
                elapsed_ms: voting_ms,
                rho_bins: accumulator.rho_bins(),
                theta_bins: accumulator.theta_bins(),
                max_rho: accumulator.max_rho(),
                foreground_pixels: accumulator.voters(),
                passes: sweep.passes,
                final_threshold: sweep.final_threshold,
                target_met: sweep.target_met,
                candidates: sweep.candidates,
            },
            filter: FilterStage::from_run(sweep.filter_diag, sweep.filtered, sweep.filter_ms),
        };

        Ok(DetectionReport { rows, trace })
    }

    /// Walks the vote threshold from strict to lenient, filtering each
    /// pass's candidates, until the filtered set reaches the target row
    /// count or the range is exhausted. On exhaustion the largest filtered
    /// set wins, the most lenient pass taking ties.
    fn sweep(&self, accumulator: &VoteAccumulator) -> SweepOutcome {
        let voting = &self.params.voting;
        let target = self.params.target_row_count;
        let step = voting.vote_threshold_step.max(1);

        let mut passes = Vec::new();
        let mut filter_ms = 0.0f64;
        let mut best: Option<(Vec<PolarLine>, Vec<PolarLine>, FilterDiagnostics, u32)> = None;
        let mut target_met = false;
        let mut threshold = voting.vote_threshold_max;

        loop {
            let raw = round_candidates(accumulator.lines_with_votes_above(threshold));
            let filter_start = Instant::now();
            let (kept, diag) = filter_candidates(&raw, &self.params.filter);
            filter_ms += filter_start.elapsed().as_secs_f64() * 1000.0;
            passes.push(SweepPass {
                threshold,
                raw_candidates: raw.len(),
                kept_candidates: kept.len(),
            });

            if kept.len() >= target {
                best = Some((raw, kept, diag, threshold));
                target_met = true;
                break;
            }
            let larger = match &best {
                None => true,
                Some((_, best_kept, _, _)) => kept.len() >= best_kept.len(),
            };
            if larger {
                best = Some((raw, kept, diag, threshold));
            }

            match threshold.checked_sub(step) {
                Some(next) if next >= voting.vote_threshold_min => threshold = next,
                _ => break,
            }
        }

        // the loop always runs at least one pass
        let (candidates, filtered, filter_diag, final_threshold) =
            best.expect("sweep executed no pass");
        SweepOutcome {
            passes,
            candidates,
            filtered,
            filter_diag,
            final_threshold,
            target_met,
            filter_ms,
        }
    }
}

fn validate_input(image: &ColorImageU8) -> Result<(), DetectError> {
    if image.w == 0 || image.h == 0 {
        return Err(DetectError::InvalidInput {
            width: image.w,
            height: image.h,
            reason: "image has a zero dimension".into(),
        });
    }
    if image.stride < 3 * image.w {
        return Err(DetectError::InvalidInput {
            width: image.w,
            height: image.h,
            reason: format!("stride {} shorter than a row of pixels", image.stride),
        });
    }
    let required = image.min_len();
    if image.data.len() < required {
        return Err(DetectError::InvalidInput {
            width: image.w,
            height: image.h,
            reason: format!(
                "buffer holds {} bytes, dimensions imply at least {required}",
                image.data.len()
            ),
        });
    }
    Ok(())
}
