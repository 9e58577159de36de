mod common;

use common::synthetic_image::{stripe_field_bgr, Stripe};
use row_detector::image::ColorImageU8;
use row_detector::{RowDetector, RowParams};
use std::f32::consts::PI;

fn params(target_row_count: usize) -> RowParams {
    let mut p = RowParams::default();
    p.target_row_count = target_row_count;
    // fine accumulator bins so slightly tilted stripes land away from the
    // degenerate theta = 0 bin
    p.voting.rho_resolution_px = 1.0;
    p.voting.theta_resolution_rad = PI / 180.0;
    p.voting.vote_threshold_max = 60;
    p.voting.vote_threshold_min = 20;
    p.voting.vote_threshold_step = 1;
    p.filter.angle_thresh_rad = PI / 6.0;
    p
}

fn detect(
    width: usize,
    height: usize,
    stripes: &[Stripe],
    target_row_count: usize,
) -> row_detector::DetectionReport {
    let buffer = stripe_field_bgr(width, height, stripes);
    let image = ColorImageU8 {
        w: width,
        h: height,
        stride: 3 * width,
        data: &buffer,
    };
    let detector = RowDetector::new(params(target_row_count));
    detector.process_with_diagnostics(image).expect("valid frame")
}

fn assert_trace_invariants(report: &row_detector::DetectionReport) {
    // theta range invariant over everything the voter reported
    for line in &report.trace.voting.candidates {
        assert!(
            (0.0..PI).contains(&line.theta),
            "theta {} out of [0, π)",
            line.theta
        );
    }
    // the filtered set is a subsequence of the candidate set
    let candidates = &report.trace.voting.candidates;
    let mut cursor = 0usize;
    for kept in &report.trace.filter.lines {
        let pos = candidates[cursor..]
            .iter()
            .position(|c| c == kept)
            .expect("filtered line must come from the candidate set, in order");
        cursor += pos + 1;
    }
    assert!(report.trace.filter.lines.len() <= candidates.len());
    // sweep thresholds strictly decrease and start at the configured maximum
    let passes = &report.trace.voting.passes;
    assert!(!passes.is_empty());
    for pair in passes.windows(2) {
        assert!(pair[1].threshold < pair[0].threshold);
    }
}

/// Angular distance of a segment from the vertical axis.
fn tilt_from_vertical(seg: &row_detector::LineSegment) -> f32 {
    let dx = (seg.p1.x - seg.p0.x).abs() as f32;
    let dy = (seg.p1.y - seg.p0.y).abs() as f32;
    dx.atan2(dy)
}

#[test]
fn all_black_image_yields_empty_result() {
    let report = detect(100, 100, &[], 4);
    assert!(!report.rows.target_met);
    assert!(report.rows.lines.is_empty());
    assert_eq!(report.trace.skeleton.foreground_pixels, 0);
    assert!(report.trace.voting.candidates.is_empty());
    // the sweep still walked its whole range
    assert_eq!(
        report.trace.voting.passes.last().map(|p| p.threshold),
        Some(20)
    );
    assert_trace_invariants(&report);
}

#[test]
fn three_tilted_stripes_meet_the_target() {
    let stripes = [
        Stripe {
            center_x: 20.0,
            tilt_rad: (-3.0f32).to_radians(),
            half_width: 3.0,
        },
        Stripe {
            center_x: 50.0,
            tilt_rad: (-10.0f32).to_radians(),
            half_width: 3.0,
        },
        Stripe {
            center_x: 80.0,
            tilt_rad: (4.0f32).to_radians(),
            half_width: 3.0,
        },
    ];
    let report = detect(100, 120, &stripes, 3);

    assert!(report.rows.target_met, "trace: {:?}", report.trace.voting.passes);
    assert_eq!(report.rows.lines.len(), 3);
    for seg in &report.rows.lines {
        let tilt = tilt_from_vertical(seg);
        assert!(
            tilt <= PI / 6.0 + 0.02,
            "segment {seg:?} tilted {tilt} rad from vertical"
        );
    }
    // the accepted rows are distinct physical stripes
    let kept = &report.trace.filter.lines;
    assert_eq!(kept.len(), 3);
    for i in 0..kept.len() {
        for j in (i + 1)..kept.len() {
            let rho_gap = (kept[i].rho - kept[j].rho).abs();
            let theta_gap = (kept[i].theta - kept[j].theta).abs();
            assert!(rho_gap >= 10.0, "rows {i}/{j}: Δrho {rho_gap} below bound");
            assert!(theta_gap >= 0.1, "rows {i}/{j}: Δtheta {theta_gap} below bound");
        }
    }
    assert_trace_invariants(&report);
}

#[test]
fn near_horizontal_stripe_is_rejected() {
    let stripes = [
        Stripe {
            center_x: 20.0,
            tilt_rad: (-3.0f32).to_radians(),
            half_width: 3.0,
        },
        Stripe {
            center_x: 50.0,
            tilt_rad: (-10.0f32).to_radians(),
            half_width: 3.0,
        },
        // rotated to 5° off horizontal: outside the near-vertical band
        Stripe {
            center_x: 80.0,
            tilt_rad: (85.0f32).to_radians(),
            half_width: 3.0,
        },
    ];
    let report = detect(100, 120, &stripes, 3);

    assert!(!report.rows.target_met);
    assert_eq!(report.rows.lines.len(), 2);
    for seg in &report.rows.lines {
        assert!(tilt_from_vertical(seg) <= PI / 6.0 + 0.02);
    }
    assert!(
        report.trace.filter.rejected_angle > 0,
        "the horizontal stripe must show up as an angle rejection"
    );
    assert_trace_invariants(&report);
}

#[test]
fn near_duplicate_stripes_collapse_to_one_row() {
    let tilt = (-5.0f32).to_radians();
    let stripes = [
        Stripe {
            center_x: 45.0,
            tilt_rad: tilt,
            half_width: 2.0,
        },
        // same orientation, rho only a few pixels away
        Stripe {
            center_x: 52.0,
            tilt_rad: tilt,
            half_width: 2.0,
        },
    ];
    let report = detect(100, 120, &stripes, 2);

    assert!(!report.rows.target_met);
    assert_eq!(report.rows.lines.len(), 1);
    assert_trace_invariants(&report);
}
