use row_detector::config::row::{self, RuntimeConfig};
use row_detector::diagnostics::{DetectionReport, DiagnosticSink};
use row_detector::image::io::{load_color_image, save_grayscale_u8, save_rgb_u8, write_json_file};
use row_detector::image::GrayImageU8;
use row_detector::types::{LineSegment, PolarLine};
use row_detector::RowDetector;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = std::env::args().next().unwrap_or_else(|| "row_demo".to_string());
    let config = row::parse_cli(&program)?;

    let color = load_color_image(&config.input_path)?;
    let detector = RowDetector::new(config.row_params.clone());

    let report = match &config.output.debug_dir {
        Some(dir) => {
            let mut sink = ImageDirSink::new(dir.clone(), 0);
            detector
                .process_with_sink(color.as_view(), &mut sink)
                .map_err(|e| e.to_string())?
        }
        None => detector
            .process_with_diagnostics(color.as_view())
            .map_err(|e| e.to_string())?,
    };

    print_text_summary(&report);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }

    if let Some(dir) = &config.output.debug_dir {
        save_debug_artifacts(dir, &config, &report)?;
        println!("Debug artifacts written to {}", dir.display());
    }

    Ok(())
}

fn print_text_summary(report: &DetectionReport) {
    let rows = &report.rows;
    println!("Detection summary");
    println!("  target_met: {}", rows.target_met);
    println!("  rows: {}", rows.lines.len());
    println!("  latency_ms: {:.3}", rows.latency_ms);
    for (i, seg) in rows.lines.iter().enumerate() {
        println!(
            "  row {i}: ({}, {}) -> ({}, {})",
            seg.p0.x, seg.p0.y, seg.p1.x, seg.p1.y
        );
    }

    let trace = &report.trace;
    println!(
        "\nSkeleton: otsu={} iterations={} foreground={} elapsed_ms={:.3}",
        trace.skeleton.otsu_threshold,
        trace.skeleton.iterations,
        trace.skeleton.foreground_pixels,
        trace.skeleton.elapsed_ms
    );
    println!(
        "Voting: bins={}x{} passes={} final_threshold={} candidates={}",
        trace.voting.rho_bins,
        trace.voting.theta_bins,
        trace.voting.passes.len(),
        trace.voting.final_threshold,
        trace.voting.candidates.len()
    );
    println!(
        "Filter: kept={}/{} (angle={} degenerate={} duplicate={})",
        trace.filter.kept,
        trace.filter.total,
        trace.filter.rejected_angle,
        trace.filter.rejected_degenerate,
        trace.filter.rejected_duplicate
    );
    println!(
        "Timings (ms): vegetation={:.3} skeleton={:.3} voting={:.3} filter={:.3} total={:.3}",
        trace.timings.vegetation_ms,
        trace.timings.skeleton_ms,
        trace.timings.voting_ms,
        trace.timings.filter_ms,
        trace.timings.total_ms
    );
}

fn save_debug_artifacts(
    dir: &Path,
    config: &RuntimeConfig,
    report: &DetectionReport,
) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create debug dir {}: {e}", dir.display()))?;

    write_json_file(&dir.join("detection_report.json"), report)?;

    // overlays: raw candidates vs. accepted rows, drawn over the input frame
    let color = load_color_image(&config.input_path)?;
    let (w, h) = (color.width(), color.height());
    let mut rgb = bgr_to_rgb(color.as_view().data);

    let candidate_segments: Vec<LineSegment> = report
        .trace
        .voting
        .candidates
        .iter()
        .map(LineSegment::from_polar)
        .collect();
    let mut candidates_rgb = rgb.clone();
    for seg in &candidate_segments {
        draw_segment(&mut candidates_rgb, w, h, seg, [255, 220, 0]);
    }
    save_rgb_u8(w, h, candidates_rgb, &dir.join("overlay_candidates.png"))?;

    for seg in &report.rows.lines {
        draw_segment(&mut rgb, w, h, seg, [255, 0, 0]);
    }
    save_rgb_u8(w, h, rgb, &dir.join("overlay_rows.png"))?;

    Ok(())
}

fn bgr_to_rgb(bgr: &[u8]) -> Vec<u8> {
    let mut rgb = bgr.to_vec();
    for px in rgb.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    rgb
}

/// Bresenham line into an interleaved RGB buffer, clipped to the image.
fn draw_segment(rgb: &mut [u8], w: usize, h: usize, seg: &LineSegment, color: [u8; 3]) {
    let (mut x, mut y) = (i64::from(seg.p0.x), i64::from(seg.p0.y));
    let (x1, y1) = (i64::from(seg.p1.x), i64::from(seg.p1.y));
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        if x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
            let i = 3 * (y as usize * w + x as usize);
            rgb[i..i + 3].copy_from_slice(&color);
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Writes each intermediate stage image the detector hands out to a PNG in
/// the debug directory. The frame index keys the filenames, so one sink can
/// serve a whole capture session.
struct ImageDirSink {
    dir: PathBuf,
    frame: u32,
}

impl ImageDirSink {
    fn new(dir: PathBuf, frame: u32) -> Self {
        Self { dir, frame }
    }

    fn save(&self, name: &str, image: &GrayImageU8) {
        let path = self.dir.join(format!("frame{:04}_{name}.png", self.frame));
        if let Err(err) = save_grayscale_u8(image, &path) {
            eprintln!("Warning: {err}");
        }
    }
}

impl DiagnosticSink for ImageDirSink {
    fn vegetation_image(&mut self, image: &GrayImageU8) {
        self.save("vegetation", image);
    }

    fn skeleton_image(&mut self, image: &GrayImageU8) {
        self.save("skeleton", image);
    }

    fn raw_candidates(&mut self, lines: &[PolarLine]) {
        log::debug!("frame {}: {} raw candidates", self.frame, lines.len());
    }

    fn filtered_candidates(&mut self, lines: &[PolarLine]) {
        log::debug!("frame {}: {} filtered candidates", self.frame, lines.len());
    }
}
