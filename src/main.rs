use row_detector::image::ColorImageU8;
use row_detector::{RowDetector, RowParams};

fn main() {
    // Demo stub: creates a fake BGR frame buffer and runs the detector
    let w = 640usize;
    let h = 480usize;
    let bgr = vec![0u8; w * h * 3];
    let image = ColorImageU8 {
        w,
        h,
        stride: 3 * w,
        data: &bgr,
    };

    let detector = RowDetector::new(RowParams::default());
    match detector.process(image) {
        Ok(res) => println!(
            "target_met={} rows={} latency_ms={:.3}",
            res.target_met,
            res.lines.len(),
            res.latency_ms
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}
