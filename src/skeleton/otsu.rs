//! Global automatic thresholding after Otsu.

use crate::image::GrayImageU8;

/// Intensity cutoff that maximizes the between-class variance of the image
/// histogram (equivalently, minimizes intra-class variance). Returns 0 for
/// empty or uniform images.
pub fn otsu_threshold(gray: &GrayImageU8) -> u8 {
    let mut histogram = [0u64; 256];
    for &px in &gray.data {
        histogram[px as usize] += 1;
    }

    let total = gray.data.len() as f64;
    if total == 0.0 {
        return 0;
    }
    let total_sum: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &count)| i as f64 * count as f64)
        .sum();

    let mut weight_bg = 0.0f64;
    let mut sum_bg = 0.0f64;
    let mut best_threshold = 0u8;
    let mut best_variance = 0.0f64;

    for (t, &count) in histogram.iter().enumerate() {
        weight_bg += count as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += t as f64 * count as f64;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (total_sum - sum_bg) / weight_fg;
        let between = weight_bg * weight_fg * (mean_bg - mean_fg) * (mean_bg - mean_fg);
        if between > best_variance {
            best_variance = between;
            best_threshold = t as u8;
        }
    }

    best_threshold
}

/// Binarize to background 0 / foreground 255 with `value > threshold` as
/// foreground.
pub fn binarize(gray: &GrayImageU8, threshold: u8) -> GrayImageU8 {
    let data = gray
        .data
        .iter()
        .map(|&v| if v > threshold { 255 } else { 0 })
        .collect();
    GrayImageU8::from_raw(gray.w, gray.h, data)
}
