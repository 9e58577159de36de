/// A straight crop-row stand-in: a green band through `(center_x, height/2)`,
/// tilted `tilt_rad` away from vertical (positive tilts lean the top of the
/// band to the left; the band's polar normal angle is `-tilt_rad mod π`).
#[derive(Clone, Copy, Debug)]
pub struct Stripe {
    pub center_x: f32,
    pub tilt_rad: f32,
    pub half_width: f32,
}

/// Paints saturated-green stripes onto a black interleaved BGR field image.
pub fn stripe_field_bgr(width: usize, height: usize, stripes: &[Stripe]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut data = vec![0u8; width * height * 3];
    let cy = height as f32 / 2.0;
    for y in 0..height {
        for x in 0..width {
            let covered = stripes.iter().any(|s| {
                let (sin_t, cos_t) = s.tilt_rad.sin_cos();
                let dx = x as f32 - s.center_x;
                let dy = y as f32 - cy;
                // distance along the band's normal
                (dx * cos_t - dy * sin_t).abs() <= s.half_width
            });
            if covered {
                let i = 3 * (y * width + x);
                data[i + 1] = 255;
            }
        }
    }
    data
}
