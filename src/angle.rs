//! Angle helpers for line orientations, which are π-periodic.

/// Wraps an angle into the range [0, π).
#[inline]
pub fn normalize_half_pi(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(std::f32::consts::PI);
    if wrapped >= std::f32::consts::PI - 1e-6 {
        0.0
    } else {
        wrapped
    }
}

/// Smallest unsigned distance between two orientations, treating angles π
/// apart as identical. The result lies in [0, π/2].
#[inline]
pub fn angular_difference(a: f32, b: f32) -> f32 {
    let diff = (a - b).abs().rem_euclid(std::f32::consts::PI);
    if diff > std::f32::consts::FRAC_PI_2 {
        std::f32::consts::PI - diff
    } else {
        diff
    }
}
