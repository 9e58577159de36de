//! Polar-line vote accumulator over a binary skeleton.

use crate::angle::normalize_half_pi;
use crate::image::GrayImageU8;
use crate::types::PolarLine;
use std::cmp::Ordering;

/// Discretized `(rho, theta)` vote grid.
///
/// Every foreground pixel votes once per theta bin for the rho bin its
/// coordinates imply, so the grid is independent of any vote threshold and a
/// threshold sweep can re-read the same accumulator instead of re-voting.
#[derive(Clone, Debug)]
pub struct VoteAccumulator {
    bins: Vec<u32>,
    rho_bins: usize,
    theta_bins: usize,
    rho_resolution: f32,
    theta_resolution: f32,
    max_rho: f32,
    voters: usize,
}

impl VoteAccumulator {
    /// Accumulate votes from every foreground pixel of `skeleton`.
    ///
    /// `rho_resolution` is the rho bin width in pixels, `theta_resolution`
    /// the theta bin width in radians; both must be positive. Theta bins
    /// start at 0 and cover `[0, π)`.
    pub fn build(skeleton: &GrayImageU8, rho_resolution: f32, theta_resolution: f32) -> Self {
        assert!(
            rho_resolution > 0.0 && theta_resolution > 0.0,
            "accumulator resolutions must be positive"
        );
        let (w, h) = (skeleton.w, skeleton.h);
        let max_rho = ((w * w + h * h) as f32).sqrt();
        let theta_bins = ((std::f32::consts::PI / theta_resolution).ceil() as usize).max(1);
        let rho_bins = (2.0 * max_rho / rho_resolution).ceil() as usize + 1;

        let mut sin_table = Vec::with_capacity(theta_bins);
        let mut cos_table = Vec::with_capacity(theta_bins);
        for t in 0..theta_bins {
            let theta = normalize_half_pi(t as f32 * theta_resolution);
            sin_table.push(theta.sin());
            cos_table.push(theta.cos());
        }

        let mut bins = vec![0u32; rho_bins * theta_bins];
        let mut voters = 0usize;
        for y in 0..h {
            let row = skeleton.row(y);
            for (x, &px) in row.iter().enumerate() {
                if px == 0 {
                    continue;
                }
                voters += 1;
                for t in 0..theta_bins {
                    let rho = x as f32 * cos_table[t] + y as f32 * sin_table[t];
                    let idx = ((rho + max_rho) / rho_resolution).round() as isize;
                    let idx = idx.clamp(0, rho_bins as isize - 1) as usize;
                    bins[t * rho_bins + idx] += 1;
                }
            }
        }

        Self {
            bins,
            rho_bins,
            theta_bins,
            rho_resolution,
            theta_resolution,
            max_rho,
            voters,
        }
    }

    pub fn rho_bins(&self) -> usize {
        self.rho_bins
    }

    pub fn theta_bins(&self) -> usize {
        self.theta_bins
    }

    pub fn max_rho(&self) -> f32 {
        self.max_rho
    }

    /// Foreground pixels that contributed votes.
    pub fn voters(&self) -> usize {
        self.voters
    }

    /// All lines whose bin reached `threshold` votes, strongest first.
    ///
    /// Ties are broken by ascending `(rho, theta)` so the ordering is
    /// deterministic. Zero-vote bins are never reported, whatever the
    /// threshold.
    pub fn lines_with_votes_above(&self, threshold: u32) -> Vec<PolarLine> {
        let mut out = Vec::new();
        for t in 0..self.theta_bins {
            let theta = normalize_half_pi(t as f32 * self.theta_resolution);
            for r in 0..self.rho_bins {
                let votes = self.bins[t * self.rho_bins + r];
                if votes == 0 || votes < threshold {
                    continue;
                }
                let rho = r as f32 * self.rho_resolution - self.max_rho;
                out.push(PolarLine { rho, theta, votes });
            }
        }
        out.sort_by(|a, b| {
            b.votes
                .cmp(&a.votes)
                .then(a.rho.partial_cmp(&b.rho).unwrap_or(Ordering::Equal))
                .then(a.theta.partial_cmp(&b.theta).unwrap_or(Ordering::Equal))
        });
        out
    }
}
