//! Deterministic field post-processing.
//!
//! Spherization remaps a height-field toward a spherical falloff: a
//! radial attenuation dome centered on the field, renormalized, then
//! shifted down by a "sea level" offset derived from the field's own
//! statistics. Min-max normalization lives on [`Grid2D`] itself.

use std::f64::consts::PI;

use crate::Grid2D;

/// Parameters for [`spherize`].
#[derive(Debug, Clone)]
pub struct SpherizeParams {
    /// Scales the uniform sea-level offset subtracted at the end.
    pub ratio: f64,
    /// Strength of the radial falloff.
    pub spherical: f64,
    /// Falloff center; the field's geometric center when `None`.
    pub center: Option<(f64, f64)>,
}

impl Default for SpherizeParams {
    fn default() -> Self {
        Self {
            ratio: 0.4,
            spherical: 0.6,
            center: None,
        }
    }
}

/// Applies the spherical falloff to `field`, returning a new grid.
///
/// The result is renormalized so its peak is 1 before the sea-level
/// offset is subtracted; values may end up negative, which downstream
/// consumers read as depth below sea level. A constant input collapses
/// to all-zero rather than dividing by zero, and an empty input yields
/// an empty output.
#[must_use]
pub fn spherize(field: &Grid2D, params: &SpherizeParams) -> Grid2D {
    let width = field.width();
    let height = field.height();
    let mut out = Grid2D::new(width, height);
    if out.is_empty() {
        return out;
    }

    let (center_x, center_y) = params
        .center
        .unwrap_or(((width / 2) as f64, (height / 2) as f64));
    let distance = |x: f64, y: f64| {
        let dx = center_x - x;
        let dy = center_y - y;
        (dx * dx + dy * dy).sqrt()
    };

    let w = width as f64;
    let h = height as f64;
    let dmax = distance(0.0, 0.0)
        .max(distance(0.0, h))
        .max(distance(w, 0.0))
        .max(distance(w, h))
        * 1.2;

    // Defensive renormalization; the input is usually already in [0, 1].
    let mut min = 1.0_f64;
    let mut max = 0.0_f64;
    for &value in field.values() {
        if min > value {
            min = value;
        }
        if max < value {
            max = value;
        }
    }
    let span = max - min;
    if span == 0.0 {
        return out;
    }

    let mut peak = 0.0_f64;
    for px in 0..width {
        for py in 0..height {
            let d = distance(px as f64, py as f64);
            let normalized = (field.get(px, py) - min) / span;
            let value = normalized * radial_factor(d, dmax, params.spherical);
            out.set(px, py, value);
            if peak < value {
                peak = value;
            }
        }
    }

    // An all-non-positive field has no peak to scale by; leave it.
    let scale = if peak == 0.0 { 1.0 } else { peak };

    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for px in 0..width {
        for py in 0..height {
            let value = out.get(px, py) / scale;
            out.set(px, py, value);
            sum += value;
            sum_sq += value * value;
        }
    }

    let cells = (width * height) as f64;
    let rms = (sum_sq / cells).sqrt();
    let mean = sum / cells;
    let average = (mean * 2.0 + rms) / 3.0;
    let depth = params.ratio * average * 2.0;

    for px in 0..width {
        for py in 0..height {
            out.set(px, py, out.get(px, py) - depth);
        }
    }
    out
}

/// Dome attenuation at distance `d` from the center: 1 at the center,
/// falling toward (and past) zero at the rim.
fn radial_factor(d: f64, dmax: f64, spherical: f64) -> f64 {
    (0.5 + (2.0 * PI * (dmax - d / 2.0 * spherical) / (dmax + d / 2.0 * spherical)).cos()) / 1.5
}
