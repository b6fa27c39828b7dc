//! Midpoint-displacement terrain fields.
//!
//! Recursive diamond-square subdivision: seed the corners, then fill
//! each square's center and edge midpoints with neighbor averages plus
//! a displacement that shrinks with the subdivision size, producing
//! fractal self-similarity.

use loam_rand::SeededRandom;

use crate::math::clamp;
use crate::{FieldError, Grid2D};

/// Parameters for [`TerrainField::generate`].
#[derive(Debug, Clone)]
pub struct TerrainParams {
    /// Overall ruggedness; scales every displacement.
    pub roughness: f64,
    /// Subdivision stops once sub-square sides reach this size; 0 is
    /// treated as 1.
    pub unit_size: usize,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            roughness: 20.0,
            unit_size: 1,
        }
    }
}

/// Midpoint-displacement height-field generator.
#[derive(Debug, Clone, Default)]
pub struct TerrainField {
    params: TerrainParams,
}

impl TerrainField {
    /// Creates a generator with the given parameters.
    #[must_use]
    pub fn new(params: TerrainParams) -> Self {
        Self { params }
    }

    /// Generates a height-field covering at least `width`×`height`.
    ///
    /// The grid side is the next power of two ≥ the larger extent
    /// (minimum 2, so midpoints stay on the lattice), plus one: a
    /// 10×10 request yields a 17×17 grid. All interior values land in
    /// `[0, 1]` after the final normalization; border cells may fall
    /// below the interior minimum and are only clamped from above.
    pub fn generate(
        &self,
        width: usize,
        height: usize,
        rand: &mut SeededRandom,
    ) -> Result<Grid2D, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimension { width, height });
        }

        let unit = self.params.unit_size.max(1);
        let dimension = width.max(height).next_power_of_two().max(2);

        let mut map = Grid2D::new(dimension + 1, dimension + 1);
        self.seed_corners(&mut map, dimension, rand);
        self.subdivide(&mut map, dimension, dimension, unit, rand);
        finalize(&mut map, dimension);
        Ok(map)
    }

    /// Seeds the four corners from the generator, then the center and
    /// the four edge midpoints as displaced neighbor averages.
    fn seed_corners(&self, map: &mut Grid2D, dimension: usize, rand: &mut SeededRandom) {
        let top_left = rand.next_f64();
        map.set(0, 0, top_left);

        let bottom_left = rand.next_f64();
        map.set(0, dimension, bottom_left);

        let top_right = rand.next_f64();
        map.set(dimension, 0, top_right);

        let bottom_right = rand.next_f64();
        map.set(dimension, dimension, bottom_right);

        let mid = dimension / 2;
        let center = clamp(
            (top_left + top_right + bottom_left + bottom_right) / 4.0
                + self.displace(dimension, dimension, rand),
            0.0,
            1.0,
        );
        map.set(mid, mid, center);

        let bottom = (bottom_left + bottom_right + center) / 3.0
            + self.displace(dimension, dimension, rand);
        map.set(mid, dimension, clamp(bottom, 0.0, 1.0));

        let top =
            (top_left + top_right + center) / 3.0 + self.displace(dimension, dimension, rand);
        map.set(mid, 0, clamp(top, 0.0, 1.0));

        let right =
            (top_right + bottom_right + center) / 3.0 + self.displace(dimension, dimension, rand);
        map.set(dimension, mid, clamp(right, 0.0, 1.0));

        let left =
            (top_left + bottom_left + center) / 3.0 + self.displace(dimension, dimension, rand);
        map.set(0, mid, clamp(left, 0.0, 1.0));
    }

    /// One subdivision level over every square of side `side / 2`,
    /// then recursion until sides reach the unit size.
    fn subdivide(
        &self,
        map: &mut Grid2D,
        dimension: usize,
        side: usize,
        unit: usize,
        rand: &mut SeededRandom,
    ) {
        let half = side / 2;
        if half <= unit {
            return;
        }
        let quarter = half / 2;

        let mut i = half;
        while i <= dimension {
            let mut j = half;
            while j <= dimension {
                let cx = i - quarter;
                let cy = j - quarter;

                let top_left = map.get(i - half, j - half);
                let top_right = map.get(i, j - half);
                let bottom_left = map.get(i - half, j);
                let bottom_right = map.get(i, j);

                // Diamond step: the square's center.
                let center = clamp(
                    (top_left + top_right + bottom_left + bottom_right) / 4.0
                        + self.displace(side, dimension, rand),
                    0.0,
                    1.0,
                );
                map.set(cx, cy, center);

                // Square step: edge midpoints average three known
                // neighbors, or four where a neighbor beyond the square
                // is read. Interior bottom/right midpoints are
                // provisional: the adjacent square recomputes them as
                // its top/left midpoint and the later write wins, with
                // every displacement draw kept in sequence.
                let top = if j + quarter > 2 * half {
                    (top_left + top_right + center + map.get(cx, j + quarter - 2 * half)) / 4.0
                } else {
                    (top_left + top_right + center) / 3.0
                } + self.displace(side, dimension, rand);
                map.set(cx, j - half, clamp(top, 0.0, 1.0));

                let bottom = if j + quarter < dimension {
                    (bottom_left + bottom_right + center + map.get(cx, j + quarter)) / 4.0
                } else {
                    (bottom_left + bottom_right + center) / 3.0
                } + self.displace(side, dimension, rand);
                map.set(cx, j, clamp(bottom, 0.0, 1.0));

                let right = if i + quarter < dimension {
                    (top_right + bottom_right + center + map.get(i + quarter, cy)) / 4.0
                } else {
                    (top_right + bottom_right + center) / 3.0
                } + self.displace(side, dimension, rand);
                map.set(i, cy, clamp(right, 0.0, 1.0));

                let left = if i + quarter > 2 * half {
                    (top_left + bottom_left + center + map.get(i + quarter - 2 * half, cy)) / 4.0
                } else {
                    (top_left + bottom_left + center) / 3.0
                } + self.displace(side, dimension, rand);
                map.set(i - half, cy, clamp(left, 0.0, 1.0));

                j += half;
            }
            i += half;
        }

        self.subdivide(map, dimension, half, unit, rand);
    }

    /// Displacement for a parent square of side `side`: shrinks
    /// proportionally with the subdivision size.
    fn displace(&self, side: usize, dimension: usize, rand: &mut SeededRandom) -> f64 {
        let magnitude = side as f64 / (2.0 * dimension as f64) * self.params.roughness;
        (rand.next_f64() - 0.5) * magnitude
    }
}

/// Final normalization: min/max over the interior (borders excluded
/// from the scan, included in the remap), with residual overflow
/// clamped to 1 and the constant-field case collapsing to zero.
fn finalize(map: &mut Grid2D, dimension: usize) {
    let mut min = 1.0_f64;
    let mut max = 0.0_f64;
    for x in 1..dimension {
        for y in 1..dimension {
            let value = map.get(x, y);
            if max < value {
                max = value;
            }
            if min > value {
                min = value;
            }
        }
    }

    let span = max - min;
    if span == 0.0 {
        map.fill(0.0);
        return;
    }

    for x in 0..=dimension {
        for y in 0..=dimension {
            let value = (map.get(x, y) - min) / span;
            map.set(x, y, value.min(1.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TerrainField, TerrainParams};
    use crate::FieldError;
    use loam_rand::SeededRandom;

    #[test]
    fn test_dimension_rounds_up_to_power_of_two() {
        let mut rand = SeededRandom::from_seed(42);
        let map = TerrainField::default()
            .generate(10, 10, &mut rand)
            .expect("valid dimensions");

        assert_eq!(map.width(), 17);
        assert_eq!(map.height(), 17);
    }

    #[test]
    fn test_interior_is_normalized() {
        let mut rand = SeededRandom::from_seed(42);
        let map = TerrainField::default()
            .generate(10, 10, &mut rand)
            .expect("valid dimensions");

        for x in 1..16 {
            for y in 1..16 {
                let value = map.get(x, y);
                assert!(value.is_finite());
                assert!((0.0..=1.0).contains(&value), "out of range: {value}");
            }
        }
        // Borders join the remap but are only clamped from above.
        for &value in map.values() {
            assert!(value.is_finite());
            assert!(value <= 1.0);
        }
    }

    #[test]
    fn test_deterministic() {
        let mut a = SeededRandom::from_seed(7);
        let mut b = SeededRandom::from_seed(7);
        let first = TerrainField::default()
            .generate(20, 12, &mut a)
            .expect("valid dimensions");
        let second = TerrainField::default()
            .generate(20, 12, &mut b)
            .expect("valid dimensions");

        for (u, v) in first.values().iter().zip(second.values()) {
            assert_eq!(u.to_bits(), v.to_bits());
        }
    }

    #[test]
    fn test_zero_dimension_is_invalid() {
        let mut rand = SeededRandom::from_seed(1);
        let result = TerrainField::default().generate(0, 10, &mut rand);
        assert_eq!(
            result.err(),
            Some(FieldError::InvalidDimension {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_zero_unit_size_treated_as_one() {
        let mut a = SeededRandom::from_seed(9);
        let mut b = SeededRandom::from_seed(9);
        let zero = TerrainField::new(TerrainParams {
            unit_size: 0,
            ..TerrainParams::default()
        })
        .generate(16, 16, &mut a)
        .expect("valid dimensions");
        let one = TerrainField::new(TerrainParams {
            unit_size: 1,
            ..TerrainParams::default()
        })
        .generate(16, 16, &mut b)
        .expect("valid dimensions");

        assert_eq!(zero.values(), one.values());
    }

    #[test]
    fn test_larger_unit_size_stops_early() {
        let mut a = SeededRandom::from_seed(3);
        let mut b = SeededRandom::from_seed(3);
        let coarse = TerrainField::new(TerrainParams {
            unit_size: 8,
            ..TerrainParams::default()
        })
        .generate(32, 32, &mut a)
        .expect("valid dimensions");
        let fine = TerrainField::default()
            .generate(32, 32, &mut b)
            .expect("valid dimensions");

        // Fewer subdivision levels draw fewer values, so the fields
        // genuinely differ.
        assert_eq!(coarse.width(), fine.width());
        assert_ne!(coarse.values(), fine.values());
    }

    #[test]
    fn test_small_request_still_generates() {
        let mut rand = SeededRandom::from_seed(11);
        let map = TerrainField::default()
            .generate(1, 1, &mut rand)
            .expect("valid dimensions");

        // Side is forced up to 2 so midpoints exist: a 3x3 grid.
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 3);
    }
}
