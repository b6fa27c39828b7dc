//! Classic Perlin noise fields.
//!
//! Samples 3D-capable classic Perlin noise over a 2D grid: hash lookups
//! through a [`NoiseTable`], quintic fade, the 16-case bit-test gradient
//! function, and trilinear interpolation of the eight corner gradients,
//! accumulated over octaves and normalized to `[0, 1]`.

// Noise code uses mathematical single-letter variables (x, y, z, u, v, w)
#![allow(clippy::many_single_char_names)]

use loam_rand::SeededRandom;

use crate::math::{lerp3, smoothstep};
use crate::{Grid2D, NoiseTable};

/// Spacing of the sampling lattice: each grid step advances the noise
/// coordinate by 1/64, so 64 grid cells span one lattice cell.
const BASE_FACTOR: f64 = 1.0 / 64.0;

/// Parameters for [`PerlinField::generate`].
#[derive(Debug, Clone)]
pub struct PerlinParams {
    /// X offset into the noise domain, in grid units.
    pub origin_x: f64,
    /// Y offset into the noise domain, in grid units.
    pub origin_y: f64,
    /// Z offset into the noise domain; slices through the third
    /// dimension animate the field.
    pub origin_z: f64,
    /// Octave count; 0 is treated as 1.
    pub octaves: u32,
    /// Per-octave amplitude decay.
    pub falloff: f64,
}

impl Default for PerlinParams {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            origin_z: 0.0,
            octaves: 4,
            falloff: 0.5,
        }
    }
}

/// Multi-octave classic Perlin field generator.
#[derive(Debug, Clone, Default)]
pub struct PerlinField {
    params: PerlinParams,
}

impl PerlinField {
    /// Creates a generator with the given parameters.
    #[must_use]
    pub fn new(params: PerlinParams) -> Self {
        Self { params }
    }

    /// Generates a `width`×`height` field through the given lookup
    /// table. A zero extent yields an empty field.
    ///
    /// Emits a `log::warn!` diagnostic when the sampling coordinates
    /// cross exact lattice boundaries; artifacts can appear there, but
    /// generation continues.
    #[must_use]
    pub fn generate(&self, width: usize, height: usize, table: &NoiseTable) -> Grid2D {
        let mut field = Grid2D::new(width, height);
        if field.is_empty() {
            return field;
        }

        let octaves = self.params.octaves.max(1) as usize;
        let base_x = self.params.origin_x * BASE_FACTOR;
        let base_y = self.params.origin_y * BASE_FACTOR;
        let base_z = self.params.origin_z * BASE_FACTOR;

        warn_on_lattice_boundary(width, base_x, "x");
        warn_on_lattice_boundary(height, base_y, "y");

        let mut frequencies = Vec::with_capacity(octaves);
        let mut persistences = Vec::with_capacity(octaves);
        let mut pers_sum = 0.0;
        for i in 0..octaves {
            let pers = self.params.falloff.powi(i as i32);
            pers_sum += pers;
            frequencies.push(2.0_f64.powi(i as i32));
            persistences.push(pers);
        }
        let pers_max = 1.0 / pers_sum;

        let mut min = f64::INFINITY;
        let mut max = 0.0_f64;

        let mut y = base_y;
        for py in 0..height {
            let mut x = base_x;
            for px in 0..width {
                let mut sum = 0.0;
                for i in 0..octaves {
                    let sample = lattice_sample(
                        table,
                        x * frequencies[i],
                        y * frequencies[i],
                        base_z * frequencies[i],
                    );
                    sum += sample * persistences[i];
                }

                let value = sum * pers_max + 1.0;
                field.set(px, py, value);
                if max < value {
                    max = value;
                }
                if min > value {
                    min = value;
                }

                x += BASE_FACTOR;
            }
            y += BASE_FACTOR;
        }

        field.remap(min, max);
        field
    }

    /// Generates a field after synthesizing the lookup table from the
    /// given generator.
    #[must_use]
    pub fn generate_seeded(
        &self,
        width: usize,
        height: usize,
        rand: &mut SeededRandom,
    ) -> Grid2D {
        let table = NoiseTable::from_generator(rand);
        self.generate(width, height, &table)
    }
}

/// One classic Perlin sample: lattice hash lookups, fade, and the
/// trilinear blend of the eight corner gradients.
fn lattice_sample(table: &NoiseTable, x: f64, y: f64, z: f64) -> f64 {
    let xi = (x as i32) & 255;
    let yi = (y as i32) & 255;
    let zi = (z as i32) & 255;

    let a = table.at(xi) + yi;
    let aa = table.at(a) + zi;
    let ab = table.at(a + 1) + zi;
    let b = table.at(xi + 1) + yi;
    let ba = table.at(b) + zi;
    let bb = table.at(b + 1) + zi;

    // Sign-preserving fractional offsets, matching the truncated
    // lattice coordinates above.
    let x = x % 1.0;
    let y = y % 1.0;
    let z = z % 1.0;
    let x1 = x - 1.0;
    let y1 = y - 1.0;
    let z1 = z - 1.0;

    let g1 = corner_gradient(table.at(bb + 1) & 15, x1, y1, z1);
    let g2 = corner_gradient(table.at(ab + 1) & 15, x, y1, z1);
    let g3 = corner_gradient(table.at(ba + 1) & 15, x1, y, z1);
    let g4 = corner_gradient(table.at(aa + 1) & 15, x, y, z1);
    let g5 = corner_gradient(table.at(bb) & 15, x1, y1, z);
    let g6 = corner_gradient(table.at(ab) & 15, x, y1, z);
    let g7 = corner_gradient(table.at(ba) & 15, x1, y, z);
    let g8 = corner_gradient(table.at(aa) & 15, x, y, z);

    let u = smoothstep(x);
    let v = smoothstep(y);
    let w = smoothstep(z);

    lerp3(u, v, w, g8, g7, g6, g5, g4, g3, g2, g1)
}

/// Maps a 4-bit hash to one of the 12 classic gradient directions via
/// bit tests and returns its dot product with the offset.
fn corner_gradient(hash: i32, x: f64, y: f64, z: f64) -> f64 {
    let first = if hash & 1 == 0 {
        if hash < 8 { x } else { y }
    } else if hash < 8 {
        -x
    } else {
        -y
    };

    let second = if hash & 2 == 0 {
        if hash < 4 {
            y
        } else if hash == 12 {
            x
        } else {
            z
        }
    } else if hash < 4 {
        -y
    } else if hash == 14 {
        -x
    } else {
        -z
    };

    first + second
}

/// Flags sampling coordinates that land exactly on lattice boundaries,
/// where interpolation seams can show through.
fn warn_on_lattice_boundary(extent: usize, base: f64, axis: &str) {
    let steps = (extent as f64 * BASE_FACTOR).floor() as i32;
    for i in 1..=steps {
        if ((base + f64::from(i)) * BASE_FACTOR) % 1.0 == 0.0 {
            log::warn!("noise artifacts can appear for this {axis} origin");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PerlinField, PerlinParams, corner_gradient};
    use crate::NoiseTable;
    use loam_rand::SeededRandom;

    fn flat_table() -> NoiseTable {
        NoiseTable::new(vec![0; 512]).expect("non-empty")
    }

    #[test]
    fn test_deterministic_for_fixed_table() {
        let mut rand = SeededRandom::from_seed(77);
        let table = NoiseTable::from_generator(&mut rand);
        let field = PerlinField::default().generate(16, 16, &table);
        let twin = PerlinField::default().generate(16, 16, &table);

        for (a, b) in field.values().iter().zip(twin.values()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let mut a = SeededRandom::from_seed(123);
        let mut b = SeededRandom::from_seed(123);
        let field = PerlinField::default().generate_seeded(12, 9, &mut a);
        let twin = PerlinField::default().generate_seeded(12, 9, &mut b);

        assert_eq!(field.values(), twin.values());
    }

    #[test]
    fn test_output_is_normalized() {
        let mut rand = SeededRandom::from_seed(5);
        let field = PerlinField::default().generate_seeded(32, 24, &mut rand);

        assert_eq!(field.width(), 32);
        assert_eq!(field.height(), 24);
        for &value in field.values() {
            assert!(value.is_finite());
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_flat_table_produces_no_nan() {
        let field = PerlinField::new(PerlinParams {
            octaves: 1,
            ..PerlinParams::default()
        })
        .generate(4, 4, &flat_table());

        for &value in field.values() {
            assert!(value.is_finite());
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_single_cell_collapses_to_zero() {
        // One sample means min == max, which must take the constant
        // field path rather than divide by zero.
        let field = PerlinField::default().generate(1, 1, &flat_table());
        assert_eq!(field.get(0, 0).to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn test_zero_extent_is_empty() {
        let field = PerlinField::default().generate(0, 10, &flat_table());
        assert!(field.is_empty());
    }

    #[test]
    fn test_zero_octaves_treated_as_one() {
        let table = flat_table();
        let zero = PerlinField::new(PerlinParams {
            octaves: 0,
            ..PerlinParams::default()
        })
        .generate(6, 6, &table);
        let one = PerlinField::new(PerlinParams {
            octaves: 1,
            ..PerlinParams::default()
        })
        .generate(6, 6, &table);

        assert_eq!(zero.values(), one.values());
    }

    #[test]
    fn test_corner_gradient_axes() {
        // hash 0 selects the (1, 1, 0) direction.
        assert_eq!(corner_gradient(0, 2.0, 3.0, 5.0), 5.0);
        // hash 1 selects (-1, 1, 0).
        assert_eq!(corner_gradient(1, 2.0, 3.0, 5.0), 1.0);
        // hash 15 selects (0, -1, -1).
        assert_eq!(corner_gradient(15, 2.0, 3.0, 5.0), -8.0);
    }
}
