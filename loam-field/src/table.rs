//! Hash lookup table for lattice noise sampling.

use loam_rand::SeededRandom;

use crate::FieldError;

/// Entry count of a synthesized table.
pub const TABLE_SIZE: usize = 512;

/// Byte-range lookup table acting as both permutation and gradient
/// selector for Perlin sampling (the classic single-table trick).
///
/// Values stay in `[0, 255]` so that a value plus a masked lattice
/// coordinate is always a valid index into a full-size table; lookups
/// wrap for shorter caller-supplied tables.
#[derive(Debug, Clone)]
pub struct NoiseTable {
    entries: Vec<i32>,
}

impl NoiseTable {
    /// Builds a table from caller-supplied entries, reducing each value
    /// into the byte range.
    pub fn new(entries: Vec<i32>) -> Result<Self, FieldError> {
        if entries.is_empty() {
            return Err(FieldError::EmptyTable);
        }
        Ok(Self {
            entries: entries.into_iter().map(|value| value & 255).collect(),
        })
    }

    /// Synthesizes the standard 512-entry table: rounded draws over
    /// `[0, 255]` biased toward the low end.
    #[must_use]
    pub fn from_generator(rand: &mut SeededRandom) -> Self {
        let entries = rand
            .biased_rounded_samples(0.0, 255.0, TABLE_SIZE)
            .into_iter()
            .map(|value| (value as i32) & 255)
            .collect();
        Self { entries }
    }

    /// Synthesizes a table from a fresh entropy-seeded generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_generator(&mut SeededRandom::from_entropy())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries (never true once constructed).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wrapping lookup. Indices are non-negative by construction: they
    /// are sums of byte-range entries and masked lattice coordinates.
    pub(crate) fn at(&self, index: i32) -> i32 {
        self.entries[index as usize % self.entries.len()]
    }
}
