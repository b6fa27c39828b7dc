//! Seeded scalar pseudo-random source.
//!
//! A deliberately simple multiplicative congruential generator: fast,
//! reproducible, and statistically weak. Every other operation in the
//! workspace composes its draws, so the exact update formula (including
//! the 32-bit truncation of the product) is part of the determinism
//! contract and must not be "fixed".

const MODULUS: i32 = 2_147_483_647;
const MULTIPLIER: i64 = 36_873;

/// Deterministic scalar random source driven by a single `i32` seed.
///
/// Draws are normally in `[0, 1)`, but the 32-bit truncation of the
/// state update can push the state (and therefore the returned value)
/// negative. Callers relying on the conventional range should treat
/// that as part of the generator's character rather than an error.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: i32,
    initial_seed: i32,
}

impl SeededRandom {
    /// Creates a generator from an explicit seed. No draw occurs.
    #[must_use]
    pub fn from_seed(seed: i32) -> Self {
        Self {
            seed,
            initial_seed: seed,
        }
    }

    /// Creates a generator seeded from a non-deterministic source.
    ///
    /// The entropy source is used exactly once, for the initial seed;
    /// all subsequent draws are fully determined by it.
    #[must_use]
    pub fn from_entropy() -> Self {
        use rand::Rng;

        Self::from_seed(rand::rng().random_range(0..MODULUS))
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn initial_seed(&self) -> i32 {
        self.initial_seed
    }

    /// Restores the state this generator was created with.
    pub fn reset(&mut self) {
        self.seed = self.initial_seed;
    }

    /// Advances the state: `truncate32((seed + shift + 1) * 36873) % 2147483647`.
    ///
    /// The product is exact in 64-bit arithmetic before the wrapping
    /// cast, so the sequence is identical on every platform.
    fn advance(&mut self, shift: i64) -> i32 {
        let product = (i64::from(self.seed) + shift + 1).wrapping_mul(MULTIPLIER);
        self.seed = (product as i32) % MODULUS;
        self.seed
    }

    /// Draws the next value, nominally in `[0, 1)`.
    ///
    /// This is the sole state-advancing primitive; every other draw
    /// composes it.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.advance(0)) / f64::from(MODULUS)
    }

    /// Draws the next value with an external perturbation mixed into the
    /// state update, e.g. a loop index that should influence the
    /// sequence without being drawn from it.
    pub fn next_f64_offset(&mut self, offset: i32) -> f64 {
        f64::from(self.advance(i64::from(offset))) / f64::from(MODULUS)
    }

    /// Draws a boolean with even odds.
    pub fn next_bool(&mut self) -> bool {
        self.next_f64() >= 0.5
    }

    /// Draws a value in `[min, max)`.
    ///
    /// No ordering is required between the bounds; with `min > max` the
    /// result simply falls outside the conventional range.
    pub fn next_between(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Two-stage draw biased toward `min`: the first draw scales the
    /// span, the second scales that intermediate value.
    pub fn next_biased(&mut self, min: f64, max: f64) -> f64 {
        let r = self.next_f64() * (max - min);
        min + self.next_f64() * r
    }
}
