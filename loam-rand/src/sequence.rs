//! 1D sequence generation.
//!
//! Thin draw layer over [`SeededRandom`]: each operation draws the raw
//! samples (including any lookahead the filter needs) and hands them to
//! the pure transforms in [`crate::filter`]. A zero length yields an
//! empty sequence, never an error.
//!
//! Whether a ranged sequence is fractional or rounded to the nearest
//! integer is an explicit choice between two named operations, decided
//! by the caller rather than sniffed from the bounds.

use crate::{SeededRandom, filter};

impl SeededRandom {
    /// `length` independent raw draws.
    pub fn samples(&mut self, length: usize) -> Vec<f64> {
        (0..length).map(|_| self.next_f64()).collect()
    }

    /// `length` independent draws in `[min, max)`.
    pub fn ranged_samples(&mut self, min: f64, max: f64, length: usize) -> Vec<f64> {
        (0..length).map(|_| self.next_between(min, max)).collect()
    }

    /// Ranged draws rounded to the nearest integer.
    pub fn rounded_samples(&mut self, min: f64, max: f64, length: usize) -> Vec<f64> {
        (0..length)
            .map(|_| self.next_between(min, max).round())
            .collect()
    }

    /// `length` draws biased toward `min`.
    pub fn biased_samples(&mut self, min: f64, max: f64, length: usize) -> Vec<f64> {
        (0..length).map(|_| self.next_biased(min, max)).collect()
    }

    /// Biased draws rounded to the nearest integer.
    pub fn biased_rounded_samples(&mut self, min: f64, max: f64, length: usize) -> Vec<f64> {
        (0..length)
            .map(|_| self.next_biased(min, max).round())
            .collect()
    }

    /// `length` draws in `(-1, 1)`.
    pub fn bipolar_samples(&mut self, length: usize) -> Vec<f64> {
        (0..length).map(|_| self.next_f64() * 2.0 - 1.0).collect()
    }

    /// Ranged sequence through one smoothing pass.
    ///
    /// Draws one lookahead sample so every output, including the last,
    /// pairs with a real successor.
    pub fn smoothed_samples(&mut self, min: f64, max: f64, length: usize) -> Vec<f64> {
        let raw = self.ranged_samples(min, max, length + 1);
        let mut out = filter::smooth(&raw);
        out.truncate(length);
        out
    }

    /// Ranged sequence through two chained smoothing passes, drawing two
    /// lookahead samples.
    pub fn double_smoothed_samples(&mut self, min: f64, max: f64, length: usize) -> Vec<f64> {
        let raw = self.ranged_samples(min, max, length + 2);
        let mut out = filter::smooth(&filter::smooth(&raw));
        out.truncate(length);
        out
    }

    /// Red noise: bipolar draws through the integrating filter.
    pub fn red_samples(&mut self, length: usize) -> Vec<f64> {
        let raw = self.bipolar_samples(length + 1);
        let mut out = filter::red(&raw);
        out.truncate(length);
        out
    }

    /// Pink noise: bipolar draws through the differencing filter.
    pub fn pink_samples(&mut self, length: usize) -> Vec<f64> {
        let raw = self.bipolar_samples(length + 1);
        let mut out = filter::pink(&raw);
        out.truncate(length);
        out
    }

    /// Bipolar draws through the neighbor-minimum filter.
    pub fn adjacent_min_samples(&mut self, length: usize) -> Vec<f64> {
        filter::adjacent_min(&self.bipolar_samples(length))
    }

    /// Bipolar draws through the neighbor-maximum filter.
    pub fn adjacent_max_samples(&mut self, length: usize) -> Vec<f64> {
        filter::adjacent_max(&self.bipolar_samples(length))
    }

    /// Bipolar draws through the neighbor-average filter.
    pub fn adjacent_mean_samples(&mut self, length: usize) -> Vec<f64> {
        filter::adjacent_mean(&self.bipolar_samples(length))
    }
}

#[cfg(test)]
mod tests {
    use crate::{SeededRandom, filter};

    #[test]
    fn test_lengths() {
        let mut rand = SeededRandom::from_seed(3);

        assert_eq!(rand.samples(10).len(), 10);
        assert_eq!(rand.ranged_samples(0.0, 5.0, 7).len(), 7);
        assert_eq!(rand.bipolar_samples(12).len(), 12);
        assert_eq!(rand.smoothed_samples(0.0, 1.0, 9).len(), 9);
        assert_eq!(rand.double_smoothed_samples(0.0, 1.0, 9).len(), 9);
        assert_eq!(rand.red_samples(4).len(), 4);
        assert_eq!(rand.pink_samples(4).len(), 4);
        assert_eq!(rand.adjacent_mean_samples(6).len(), 6);
    }

    #[test]
    fn test_zero_length_is_empty() {
        let mut rand = SeededRandom::from_seed(3);

        assert!(rand.samples(0).is_empty());
        assert!(rand.ranged_samples(1.0, 2.0, 0).is_empty());
        assert!(rand.smoothed_samples(1.0, 2.0, 0).is_empty());
        assert!(rand.red_samples(0).is_empty());
    }

    #[test]
    fn test_samples_match_scalar_draws() {
        let mut seq = SeededRandom::from_seed(11);
        let samples = seq.samples(32);

        let mut scalar = SeededRandom::from_seed(11);
        for value in samples {
            assert_eq!(value.to_bits(), scalar.next_f64().to_bits());
        }
    }

    #[test]
    fn test_rounded_samples_are_integers() {
        let mut rand = SeededRandom::from_seed(5);
        for value in rand.rounded_samples(0.0, 255.0, 64) {
            assert_eq!(value.to_bits(), value.round().to_bits());
        }
    }

    #[test]
    fn test_bipolar_matches_scalar_draws() {
        let mut seq = SeededRandom::from_seed(5);
        let bipolar = seq.bipolar_samples(64);

        let mut scalar = SeededRandom::from_seed(5);
        for value in bipolar {
            let expected = scalar.next_f64() * 2.0 - 1.0;
            assert_eq!(value.to_bits(), expected.to_bits());
        }
    }

    #[test]
    fn test_smoothed_matches_filter_over_lookahead() {
        let mut seq = SeededRandom::from_seed(7);
        let smoothed = seq.smoothed_samples(0.0, 1.0, 5);

        let mut raw_rand = SeededRandom::from_seed(7);
        let raw = raw_rand.ranged_samples(0.0, 1.0, 6);
        for j in 0..5 {
            assert_eq!(smoothed[j].to_bits(), raw[j].min(raw[j + 1]).to_bits());
        }
    }

    #[test]
    fn test_double_smoothed_matches_two_passes() {
        let mut seq = SeededRandom::from_seed(9);
        let smoothed = seq.double_smoothed_samples(0.0, 1.0, 5);

        let mut raw_rand = SeededRandom::from_seed(9);
        let raw = raw_rand.ranged_samples(0.0, 1.0, 7);
        let twice = filter::smooth(&filter::smooth(&raw));
        assert_eq!(smoothed, twice[..5].to_vec());
    }

    #[test]
    fn test_red_matches_filter_over_lookahead() {
        let mut seq = SeededRandom::from_seed(13);
        let reddened = seq.red_samples(8);

        let mut raw_rand = SeededRandom::from_seed(13);
        let raw = raw_rand.bipolar_samples(9);
        let filtered = filter::red(&raw);
        assert_eq!(reddened, filtered[..8].to_vec());
    }
}
