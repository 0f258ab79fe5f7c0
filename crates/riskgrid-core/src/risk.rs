//! Risk penalty sampling.
//!
//! Risky cells carry a surcharge drawn once, when the cell becomes risky,
//! from a uniform distribution scaled by the grid's diagonal extent. The
//! random source is always supplied by the caller.

use rand::{Rng, RngExt};

use crate::geom::Bounds;

/// Parameters of the risk distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskConfig {
    /// Upper bound of a risk value, as a fraction of the diagonal extent.
    pub diagonal_fraction: f64,
    /// Lower bound of a risk value, as a fraction of the upper bound.
    pub min_factor: f64,
    /// Length of one cell side in extent units. `1.0` measures the diagonal
    /// in grid steps; a pixel size measures it in pixels.
    pub cell_size: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            diagonal_fraction: 0.1,
            min_factor: 0.1,
            cell_size: 1.0,
        }
    }
}

/// Draws risk values for one grid size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskSampler {
    min: f64,
    max: f64,
}

impl RiskSampler {
    /// Build the sampler for a grid of the given extent.
    pub fn new(bounds: Bounds, config: &RiskConfig) -> Self {
        let extent = bounds.diagonal() * config.cell_size.max(0.0);
        let max = (config.diagonal_fraction * extent).max(0.0);
        let min = (config.min_factor.clamp(0.0, 1.0) * max).min(max);
        Self { min, max }
    }

    /// Smallest value [`sample`](Self::sample) can return.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest value [`sample`](Self::sample) can return.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Draw one risk value in `[min, max]`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max <= self.min {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn bounds_follow_diagonal() {
        let s = RiskSampler::new(Bounds::new(30, 40), &RiskConfig::default());
        assert!((s.max() - 5.0).abs() < 1e-9);
        assert!((s.min() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn pixel_extent_matches_window_constant() {
        // 20x20 cells of 30px each span a 600x600 window.
        let cfg = RiskConfig {
            cell_size: 30.0,
            ..RiskConfig::default()
        };
        let s = RiskSampler::new(Bounds::new(20, 20), &cfg);
        let expected = 0.1 * (600.0f64 * 600.0 * 2.0).sqrt();
        assert!((s.max() - expected).abs() < 1e-9);
    }

    #[test]
    fn samples_stay_in_range() {
        let s = RiskSampler::new(Bounds::new(20, 20), &RiskConfig::default());
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let r = s.sample(&mut rng);
            assert!(r >= s.min() && r <= s.max());
        }
    }

    #[test]
    fn seeded_samples_are_reproducible() {
        let s = RiskSampler::new(Bounds::new(10, 10), &RiskConfig::default());
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let xs: Vec<f64> = (0..16).map(|_| s.sample(&mut a)).collect();
        let ys: Vec<f64> = (0..16).map(|_| s.sample(&mut b)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn degenerate_range_returns_min() {
        let s = RiskSampler::new(Bounds::new(0, 0), &RiskConfig::default());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(s.sample(&mut rng), 0.0);
    }
}
