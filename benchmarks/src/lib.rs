//! Synthetic data for benchmarking the least-squares fit and prediction.
//!
//! Values are drawn from a seeded RNG so every benchmark run sees the same inputs.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// GDP-per-capita-like feature with a noisy linear life-satisfaction target.
///
/// Returns `x` of shape `(n_samples, 1)` and `y` of shape `(n_samples,)`.
pub fn synthetic_lifesat(n_samples: usize, seed: u64) -> (Array2<f64>, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut x = Array2::zeros((n_samples, 1));
    let mut y = Array1::zeros(n_samples);

    for i in 0..n_samples {
        let gdp = rng.random_range(20_000.0..60_000.0);
        x[[i, 0]] = gdp;
        y[i] = 3.75 + 6.78e-5 * gdp + rng.random_range(-0.3..0.3);
    }
    (x, y)
}

/// `n_features` independent uniform features with random true weights plus noise.
pub fn synthetic_regression(
    n_samples: usize,
    n_features: usize,
    seed: u64,
) -> (Array2<f64>, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let weights: Vec<f64> = (0..n_features)
        .map(|_| rng.random_range(-2.0..2.0))
        .collect();

    let mut x = Array2::zeros((n_samples, n_features));
    let mut y = Array1::zeros(n_samples);
    for i in 0..n_samples {
        let mut target = 1.0;
        for (j, w) in weights.iter().enumerate() {
            let v = rng.random_range(-10.0..10.0);
            x[[i, j]] = v;
            target += w * v;
        }
        y[i] = target + rng.random_range(-0.1..0.1);
    }
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_lifesat_shape_and_determinism() {
        let (x1, y1) = synthetic_lifesat(50, 7);
        let (x2, y2) = synthetic_lifesat(50, 7);
        assert_eq!(x1.shape(), &[50, 1]);
        assert_eq!(y1.len(), 50);
        assert_eq!(x1, x2);
        assert_eq!(y1, y2);
    }

    #[test]
    fn test_synthetic_regression_shape() {
        let (x, y) = synthetic_regression(20, 4, 1);
        assert_eq!(x.shape(), &[20, 4]);
        assert_eq!(y.len(), 20);
    }
}
