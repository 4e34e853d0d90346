//! Synthetic data generation
//!
//! Produces a uniform grid on `[0, end)` with targets `sin(2πx)` plus
//! zero-mean Gaussian noise. Without a seed every call draws fresh noise.

use crate::core::{KrrError, Result, TrainingSet};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

/// Largest grid `uniform_grid` will build
pub const MAX_GRID_POINTS: usize = 100_000;

/// Settings for the noisy sinusoid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinusoidConfig {
    /// Grid spacing
    pub step: f64,
    /// Exclusive upper end of the grid
    pub end: f64,
    /// Standard deviation of the Gaussian noise
    pub noise_std: f64,
    /// Fixed seed for reproducible noise; entropy-seeded when `None`
    pub seed: Option<u64>,
}

impl Default for SinusoidConfig {
    fn default() -> Self {
        Self {
            step: 0.01,
            end: 1.0,
            noise_std: 0.1,
            seed: None,
        }
    }
}

/// Generated inputs with clean and noisy targets
#[derive(Debug, Clone)]
pub struct SinusoidData {
    pub inputs: Vec<f64>,
    /// Values of the data generating function
    pub true_targets: Vec<f64>,
    /// Observed targets: true targets plus noise
    pub noisy_targets: Vec<f64>,
}

impl SinusoidData {
    /// Training set over the noisy observations
    pub fn training_set(&self) -> Result<TrainingSet> {
        TrainingSet::from_scalars(&self.inputs, &self.noisy_targets)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// Grid `0, step, 2·step, …` strictly below `end`
pub fn uniform_grid(step: f64, end: f64) -> Result<Vec<f64>> {
    if !(step > 0.0 && step.is_finite()) {
        return Err(KrrError::InvalidParameter(format!(
            "Grid step must be positive and finite, got: {step}"
        )));
    }
    if !(end > 0.0 && end.is_finite()) {
        return Err(KrrError::InvalidParameter(format!(
            "Grid end must be positive and finite, got: {end}"
        )));
    }

    let expected = (end / step).ceil();
    if expected > MAX_GRID_POINTS as f64 {
        return Err(KrrError::InvalidParameter(format!(
            "Grid with step {step} and end {end} would exceed {MAX_GRID_POINTS} points"
        )));
    }

    // Index-based to avoid accumulating rounding error
    let grid: Vec<f64> = (0u64..)
        .map(|i| i as f64 * step)
        .take_while(|&x| x < end)
        .collect();
    Ok(grid)
}

/// Generate the noisy sinusoid dataset
pub fn generate_sinusoid(config: &SinusoidConfig) -> Result<SinusoidData> {
    if !(config.noise_std >= 0.0 && config.noise_std.is_finite()) {
        return Err(KrrError::InvalidParameter(format!(
            "Noise standard deviation must be non-negative and finite, got: {}",
            config.noise_std
        )));
    }
    let noise = Normal::new(0.0, config.noise_std).map_err(|e| {
        KrrError::InvalidParameter(format!(
            "Noise standard deviation {} rejected: {e}",
            config.noise_std
        ))
    })?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let inputs = uniform_grid(config.step, config.end)?;
    let true_targets: Vec<f64> = inputs.iter().map(|&x| (2.0 * PI * x).sin()).collect();
    let noisy_targets = true_targets
        .iter()
        .map(|&t| t + noise.sample(&mut rng))
        .collect();

    debug!(
        "Generated {} sinusoid points (noise_std={}, seed={:?})",
        inputs.len(),
        config.noise_std,
        config.seed
    );

    Ok(SinusoidData {
        inputs,
        true_targets,
        noisy_targets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_grid_has_one_hundred_points() {
        let grid = uniform_grid(0.01, 1.0).unwrap();
        assert_eq!(grid.len(), 100);
        assert_eq!(grid[0], 0.0);
        assert_relative_eq!(grid[99], 0.99, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_grid() {
        assert!(uniform_grid(0.0, 1.0).is_err());
        assert!(uniform_grid(-0.1, 1.0).is_err());
        assert!(uniform_grid(0.1, 0.0).is_err());
        assert!(uniform_grid(0.1, f64::INFINITY).is_err());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        assert!(matches!(
            uniform_grid(1e-12, 1.0),
            Err(KrrError::InvalidParameter(_))
        ));

        let config = SinusoidConfig {
            step: 1e-12,
            ..SinusoidConfig::default()
        };
        assert!(matches!(
            generate_sinusoid(&config),
            Err(KrrError::InvalidParameter(_))
        ));

        assert_eq!(uniform_grid(1e-4, 1.0).unwrap().len(), 10_000);
    }

    #[test]
    fn test_generate_sinusoid_shapes() {
        let data = generate_sinusoid(&SinusoidConfig::default()).unwrap();
        assert_eq!(data.len(), 100);
        assert_eq!(data.true_targets.len(), 100);
        assert_eq!(data.noisy_targets.len(), 100);
        assert_relative_eq!(data.true_targets[25], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = SinusoidConfig {
            seed: Some(7),
            ..SinusoidConfig::default()
        };
        let a = generate_sinusoid(&config).unwrap();
        let b = generate_sinusoid(&config).unwrap();
        assert_eq!(a.noisy_targets, b.noisy_targets);

        let other = generate_sinusoid(&SinusoidConfig {
            seed: Some(8),
            ..config
        })
        .unwrap();
        assert_ne!(a.noisy_targets, other.noisy_targets);
    }

    #[test]
    fn test_zero_noise_gives_true_targets() {
        let config = SinusoidConfig {
            noise_std: 0.0,
            ..SinusoidConfig::default()
        };
        let data = generate_sinusoid(&config).unwrap();
        assert_eq!(data.noisy_targets, data.true_targets);
    }

    #[test]
    fn test_noise_scale_is_plausible() {
        let config = SinusoidConfig {
            step: 0.001,
            seed: Some(42),
            ..SinusoidConfig::default()
        };
        let data = generate_sinusoid(&config).unwrap();
        let n = data.len() as f64;
        let var = data
            .noisy_targets
            .iter()
            .zip(&data.true_targets)
            .map(|(y, t)| (y - t).powi(2))
            .sum::<f64>()
            / n;
        assert!((0.07..0.13).contains(&var.sqrt()), "std = {}", var.sqrt());
    }

    #[test]
    fn test_negative_noise_rejected() {
        for noise_std in [-1.0, -1e-9, f64::NAN, f64::INFINITY] {
            let config = SinusoidConfig {
                noise_std,
                seed: Some(0),
                ..SinusoidConfig::default()
            };
            assert!(
                matches!(generate_sinusoid(&config), Err(KrrError::InvalidParameter(_))),
                "noise_std = {noise_std}"
            );
        }
    }

    #[test]
    fn test_training_set_uses_noisy_targets() {
        let data = generate_sinusoid(&SinusoidConfig {
            seed: Some(1),
            ..SinusoidConfig::default()
        })
        .unwrap();
        let training = data.training_set().unwrap();
        assert_eq!(training.targets(), data.noisy_targets.as_slice());
        assert_eq!(training.inputs().first_coordinates(), data.inputs);
    }
}
