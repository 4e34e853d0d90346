//! Gaussian (RBF) kernel implementation
//!
//! The Gaussian kernel is defined as: k(x, y) = exp(-||x - y||² / c)
//! where c is the width parameter controlling how far each training point reaches.

use crate::core::{KrrError, Result};
use crate::kernel::traits::{squared_distance, Kernel};
use serde::{Deserialize, Serialize};

/// Gaussian kernel: k(x, y) = exp(-||x - y||² / c)
///
/// - Small width: only close points are similar (prone to overfitting)
/// - Large width: distant points still interact (prone to underfitting)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianKernel {
    width: f64,
}

impl GaussianKernel {
    /// Create a Gaussian kernel with the given width
    ///
    /// # Errors
    /// `InvalidParameter` unless the width is finite and strictly positive
    pub fn new(width: f64) -> Result<Self> {
        if !(width > 0.0 && width.is_finite()) {
            return Err(KrrError::InvalidParameter(format!(
                "Gaussian kernel width must be positive and finite, got: {width}"
            )));
        }
        Ok(Self { width })
    }

    /// Get the width parameter
    pub fn width(&self) -> f64 {
        self.width
    }
}

impl Kernel for GaussianKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        (-squared_distance(x, y) / self.width).exp()
    }

    fn name(&self) -> String {
        format!("gaussian(width={})", self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gaussian_kernel_creation() {
        let kernel = GaussianKernel::new(0.5).unwrap();
        assert_eq!(kernel.width(), 0.5);
    }

    #[test]
    fn test_gaussian_kernel_invalid_width() {
        for width in [0.0, -0.5, f64::INFINITY, f64::NAN] {
            assert!(
                matches!(
                    GaussianKernel::new(width),
                    Err(KrrError::InvalidParameter(_))
                ),
                "width {width} should be rejected"
            );
        }
    }

    #[test]
    fn test_gaussian_kernel_identical_points() {
        let kernel = GaussianKernel::new(1.0).unwrap();
        let x = [1.0, 2.0, 3.0];

        // k(x, x) is always 1
        assert_relative_eq!(kernel.compute(&x, &x), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_gaussian_kernel_value() {
        let kernel = GaussianKernel::new(2.0).unwrap();

        // ||x - y||² = (1 - 3)² = 4, k = exp(-4 / 2)
        let result = kernel.compute(&[1.0], &[3.0]);
        assert_relative_eq!(result, (-2.0_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_gaussian_kernel_symmetry() {
        let kernel = GaussianKernel::new(0.5).unwrap();
        let x = [1.0, 0.0, 2.0];
        let y = [0.0, 1.0, 3.0];
        assert_eq!(kernel.compute(&x, &y), kernel.compute(&y, &x));
    }

    #[test]
    fn test_gaussian_kernel_decays_with_distance() {
        let kernel = GaussianKernel::new(1.0).unwrap();
        let origin = [0.0];

        let k1 = kernel.compute(&origin, &[1.0]);
        let k2 = kernel.compute(&origin, &[2.0]);
        let k3 = kernel.compute(&origin, &[3.0]);

        assert!(k1 > k2);
        assert!(k2 > k3);
        assert!(k3 > 0.0 && k1 < 1.0);
    }

    #[test]
    fn test_gaussian_kernel_numerical_stability() {
        let kernel = GaussianKernel::new(1e-6).unwrap();
        let result = kernel.compute(&[1e6], &[-1e6]);
        assert!(result.is_finite());
        assert_eq!(result, 0.0);
    }
}
