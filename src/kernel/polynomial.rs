//! Polynomial Kernel Implementation
//!
//! The polynomial kernel is defined as:
//! k(x, y) = (<x, y> + r)^d
//!
//! Where:
//! - r (offset): independent term, 1 by default
//! - d (degree): positive integer degree
//!
//! Common configurations:
//! - Affine linear regression: d=1, r=1
//! - Plain linear kernel: d=1, r=0
//! - Cubic kernel: d=3, r=1

use crate::core::{KrrError, Result};
use crate::kernel::traits::{dot_product, Kernel};
use serde::{Deserialize, Serialize};

/// Polynomial kernel with configurable degree and offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolynomialKernel {
    degree: u32,
    offset: f64,
}

impl PolynomialKernel {
    /// Creates the kernel (<x,y> + 1)^d
    ///
    /// # Examples
    /// ```
    /// use krr::kernel::{Kernel, PolynomialKernel};
    ///
    /// let cubic = PolynomialKernel::new(3).unwrap();
    /// // (1*2 + 1)^3 = 27
    /// assert_eq!(cubic.compute(&[1.0], &[2.0]), 27.0);
    /// ```
    pub fn new(degree: u32) -> Result<Self> {
        Self::with_offset(degree, 1.0)
    }

    /// Creates the kernel (<x,y> + offset)^d
    ///
    /// # Errors
    /// `InvalidParameter` when the degree is zero or the offset is not finite
    pub fn with_offset(degree: u32, offset: f64) -> Result<Self> {
        if degree == 0 {
            return Err(KrrError::InvalidParameter(
                "Polynomial degree must be positive".to_string(),
            ));
        }
        if !offset.is_finite() {
            return Err(KrrError::InvalidParameter(format!(
                "Polynomial offset must be finite, got: {offset}"
            )));
        }
        Ok(Self { degree, offset })
    }

    /// Creates a cubic kernel: (<x,y> + 1)³
    pub fn cubic() -> Self {
        Self {
            degree: 3,
            offset: 1.0,
        }
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl Kernel for PolynomialKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        // Integer power keeps negative bases well defined for odd degrees
        (dot_product(x, y) + self.offset).powi(self.degree as i32)
    }

    fn name(&self) -> String {
        format!("polynomial(degree={}, offset={})", self.degree, self.offset)
    }
}
