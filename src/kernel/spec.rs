//! Serializable choice between the concrete kernels

use crate::core::Result;
use crate::kernel::{GaussianKernel, Kernel, PolynomialKernel};
use serde::{Deserialize, Serialize};

/// One of the concrete kernels, chosen at run time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KernelSpec {
    Polynomial(PolynomialKernel),
    Gaussian(GaussianKernel),
}

impl KernelSpec {
    /// Polynomial kernel (<x,y> + offset)^degree
    pub fn polynomial(degree: u32, offset: f64) -> Result<Self> {
        Ok(Self::Polynomial(PolynomialKernel::with_offset(
            degree, offset,
        )?))
    }

    /// Gaussian kernel exp(-||x-y||² / width)
    pub fn gaussian(width: f64) -> Result<Self> {
        Ok(Self::Gaussian(GaussianKernel::new(width)?))
    }

    /// Re-check hyperparameters, e.g. after deserializing from an untrusted file
    pub fn validated(self) -> Result<Self> {
        match self {
            Self::Polynomial(k) => Self::polynomial(k.degree(), k.offset()),
            Self::Gaussian(k) => Self::gaussian(k.width()),
        }
    }

    /// Family name used in plot titles
    pub fn family(&self) -> &'static str {
        match self {
            Self::Polynomial(_) => "Polynomial",
            Self::Gaussian(_) => "Gaussian",
        }
    }
}

impl Default for KernelSpec {
    fn default() -> Self {
        Self::Polynomial(PolynomialKernel::cubic())
    }
}

impl From<PolynomialKernel> for KernelSpec {
    fn from(kernel: PolynomialKernel) -> Self {
        Self::Polynomial(kernel)
    }
}

impl From<GaussianKernel> for KernelSpec {
    fn from(kernel: GaussianKernel) -> Self {
        Self::Gaussian(kernel)
    }
}

impl Kernel for KernelSpec {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        match self {
            Self::Polynomial(k) => k.compute(x, y),
            Self::Gaussian(k) => k.compute(x, y),
        }
    }

    fn name(&self) -> String {
        match self {
            Self::Polynomial(k) => k.name(),
            Self::Gaussian(k) => k.name(),
        }
    }
}
