//! High-level API for kernel ridge regression
//!
//! This module provides a builder for fitting models and regression
//! metrics for judging them.
//!
//! # Quick Start
//!
//! ```rust
//! use krr::api::KernelRidge;
//! use krr::core::{KernelModel, TrainingSet};
//! use krr::kernel::PolynomialKernel;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xs = [0.0, 0.25, 0.5, 0.75];
//! let ts = [0.0, 1.0, 0.0, -1.0];
//! let training = TrainingSet::from_scalars(&xs, &ts)?;
//!
//! let model = KernelRidge::with_kernel(PolynomialKernel::cubic())
//!     .with_lambda(0.001)
//!     .fit(&training)?;
//!
//! let predictions = model.predict_batch(training.inputs())?;
//! assert_eq!(predictions.len(), 4);
//! # Ok(())
//! # }
//! ```

use crate::core::{KernelModel, KrrError, RegressionConfig, Result, TrainingSet};
use crate::kernel::{Kernel, PolynomialKernel};
use crate::model::{self, FittedModel};
use std::sync::Arc;

/// Kernel ridge regression with builder pattern
pub struct KernelRidge<K: Kernel = PolynomialKernel> {
    kernel: K,
    config: RegressionConfig,
}

impl KernelRidge<PolynomialKernel> {
    /// Cubic polynomial kernel with default regularization
    pub fn new() -> Self {
        Self::with_kernel(PolynomialKernel::cubic())
    }
}

impl Default for KernelRidge<PolynomialKernel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kernel> KernelRidge<K> {
    /// Create a regressor with a custom kernel
    pub fn with_kernel(kernel: K) -> Self {
        Self {
            kernel,
            config: RegressionConfig::default(),
        }
    }

    /// Set regularization parameter λ
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.config.lambda = lambda;
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: RegressionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RegressionConfig {
        &self.config
    }

    /// Fit on a training set
    pub fn fit(self, training: &TrainingSet) -> Result<FittedModel<K>> {
        model::fit(Arc::new(self.kernel), self.config, training)
    }
}

impl<K: Kernel> FittedModel<K> {
    /// Regression metrics of this model's predictions on a labelled set
    pub fn evaluate(&self, data: &TrainingSet) -> Result<EvaluationMetrics> {
        let predictions = self.predict_batch(data.inputs())?;
        EvaluationMetrics::from_predictions(&predictions, data.targets())
    }
}

/// Regression error metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationMetrics {
    pub mse: f64,
    pub mae: f64,
    pub max_abs_error: f64,
    /// Coefficient of determination; 1.0 is a perfect fit
    pub r_squared: f64,
    pub n_samples: usize,
}

impl EvaluationMetrics {
    /// Compare predictions with targets of the same length
    pub fn from_predictions(predictions: &[f64], targets: &[f64]) -> Result<Self> {
        if predictions.len() != targets.len() {
            return Err(KrrError::DimensionMismatch {
                expected: targets.len(),
                actual: predictions.len(),
            });
        }
        if targets.is_empty() {
            return Err(KrrError::EmptyDataset);
        }

        let n = targets.len() as f64;
        let mut sse = 0.0;
        let mut sae = 0.0;
        let mut max_abs_error: f64 = 0.0;
        for (&p, &t) in predictions.iter().zip(targets) {
            let err = p - t;
            sse += err * err;
            sae += err.abs();
            max_abs_error = max_abs_error.max(err.abs());
        }

        let mean = targets.iter().sum::<f64>() / n;
        let sst: f64 = targets.iter().map(|t| (t - mean).powi(2)).sum();
        // Constant targets: only an exact fit explains them
        let r_squared = if sst == 0.0 {
            if sse == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - sse / sst
        };

        Ok(Self {
            mse: sse / n,
            mae: sae / n,
            max_abs_error,
            r_squared,
            n_samples: targets.len(),
        })
    }

    /// Root mean squared error
    pub fn rmse(&self) -> f64 {
        self.mse.sqrt()
    }
}

/// Convenience functions for quick operations
pub mod quick {
    use super::*;

    /// Fit 1-D data with a cubic polynomial kernel and the given λ
    pub fn fit_scalars(
        inputs: &[f64],
        targets: &[f64],
        lambda: f64,
    ) -> Result<FittedModel<PolynomialKernel>> {
        let training = TrainingSet::from_scalars(inputs, targets)?;
        KernelRidge::new().with_lambda(lambda).fit(&training)
    }

    /// Fit and predict the training inputs in one step
    pub fn fit_predict<K: Kernel>(
        kernel: K,
        lambda: f64,
        training: &TrainingSet,
    ) -> Result<Vec<f64>> {
        let model = KernelRidge::with_kernel(kernel)
            .with_lambda(lambda)
            .fit(training)?;
        model.predict_batch(training.inputs())
    }
}
