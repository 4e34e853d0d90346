//! Fitting and prediction
//!
//! Fitting chains the Gram matrix builder and the dual solver. Prediction
//! expands a test point over the training points: y(s) = Σᵢ aᵢ·k(xᵢ, s)
//! (PRML eq. 6.9), which costs O(N) kernel evaluations per test point.

use crate::core::{
    DataMatrix, KernelModel, KrrError, RegressionConfig, Result, SolveMethod, TrainingSet,
};
use crate::gram::{cross_kernel_matrix, gram_matrix};
use crate::kernel::Kernel;
use crate::solver::solve_dual;
use log::info;
use nalgebra::DVector;
use std::sync::Arc;

/// Predict every point of `test` from training inputs, kernel and dual coefficients
///
/// Returns one prediction per test point, whatever the training size.
///
/// # Errors
/// `DimensionMismatch` if the coefficient count differs from the number of
/// training points or the test and training dimensions differ.
pub fn predict<K: Kernel + ?Sized>(
    test: &DataMatrix,
    train: &DataMatrix,
    kernel: &K,
    coefficients: &DVector<f64>,
) -> Result<Vec<f64>> {
    if coefficients.len() != train.len() {
        return Err(KrrError::DimensionMismatch {
            expected: train.len(),
            actual: coefficients.len(),
        });
    }

    let cross = cross_kernel_matrix(test, train, kernel)?;
    Ok((cross * coefficients).iter().copied().collect())
}

/// Fit dual coefficients for a training set
pub fn fit<K: Kernel>(
    kernel: Arc<K>,
    config: RegressionConfig,
    training: &TrainingSet,
) -> Result<FittedModel<K>> {
    if training.is_empty() {
        return Err(KrrError::EmptyDataset);
    }

    let gram = gram_matrix(training.inputs(), kernel.as_ref());
    let solution = solve_dual(&gram, config.lambda, training.targets())?;

    info!(
        "Fitted {} points with {} (lambda={}, solver={:?})",
        training.len(),
        kernel.name(),
        config.lambda,
        solution.method
    );

    Ok(FittedModel {
        kernel,
        inputs: training.inputs().clone(),
        coefficients: solution.coefficients,
        config,
        method: solution.method,
    })
}

/// A fitted kernel ridge regression model
pub struct FittedModel<K: Kernel> {
    kernel: Arc<K>,
    inputs: DataMatrix,
    coefficients: DVector<f64>,
    config: RegressionConfig,
    method: SolveMethod,
}

impl<K: Kernel> FittedModel<K> {
    /// Rebuild a model from stored parts
    pub(crate) fn from_parts(
        kernel: K,
        inputs: DataMatrix,
        coefficients: DVector<f64>,
        config: RegressionConfig,
        method: SolveMethod,
    ) -> Result<Self> {
        if coefficients.len() != inputs.len() {
            return Err(KrrError::DimensionMismatch {
                expected: inputs.len(),
                actual: coefficients.len(),
            });
        }
        Ok(Self {
            kernel: Arc::new(kernel),
            inputs,
            coefficients,
            config,
            method,
        })
    }

    /// Dual coefficients, one per training point
    pub fn coefficients(&self) -> &DVector<f64> {
        &self.coefficients
    }

    /// Training inputs the model expands over
    pub fn training_inputs(&self) -> &DataMatrix {
        &self.inputs
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn config(&self) -> &RegressionConfig {
        &self.config
    }

    /// Factorization used by the dual solve
    pub fn solve_method(&self) -> SolveMethod {
        self.method
    }
}

impl<K: Kernel> KernelModel for FittedModel<K> {
    fn predict_point(&self, point: &[f64]) -> Result<f64> {
        if point.len() != self.inputs.dim() {
            return Err(KrrError::DimensionMismatch {
                expected: self.inputs.dim(),
                actual: point.len(),
            });
        }

        Ok(self
            .inputs
            .rows()
            .zip(self.coefficients.iter())
            .map(|(x, a)| a * self.kernel.compute(x, point))
            .sum())
    }

    fn predict_batch(&self, test: &DataMatrix) -> Result<Vec<f64>> {
        predict(test, &self.inputs, self.kernel.as_ref(), &self.coefficients)
    }

    fn n_training_points(&self) -> usize {
        self.inputs.len()
    }

    fn lambda(&self) -> f64 {
        self.config.lambda
    }
}
