//! Core traits for kernel ridge regression

use crate::core::{DataMatrix, Result};

/// Fitted kernel regression model
pub trait KernelModel: Send + Sync {
    /// Predict the output for a single point
    fn predict_point(&self, point: &[f64]) -> Result<f64>;

    /// Predict every point of a test set; output length equals `test.len()`
    fn predict_batch(&self, test: &DataMatrix) -> Result<Vec<f64>> {
        test.rows().map(|point| self.predict_point(point)).collect()
    }

    /// Number of training points the model expands over
    fn n_training_points(&self) -> usize;

    /// Regularization used when fitting
    fn lambda(&self) -> f64;
}
