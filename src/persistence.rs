//! Model serialization and persistence
//!
//! A fitted model is fully described by its kernel, its training points and
//! its dual coefficients, so saving those is enough to predict again later.

use crate::core::{DataMatrix, KernelModel, KrrError, RegressionConfig, Result, SolveMethod};
use crate::kernel::{Kernel, KernelSpec};
use crate::model::FittedModel;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Serializable representation of a fitted model
#[derive(Debug, Serialize, Deserialize)]
pub struct SerializableModel {
    /// Kernel with its hyperparameters
    pub kernel: KernelSpec,
    /// Training points, one row per point
    pub training_points: Vec<Vec<f64>>,
    /// Dual coefficients aligned with `training_points`
    pub dual_coefficients: Vec<f64>,
    /// Model metadata
    pub metadata: ModelMetadata,
}

/// Model metadata for tracking and validation
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Library version used to create the model
    pub library_version: String,
    pub n_training_points: usize,
    pub lambda: f64,
    pub solve_method: SolveMethod,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl SerializableModel {
    /// Create a serializable model from a fitted model
    pub fn from_fitted_model(model: &FittedModel<KernelSpec>) -> Self {
        Self {
            kernel: *model.kernel(),
            training_points: model
                .training_inputs()
                .rows()
                .map(<[f64]>::to_vec)
                .collect(),
            dual_coefficients: model.coefficients().iter().copied().collect(),
            metadata: ModelMetadata {
                library_version: env!("CARGO_PKG_VERSION").to_string(),
                n_training_points: model.n_training_points(),
                lambda: model.lambda(),
                solve_method: model.solve_method(),
                created_at: chrono::Utc::now().to_rfc3339(),
            },
        }
    }

    /// Save model to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path).map_err(KrrError::IoError)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| KrrError::SerializationError(e.to_string()))?;
        Ok(())
    }

    /// Load model from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(KrrError::IoError)?;
        let reader = BufReader::new(file);
        let model = serde_json::from_reader(reader)
            .map_err(|e| KrrError::SerializationError(e.to_string()))?;
        Ok(model)
    }

    /// Convert back to a model that can predict
    pub fn to_fitted_model(&self) -> Result<FittedModel<KernelSpec>> {
        let kernel = self.kernel.validated()?;
        let inputs = DataMatrix::from_rows(self.training_points.clone())?;
        FittedModel::from_parts(
            kernel,
            inputs,
            DVector::from_column_slice(&self.dual_coefficients),
            RegressionConfig {
                lambda: self.metadata.lambda,
            },
            self.metadata.solve_method,
        )
    }

    /// Print model summary
    pub fn print_summary(&self) {
        println!("=== Kernel Ridge Model Summary ===");
        println!("Kernel: {}", self.kernel.name());
        println!("Training points: {}", self.metadata.n_training_points);
        println!("Lambda: {}", self.metadata.lambda);
        println!("Solver: {:?}", self.metadata.solve_method);
        println!("Library Version: {}", self.metadata.library_version);
        println!("Created: {}", self.metadata.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::KernelRidge;
    use crate::core::TrainingSet;
    use approx::assert_relative_eq;
    use tempfile::NamedTempFile;

    fn fitted() -> FittedModel<KernelSpec> {
        let xs = [0.0, 0.2, 0.4, 0.6, 0.8];
        let ts = [0.0, 0.95, 0.59, -0.59, -0.95];
        let training = TrainingSet::from_scalars(&xs, &ts).unwrap();
        KernelRidge::with_kernel(KernelSpec::gaussian(0.05).unwrap())
            .with_lambda(0.01)
            .fit(&training)
            .unwrap()
    }

    #[test]
    fn test_model_serialization() -> Result<()> {
        let model = fitted();
        let serializable = SerializableModel::from_fitted_model(&model);
        assert_eq!(serializable.metadata.n_training_points, 5);
        assert_eq!(serializable.dual_coefficients.len(), 5);

        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        serializable.save_to_file(temp_file.path())?;
        let loaded = SerializableModel::load_from_file(temp_file.path())?;

        assert_eq!(loaded.kernel, serializable.kernel);
        assert_relative_eq!(loaded.metadata.lambda, 0.01);

        let restored = loaded.to_fitted_model()?;
        let points = DataMatrix::from_scalars(&[0.1, 0.5, 0.7])?;
        let before = model.predict_batch(&points)?;
        let after = restored.predict_batch(&points)?;
        for (a, b) in before.iter().zip(&after) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_load_rejects_corrupt_file() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        std::fs::write(temp_file.path(), "not json").expect("Failed to write");

        assert!(matches!(
            SerializableModel::load_from_file(temp_file.path()),
            Err(KrrError::SerializationError(_))
        ));
    }

    #[test]
    fn test_to_fitted_model_checks_lengths() {
        let mut serializable = SerializableModel::from_fitted_model(&fitted());
        serializable.dual_coefficients.pop();

        assert!(matches!(
            serializable.to_fitted_model(),
            Err(KrrError::DimensionMismatch { .. })
        ));
    }
}
