//! Core type definitions for kernel ridge regression

use crate::core::{KrrError, Result};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

/// Ordered collection of input points sharing one dimension
#[derive(Clone, Debug, PartialEq)]
pub struct DataMatrix {
    rows: Vec<Vec<f64>>,
    dim: usize,
}

impl DataMatrix {
    /// Create a data matrix from rows, checking that every row has the same length
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let dim = match rows.first() {
            Some(first) => first.len(),
            None => return Err(KrrError::EmptyDataset),
        };

        if dim == 0 {
            return Err(KrrError::InvalidParameter(
                "Points must have at least one dimension".to_string(),
            ));
        }

        if let Some(bad) = rows.iter().find(|row| row.len() != dim) {
            return Err(KrrError::DimensionMismatch {
                expected: dim,
                actual: bad.len(),
            });
        }

        Ok(Self { rows, dim })
    }

    /// Embed scalars as 1-D points
    pub fn from_scalars(values: &[f64]) -> Result<Self> {
        Self::from_rows(values.iter().map(|&v| vec![v]).collect())
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the matrix holds no points
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Dimension of every point
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Get a single point by index
    ///
    /// # Panics
    /// Panics if index >= len()
    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    /// Iterate over all points in order
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// First coordinate of every point, handy for 1-D data
    pub fn first_coordinates(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row[0]).collect()
    }
}

/// Training inputs paired with their targets, always of equal length
#[derive(Clone, Debug)]
pub struct TrainingSet {
    inputs: DataMatrix,
    targets: Vec<f64>,
}

impl TrainingSet {
    /// Pair inputs with targets; lengths must agree
    pub fn new(inputs: DataMatrix, targets: Vec<f64>) -> Result<Self> {
        if inputs.len() != targets.len() {
            return Err(KrrError::DimensionMismatch {
                expected: inputs.len(),
                actual: targets.len(),
            });
        }
        Ok(Self { inputs, targets })
    }

    /// Build a training set from 1-D inputs
    pub fn from_scalars(inputs: &[f64], targets: &[f64]) -> Result<Self> {
        Self::new(DataMatrix::from_scalars(inputs)?, targets.to_vec())
    }

    /// Input points
    pub fn inputs(&self) -> &DataMatrix {
        &self.inputs
    }

    /// One target per input point
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Which factorization produced the dual coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveMethod {
    /// Cholesky factorization of the positive definite system
    Cholesky,
    /// LU decomposition with partial pivoting
    Lu,
}

/// Result of the dual solve
#[derive(Debug, Clone)]
pub struct DualSolution {
    /// Dual coefficients `a` solving (K + λI) a = t
    pub coefficients: DVector<f64>,
    /// Factorization that succeeded
    pub method: SolveMethod,
}

/// Configuration for fitting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionConfig {
    /// Ridge regularization λ added to the Gram matrix diagonal
    pub lambda: f64,
}

impl Default for RegressionConfig {
    fn default() -> Self {
        Self { lambda: 0.001 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_matrix_from_scalars() {
        let x = DataMatrix::from_scalars(&[0.0, 0.5, 1.0]).unwrap();
        assert_eq!(x.len(), 3);
        assert_eq!(x.dim(), 1);
        assert_eq!(x.row(1), &[0.5]);
        assert_eq!(x.first_coordinates(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_data_matrix_ragged_rows() {
        let result = DataMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        match result {
            Err(KrrError::DimensionMismatch { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected dimension mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_data_matrix_empty() {
        assert!(matches!(
            DataMatrix::from_rows(Vec::new()),
            Err(KrrError::EmptyDataset)
        ));
        assert!(matches!(
            DataMatrix::from_rows(vec![vec![]]),
            Err(KrrError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_training_set_length_mismatch() {
        let x = DataMatrix::from_scalars(&[1.0, 2.0]).unwrap();
        assert!(matches!(
            TrainingSet::new(x, vec![1.0]),
            Err(KrrError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_training_set_from_scalars() {
        let set = TrainingSet::from_scalars(&[0.0, 1.0], &[1.0, -1.0]).unwrap();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.inputs().row(1), &[1.0]);
        assert_eq!(set.targets(), &[1.0, -1.0]);
    }

    #[test]
    fn test_regression_config_default() {
        let config = RegressionConfig::default();
        assert_eq!(config.lambda, 0.001);
    }
}
