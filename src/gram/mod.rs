//! Gram matrix construction
//!
//! The Gram matrix holds pairwise kernel evaluations over a data matrix.
//! Kernels are symmetric, so only entries with i <= j are evaluated and the
//! lower triangle is mirrored from them. Building it costs O(N²) kernel calls.

use crate::core::{DataMatrix, KrrError, Result};
use crate::kernel::Kernel;
use log::debug;
use nalgebra::DMatrix;

/// Compute the N×N Gram matrix K with K[i][j] = k(X[i], X[j])
pub fn gram_matrix<K: Kernel + ?Sized>(x: &DataMatrix, kernel: &K) -> DMatrix<f64> {
    let n = x.len();
    let mut gram = DMatrix::zeros(n, n);

    for i in 0..n {
        for j in i..n {
            let value = kernel.compute(x.row(i), x.row(j));
            gram[(i, j)] = value;
            gram[(j, i)] = value;
        }
    }

    debug!("Built {n}x{n} Gram matrix with {}", kernel.name());
    gram
}

/// Compute the M×N matrix of kernel evaluations between test and training points
///
/// Entry (i, j) is k(train[j], test[i]), so row i is the kernel vector of test point i.
pub fn cross_kernel_matrix<K: Kernel + ?Sized>(
    test: &DataMatrix,
    train: &DataMatrix,
    kernel: &K,
) -> Result<DMatrix<f64>> {
    if test.dim() != train.dim() {
        return Err(KrrError::DimensionMismatch {
            expected: train.dim(),
            actual: test.dim(),
        });
    }

    Ok(DMatrix::from_fn(test.len(), train.len(), |i, j| {
        kernel.compute(train.row(j), test.row(i))
    }))
}
