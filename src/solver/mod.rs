//! Dual solver for kernel ridge regression
//!
//! Solves (K + λI) a = t for the dual coefficients `a` (PRML eq. 6.8).
//! For λ > 0 the system matrix is positive definite, so a Cholesky
//! factorization is tried first; LU with partial pivoting is the fallback
//! for the λ = 0 or badly conditioned cases.

use crate::core::{DualSolution, KrrError, Result, SolveMethod};
use log::{debug, warn};
use nalgebra::{DMatrix, DVector};

/// Largest accepted relative residual of a solution
const RESIDUAL_TOLERANCE: f64 = 1e-6;

/// Solve (K + λI) a = t
///
/// # Errors
/// - `InvalidParameter` if λ is negative or not finite
/// - `DimensionMismatch` if K is not square or does not match t
/// - `SingularSystem` if neither factorization yields a finite solution with
///   non-vanishing pivots and a small relative residual
pub fn solve_dual(gram: &DMatrix<f64>, lambda: f64, targets: &[f64]) -> Result<DualSolution> {
    if !(lambda >= 0.0 && lambda.is_finite()) {
        return Err(KrrError::InvalidParameter(format!(
            "Regularization lambda must be non-negative and finite, got: {lambda}"
        )));
    }

    let n = gram.nrows();
    if gram.ncols() != n {
        return Err(KrrError::DimensionMismatch {
            expected: n,
            actual: gram.ncols(),
        });
    }
    if targets.len() != n {
        return Err(KrrError::DimensionMismatch {
            expected: n,
            actual: targets.len(),
        });
    }
    if n == 0 {
        return Err(KrrError::EmptyDataset);
    }

    let mut system = gram.clone();
    for i in 0..n {
        system[(i, i)] += lambda;
    }
    let rhs = DVector::from_column_slice(targets);

    if let Some(cholesky) = system.clone().cholesky() {
        let pivots = cholesky.l_dirty().diagonal().map(|l| l * l);
        let coefficients = cholesky.solve(&rhs);
        if well_pivoted(&pivots) && solves(&system, &coefficients, &rhs) {
            debug!("Solved {n}x{n} dual system with Cholesky (lambda={lambda})");
            return Ok(DualSolution {
                coefficients,
                method: SolveMethod::Cholesky,
            });
        }
    }

    warn!("System matrix is not numerically positive definite, falling back to LU");

    let lu = system.clone().lu();
    if well_pivoted(&lu.u().diagonal()) {
        if let Some(coefficients) = lu.solve(&rhs) {
            if solves(&system, &coefficients, &rhs) {
                debug!("Solved {n}x{n} dual system with LU (lambda={lambda})");
                return Ok(DualSolution {
                    coefficients,
                    method: SolveMethod::Lu,
                });
            }
        }
    }

    Err(KrrError::SingularSystem(format!(
        "K + lambda*I is numerically singular for lambda={lambda}; increase the regularization"
    )))
}

/// Smallest pivot magnitude must not vanish relative to the largest
fn well_pivoted(pivots: &DVector<f64>) -> bool {
    let (min, max) = pivots
        .iter()
        .fold((f64::INFINITY, 0.0_f64), |(lo, hi), p| {
            (lo.min(p.abs()), hi.max(p.abs()))
        });
    max.is_finite() && max > 0.0 && min / max > pivots.len() as f64 * f64::EPSILON
}

/// Finite coefficients with a small relative residual ||A a - t|| / ||t||
fn solves(system: &DMatrix<f64>, coefficients: &DVector<f64>, rhs: &DVector<f64>) -> bool {
    if !coefficients.iter().all(|x| x.is_finite()) {
        return false;
    }
    let residual = (system * coefficients - rhs).norm();
    residual <= RESIDUAL_TOLERANCE * rhs.norm()
}
