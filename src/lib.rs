//! Rust implementation of kernel ridge regression
//!
//! Based on the dual formulation in Bishop, "Pattern Recognition and Machine
//! Learning", section 6.1: the fit solves (K + λI) a = t and predicts with
//! y(x) = Σᵢ aᵢ·k(xᵢ, x).

pub mod api;
pub mod core;
pub mod data;
pub mod gram;
pub mod kernel;
pub mod model;
pub mod persistence;
pub mod plot;
pub mod solver;

// Re-export main types for convenience
pub use crate::api::{EvaluationMetrics, KernelRidge};
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::core::{KrrError, Result};
pub use crate::data::{generate_sinusoid, SinusoidConfig, SinusoidData};
pub use crate::gram::{cross_kernel_matrix, gram_matrix};
pub use crate::kernel::{GaussianKernel, Kernel, KernelSpec, PolynomialKernel};
pub use crate::model::{predict, FittedModel};
pub use crate::solver::solve_dual;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
