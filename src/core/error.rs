//! Error types for kernel ridge regression

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KrrError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Empty dataset")]
    EmptyDataset,

    #[error("Singular system: {0}")]
    SingularSystem(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Plot error: {0}")]
    PlotError(String),
}

pub type Result<T> = std::result::Result<T, KrrError>;
