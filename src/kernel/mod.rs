//! Kernel functions for ridge regression

pub mod gaussian;
pub mod polynomial;
pub mod spec;
pub mod traits;

pub use self::gaussian::*;
pub use self::polynomial::*;
pub use self::spec::*;
pub use self::traits::*;
