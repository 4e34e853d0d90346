//! Kernel trait definition

/// Kernel function trait
///
/// A kernel k(x, y) measures similarity between two points of equal dimension.
/// Implementations must be symmetric, `k(x, y) == k(y, x)`, because the Gram
/// matrix builder only evaluates the upper triangle.
pub trait Kernel: Send + Sync {
    /// Compute kernel value k(x, y)
    ///
    /// # Panics
    /// The built-in kernels panic if `x` and `y` differ in length. The Gram
    /// and prediction functions check dimensions first and return
    /// `DimensionMismatch` instead.
    fn compute(&self, x: &[f64], y: &[f64]) -> f64;

    /// Short description used in logs and plot titles
    fn name(&self) -> String {
        "custom".to_string()
    }
}

/// Any thread-safe closure over two points is a kernel
impl<F> Kernel for F
where
    F: Fn(&[f64], &[f64]) -> f64 + Send + Sync,
{
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        self(x, y)
    }
}

/// Dot product of two dense points
pub(crate) fn dot_product(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "points must share a dimension");
    x.iter().zip(y).map(|(a, b)| a * b).sum()
}

/// Squared Euclidean distance ||x - y||²
pub(crate) fn squared_distance(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "points must share a dimension");
    x.iter()
        .zip(y)
        .map(|(a, b)| {
            let diff = a - b;
            diff * diff
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_kernel() {
        let kernel = |x: &[f64], y: &[f64]| dot_product(x, y);
        assert_eq!(kernel.compute(&[1.0, 2.0], &[3.0, 4.0]), 11.0);
        assert_eq!(kernel.name(), "custom");
    }

    #[test]
    #[should_panic(expected = "points must share a dimension")]
    fn test_dot_product_rejects_unequal_lengths() {
        dot_product(&[1.0, 2.0], &[1.0]);
    }

    #[test]
    #[should_panic(expected = "points must share a dimension")]
    fn test_squared_distance_rejects_unequal_lengths() {
        squared_distance(&[1.0], &[1.0, 2.0]);
    }

    #[test]
    fn test_dot_product() {
        assert_eq!(dot_product(&[1.0, 3.0, 2.0], &[2.0, 1.0, 4.0]), 13.0);
        assert_eq!(dot_product(&[], &[]), 0.0);
    }

    #[test]
    fn test_squared_distance() {
        assert_eq!(squared_distance(&[1.0, 3.0], &[2.0, 1.0]), 5.0);
        assert_eq!(squared_distance(&[0.5], &[0.5]), 0.0);
    }
}
