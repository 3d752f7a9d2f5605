//! Unimodal test functions
//!
//! A single global optimum; used to check that the optimizer exploits well.

use ndarray::Array1;

/// Sphere function - bowl shaped
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

/// Schwefel 2.22 function - sum plus product of absolute values
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-10, 10]
pub fn schwefel_2_22(x: &Array1<f64>) -> f64 {
    let sum_abs: f64 = x.iter().map(|&xi| xi.abs()).sum();
    let prod_abs: f64 = x.iter().map(|&xi| xi.abs()).product();
    sum_abs + prod_abs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere() {
        assert_eq!(sphere(&Array1::from(vec![0.0, 0.0])), 0.0);
        assert_eq!(sphere(&Array1::from(vec![1.0, -2.0, 3.0])), 14.0);
    }

    #[test]
    fn test_schwefel_2_22() {
        assert_eq!(schwefel_2_22(&Array1::from(vec![0.0, 0.0])), 0.0);
        // |1| + |-2| + |1 * -2|
        assert_eq!(schwefel_2_22(&Array1::from(vec![1.0, -2.0])), 5.0);
    }
}
