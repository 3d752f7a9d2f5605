use ndarray::Array1;

/// Clip every coordinate of `x` into `[lower[i], upper[i]]`
pub(crate) fn clip_inplace(x: &mut Array1<f64>, lower: &Array1<f64>, upper: &Array1<f64>) {
    for i in 0..x.len() {
        if x[i] < lower[i] {
            x[i] = lower[i];
        }
        if x[i] > upper[i] {
            x[i] = upper[i];
        }
        if x[i].is_nan() {
            x[i] = lower[i];
        }
    }
}
