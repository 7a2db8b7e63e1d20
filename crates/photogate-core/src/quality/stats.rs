use ndarray::Array2;

/// Population mean and variance, accumulated in f64 (two-pass).
pub fn mean_variance(values: &Array2<f64>) -> (f64, f64) {
    let n = values.len() as f64;
    if n == 0.0 {
        return (0.0, 0.0);
    }
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var)
}

/// Population mean and standard deviation.
pub fn mean_stddev(values: &Array2<f64>) -> (f64, f64) {
    let (mean, var) = mean_variance(values);
    (mean, var.sqrt())
}
