use ndarray::Array2;

use crate::buffer::GrayscaleBuffer;

/// Mean intensity (0-255). Low values mean an underexposed capture.
pub fn mean_brightness(gray: &GrayscaleBuffer) -> f64 {
    mean_brightness_array(&gray.data)
}

pub fn mean_brightness_array(data: &Array2<f32>) -> f64 {
    let n = data.len();
    if n == 0 {
        return 0.0;
    }
    data.iter().map(|&v| v as f64).sum::<f64>() / n as f64
}
