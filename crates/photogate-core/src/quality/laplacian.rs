use ndarray::Array2;

use crate::buffer::GrayscaleBuffer;

use super::kernel::{convolve_3x3, Kernel3};
use super::stats::mean_variance;

/// 4-neighbour Laplacian (aperture 1):
///   0  1  0
///   1 -4  1
///   0  1  0
pub const LAPLACIAN_KERNEL: Kernel3 = [[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];

/// Second-derivative response field, same shape as the input.
pub fn laplacian_response(data: &Array2<f32>) -> Array2<f64> {
    convolve_3x3(data, &LAPLACIAN_KERNEL)
}

/// Laplacian variance of a grayscale image — higher means sharper.
///
/// The value is not normalized by resolution, so a threshold tuned at one
/// image size does not transfer unchanged to another.
pub fn laplacian_variance(gray: &GrayscaleBuffer) -> f64 {
    laplacian_variance_array(&gray.data)
}

pub fn laplacian_variance_array(data: &Array2<f32>) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let (_, var) = mean_variance(&laplacian_response(data));
    var
}
