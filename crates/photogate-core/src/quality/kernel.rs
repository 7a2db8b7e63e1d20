use ndarray::parallel::prelude::*;
use ndarray::{Array2, Axis};

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// A 3x3 convolution kernel, indexed `[row][col]`.
pub type Kernel3 = [[f64; 3]; 3];

/// Map an out-of-range index back into `0..n` by reflect-101
/// (`gfedcb|abcdefgh|gfedcba`). The edge sample is not repeated.
pub(crate) fn reflect_101(index: isize, n: usize) -> usize {
    if n == 1 {
        return 0;
    }
    let last = n as isize - 1;
    let mut i = index;
    loop {
        if i < 0 {
            i = -i;
        } else if i > last {
            i = 2 * last - i;
        } else {
            return i as usize;
        }
    }
}

/// Convolve with a 3x3 kernel using reflect-101 borders.
///
/// Every input pixel produces a response, accumulated in f64. Rows are
/// filled in parallel for large images; each output value is computed the
/// same way on either path.
pub fn convolve_3x3(data: &Array2<f32>, kernel: &Kernel3) -> Array2<f64> {
    let (h, w) = data.dim();

    let respond = |row: usize, col: usize| -> f64 {
        let mut acc = 0.0f64;
        for (ky, krow) in kernel.iter().enumerate() {
            let r = reflect_101(row as isize + ky as isize - 1, h);
            for (kx, &kv) in krow.iter().enumerate() {
                let c = reflect_101(col as isize + kx as isize - 1, w);
                acc += kv * data[[r, c]] as f64;
            }
        }
        acc
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        let mut result = Array2::<f64>::zeros((h, w));
        result
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, mut line)| {
                for (col, v) in line.iter_mut().enumerate() {
                    *v = respond(row, col);
                }
            });
        result
    } else {
        Array2::from_shape_fn((h, w), |(row, col)| respond(row, col))
    }
}
