use ndarray::{Array2, Zip};

use crate::buffer::GrayscaleBuffer;

use super::kernel::{convolve_3x3, Kernel3};
use super::stats::mean_stddev;

/// Horizontal Sobel kernel (aperture 3).
pub const SOBEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Vertical Sobel kernel (aperture 3).
pub const SOBEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel Sobel gradient magnitude `sqrt(gx^2 + gy^2)`.
pub fn gradient_magnitude_array(data: &Array2<f32>) -> Array2<f64> {
    let gx = convolve_3x3(data, &SOBEL_X);
    let gy = convolve_3x3(data, &SOBEL_Y);
    Zip::from(&gx)
        .and(&gy)
        .map_collect(|&x, &y| (x * x + y * y).sqrt())
}

/// Edge statistics behind the focus score.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeStats {
    pub mean_magnitude: f64,
    pub stddev_magnitude: f64,
    /// Adaptive cutoff: mean + one standard deviation.
    pub threshold: f64,
    pub edge_pixels: usize,
    pub total_pixels: usize,
}

impl EdgeStats {
    /// Fraction of pixels strictly above the adaptive threshold, in [0, 1].
    pub fn fraction(&self) -> f64 {
        if self.total_pixels == 0 {
            return 0.0;
        }
        self.edge_pixels as f64 / self.total_pixels as f64
    }
}

pub fn edge_stats_array(data: &Array2<f32>) -> EdgeStats {
    let magnitude = gradient_magnitude_array(data);
    let (mean, std) = mean_stddev(&magnitude);
    let threshold = mean + std;
    let edge_pixels = magnitude.iter().filter(|&&m| m > threshold).count();

    EdgeStats {
        mean_magnitude: mean,
        stddev_magnitude: std,
        threshold,
        edge_pixels,
        total_pixels: magnitude.len(),
    }
}

pub fn edge_stats(gray: &GrayscaleBuffer) -> EdgeStats {
    edge_stats_array(&gray.data)
}

/// Fraction of pixels with a strong gradient relative to the image's own
/// contrast. A uniform image scores exactly 0.
pub fn focus_score(gray: &GrayscaleBuffer) -> f64 {
    edge_stats(gray).fraction()
}
