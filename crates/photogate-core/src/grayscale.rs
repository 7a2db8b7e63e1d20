use ndarray::Array2;

use crate::buffer::{ColorLayout, GrayscaleBuffer, PixelBuffer, Samples};
use crate::consts::{INTENSITY_MAX, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, U16_TO_U8_SCALE};
use crate::error::{GateError, Result};

/// Reduce a pixel buffer to a single-channel intensity buffer on a 0-255 scale.
///
/// Gray input is copied through (rescaled if not 8-bit). RGB/BGR input is
/// combined with BT.601 luminance weights. Zero-area buffers are rejected
/// with [`GateError::InvalidImage`].
///
/// Float samples are clamped to 0.0..=1.0 first, so HDR highlights and
/// negative EXR values cannot push intensities outside 0-255. NaN passes
/// through and is reported by the checker.
///
/// Color reduction is not quantized to 8 bits, so blur and focus scores on
/// color input can differ slightly from tools that round to `u8` first.
pub fn to_grayscale(buffer: &PixelBuffer) -> Result<GrayscaleBuffer> {
    let (w, h) = (buffer.width(), buffer.height());
    if buffer.is_empty() {
        return Err(GateError::InvalidImage {
            width: w,
            height: h,
        });
    }

    let layout = buffer.layout();
    let data = match buffer.samples() {
        Samples::U8(v) => reduce(v, w, h, layout, |s| s as f32),
        Samples::U16(v) => reduce(v, w, h, layout, |s| s as f32 / U16_TO_U8_SCALE),
        Samples::F32(v) => reduce(v, w, h, layout, |s| s.clamp(0.0, 1.0) * INTENSITY_MAX),
    };

    Ok(GrayscaleBuffer::new(data))
}

fn reduce<T: Copy>(
    samples: &[T],
    width: usize,
    height: usize,
    layout: ColorLayout,
    scale: impl Fn(T) -> f32,
) -> Array2<f32> {
    let (r, b) = match layout {
        ColorLayout::Gray => {
            return Array2::from_shape_fn((height, width), |(row, col)| {
                scale(samples[row * width + col])
            });
        }
        ColorLayout::Rgb => (0, 2),
        ColorLayout::Bgr => (2, 0),
    };

    Array2::from_shape_fn((height, width), |(row, col)| {
        let base = (row * width + col) * 3;
        LUMINANCE_R * scale(samples[base + r])
            + LUMINANCE_G * scale(samples[base + 1])
            + LUMINANCE_B * scale(samples[base + b])
    })
}
