use std::path::Path;

use image::DynamicImage;
use tracing::debug;

use crate::buffer::{ColorLayout, PixelBuffer, Samples};
use crate::checker::QualityChecker;
use crate::error::Result;
use crate::report::QualityReport;

/// Convert a decoded image into a pixel buffer.
///
/// Gray images stay single-channel; anything with color (or alpha) is
/// flattened to RGB. Bit depth is preserved for 16-bit and float images.
pub fn from_dynamic_image(img: &DynamicImage) -> Result<PixelBuffer> {
    let (w, h) = (img.width() as usize, img.height() as usize);
    match img {
        DynamicImage::ImageLuma8(gray) => {
            PixelBuffer::new(w, h, ColorLayout::Gray, Samples::U8(gray.as_raw().clone()))
        }
        DynamicImage::ImageLuma16(gray) => {
            PixelBuffer::new(w, h, ColorLayout::Gray, Samples::U16(gray.as_raw().clone()))
        }
        DynamicImage::ImageLumaA16(_) => PixelBuffer::new(
            w,
            h,
            ColorLayout::Gray,
            Samples::U16(img.to_luma16().into_raw()),
        ),
        DynamicImage::ImageRgb16(_) | DynamicImage::ImageRgba16(_) => PixelBuffer::new(
            w,
            h,
            ColorLayout::Rgb,
            Samples::U16(img.to_rgb16().into_raw()),
        ),
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => PixelBuffer::new(
            w,
            h,
            ColorLayout::Rgb,
            Samples::F32(img.to_rgb32f().into_raw()),
        ),
        DynamicImage::ImageLumaA8(_) => PixelBuffer::new(
            w,
            h,
            ColorLayout::Gray,
            Samples::U8(img.to_luma8().into_raw()),
        ),
        _ => PixelBuffer::new(w, h, ColorLayout::Rgb, Samples::U8(img.to_rgb8().into_raw())),
    }
}

/// Decode an image file (any format the `image` crate reads).
pub fn load_pixel_buffer(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)?;
    let buffer = from_dynamic_image(&img)?;
    debug!(
        path = %path.display(),
        width = buffer.width(),
        height = buffer.height(),
        layout = %buffer.layout(),
        "Decoded image"
    );
    Ok(buffer)
}

/// Decode and evaluate an image file. Read and decode failures produce a
/// poor report with a single warning.
pub fn check_image_file(checker: &QualityChecker, path: &Path) -> QualityReport {
    checker.evaluate_source(load_pixel_buffer(path))
}
